//! Immutable network link.

use core::fmt;
use lf_core::units::{Length, Time};
use lf_core::VertexId;

use crate::medium::Medium;

/// An undirected link between two vertices.
///
/// Carries the transmission medium, the bandwidth capacity, and the physical
/// length. Immutable once built; every analysis reads links through the
/// frozen [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub(crate) v: VertexId,
    pub(crate) w: VertexId,
    pub(crate) medium: Medium,
    pub(crate) bandwidth: u32,
    pub(crate) length: Length,
}

impl Edge {
    /// One endpoint of this edge.
    pub fn either(&self) -> VertexId {
        self.v
    }

    /// The endpoint of this edge different from the given vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not an endpoint of this edge. The analyses only
    /// ever call this with a vertex obtained from the adjacency of this edge.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!("vertex {vertex} is not an endpoint of edge {self}")
        }
    }

    /// Transmission medium of this link.
    pub fn medium(&self) -> Medium {
        self.medium
    }

    /// Bandwidth capacity of this link. Nonnegative by type.
    pub fn bandwidth(&self) -> u32 {
        self.bandwidth
    }

    /// Physical length of this link.
    pub fn length(&self) -> Length {
        self.length
    }

    /// Propagation delay of this link: length divided by medium speed.
    pub fn latency(&self) -> Time {
        self.length / self.medium.speed()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{} {} {} {}m",
            self.v, self.w, self.medium, self.bandwidth, self.length.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::units::m;
    use lf_core::Id;

    fn edge(v: u32, w: u32, medium: Medium, bandwidth: u32, length_m: f64) -> Edge {
        Edge {
            v: Id::from_index(v),
            w: Id::from_index(w),
            medium,
            bandwidth,
            length: m(length_m),
        }
    }

    #[test]
    fn endpoints() {
        let e = edge(3, 7, Medium::Copper, 5, 50.0);
        let v = e.either();
        assert_eq!(v.index(), 3);
        assert_eq!(e.other(v).index(), 7);
        assert_eq!(e.other(e.other(v)).index(), 3);
    }

    #[test]
    #[should_panic(expected = "not an endpoint")]
    fn other_rejects_non_endpoint() {
        let e = edge(0, 1, Medium::Copper, 5, 50.0);
        e.other(Id::from_index(2));
    }

    #[test]
    fn latency_is_length_over_speed() {
        let e = edge(0, 1, Medium::Copper, 10, 100.0);
        assert_eq!(e.latency().value, 100.0 / 2.3e8);
    }

    #[test]
    fn optical_slower_than_copper_for_equal_length() {
        // In this model optical propagation is slower, so latency is higher.
        let cu = edge(0, 1, Medium::Copper, 10, 100.0);
        let fib = edge(0, 1, Medium::Optical, 10, 100.0);
        assert!(fib.latency() > cu.latency());
    }

    #[test]
    fn display_format() {
        let e = edge(0, 1, Medium::Optical, 10, 100.0);
        assert_eq!(e.to_string(), "0-1 optical 10 100m");
    }
}

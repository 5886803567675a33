//! Transmission media and their propagation speeds.

use core::fmt;
use lf_core::units::{Velocity, mps};

/// Propagation speed of copper cabling, m/s.
pub const COPPER_SPEED_MPS: f64 = 2.3e8;

/// Propagation speed of optical fiber, m/s.
pub const OPTICAL_SPEED_MPS: f64 = 2.0e8;

/// Transmission medium of a link.
///
/// A closed enum: an unrecognized medium is unrepresentable inside the
/// engine. Token parsing (and rejection of unknown tokens) is the loader's
/// job, not the model's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    Copper,
    Optical,
}

impl Medium {
    /// Propagation speed of a signal on this medium.
    pub fn speed(self) -> Velocity {
        match self {
            Medium::Copper => mps(COPPER_SPEED_MPS),
            Medium::Optical => mps(OPTICAL_SPEED_MPS),
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Medium::Copper => write!(f, "copper"),
            Medium::Optical => write!(f, "optical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds_are_fixed_per_medium() {
        assert_eq!(Medium::Copper.speed().value, 2.3e8);
        assert_eq!(Medium::Optical.speed().value, 2.0e8);
        assert!(Medium::Copper.speed() > Medium::Optical.speed());
    }

    #[test]
    fn display_matches_loader_tokens() {
        assert_eq!(Medium::Copper.to_string(), "copper");
        assert_eq!(Medium::Optical.to_string(), "optical");
    }
}

//! Topology file loader.
//!
//! Format: a vertex count, then one edge tuple per line:
//!
//! ```text
//! 4
//! 0 1 copper 10 100.0
//! 1 2 optical 10 100.0
//! 0 3 copper 5 50.0
//! ```
//!
//! Tokens are whitespace-separated; `<v> <w> <medium> <bandwidth> <length>`
//! with endpoints in `[0, V)`, medium `copper` or `optical`, a nonnegative
//! integer bandwidth and a nonnegative real length in meters. All parsing
//! and token rejection happens here; the engine crates never see text.

use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

use lf_core::units::m;
use lf_core::{LfError, VertexId};
use lf_graph::{Graph, GraphBuilder, Medium};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read topology file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of file while reading {what}")]
    UnexpectedEof { what: &'static str },

    #[error("invalid {what}: {token:?}")]
    InvalidToken { what: &'static str, token: String },

    #[error("unknown medium {token:?} (expected copper or optical)")]
    UnknownMedium { token: String },

    #[error("bandwidth must be nonnegative, got {value}")]
    NegativeBandwidth { value: i64 },

    #[error("length must be nonnegative, got {value}")]
    NegativeLength { value: f64 },

    #[error("vertex {vertex} is not between 0 and {}", vertex_count.saturating_sub(1))]
    VertexOutOfRange { vertex: i64, vertex_count: usize },

    #[error(transparent)]
    Graph(#[from] LfError),
}

/// Read and parse a topology file into a frozen graph.
pub fn load_topology(path: &Path) -> Result<Graph, LoadError> {
    let text = fs::read_to_string(path)?;
    let graph = parse_topology(&text)?;
    debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "topology loaded"
    );
    Ok(graph)
}

/// Parse topology text into a frozen graph.
pub fn parse_topology(text: &str) -> Result<Graph, LoadError> {
    let mut tokens = text.split_whitespace();

    let vertex_count = parse_count(&mut tokens)?;
    let mut builder = GraphBuilder::new(vertex_count);

    while let Some(first) = tokens.next() {
        let v = parse_vertex(first, vertex_count)?;
        let w = parse_vertex(next_token(&mut tokens, "second endpoint")?, vertex_count)?;
        let medium = parse_medium(next_token(&mut tokens, "medium")?)?;
        let bandwidth = parse_bandwidth(next_token(&mut tokens, "bandwidth")?)?;
        let length_m = parse_length(next_token(&mut tokens, "length")?)?;
        builder.add_link(v, w, medium, bandwidth, m(length_m))?;
    }

    Ok(builder.build()?)
}

fn next_token<'a>(
    tokens: &mut SplitWhitespace<'a>,
    what: &'static str,
) -> Result<&'a str, LoadError> {
    tokens.next().ok_or(LoadError::UnexpectedEof { what })
}

fn parse_count(tokens: &mut SplitWhitespace<'_>) -> Result<usize, LoadError> {
    let token = next_token(tokens, "vertex count")?;
    token.parse().map_err(|_| LoadError::InvalidToken {
        what: "vertex count",
        token: token.into(),
    })
}

fn parse_vertex(token: &str, vertex_count: usize) -> Result<VertexId, LoadError> {
    let vertex: i64 = token.parse().map_err(|_| LoadError::InvalidToken {
        what: "vertex",
        token: token.into(),
    })?;
    if vertex < 0 || vertex as usize >= vertex_count {
        return Err(LoadError::VertexOutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(VertexId::from_index(vertex as u32))
}

fn parse_medium(token: &str) -> Result<Medium, LoadError> {
    // The corrected contract: accept exactly these two tokens, reject
    // everything else. An unknown medium never resolves to a default speed.
    match token {
        "copper" => Ok(Medium::Copper),
        "optical" => Ok(Medium::Optical),
        _ => Err(LoadError::UnknownMedium {
            token: token.into(),
        }),
    }
}

fn parse_bandwidth(token: &str) -> Result<u32, LoadError> {
    let value: i64 = token.parse().map_err(|_| LoadError::InvalidToken {
        what: "bandwidth",
        token: token.into(),
    })?;
    if value < 0 {
        return Err(LoadError::NegativeBandwidth { value });
    }
    u32::try_from(value).map_err(|_| LoadError::InvalidToken {
        what: "bandwidth",
        token: token.into(),
    })
}

fn parse_length(token: &str) -> Result<f64, LoadError> {
    let value: f64 = token.parse().map_err(|_| LoadError::InvalidToken {
        what: "length",
        token: token.into(),
    })?;
    if !value.is_finite() {
        return Err(LoadError::InvalidToken {
            what: "length",
            token: token.into(),
        });
    }
    if value < 0.0 {
        return Err(LoadError::NegativeLength { value });
    }
    Ok(value)
}

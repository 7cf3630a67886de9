//! Reader for the line-oriented orienteering problem format.
//!
//! ```text
//! n 4
//! m 2
//! tmax 20.0
//! 0.0 0.0 0
//! 3.0 4.0 10
//! 6.0 8.0 20
//! 0.0 10.0 15
//! ```
//!
//! Header lines are `n <count>`, `m <vehicles>` and `tmax <budget>`, where
//! the budget must be a positive finite number. Every
//! line whose first field is numeric describes a node as `x y score`; the
//! first node is the depot.

use std::path::Path;

use thiserror::Error;

use crate::error::{OrienteeringError, Result};
use crate::models::{Node, ProblemInstance};

/// Vehicle count used when the file has no usable `m` line.
pub const DEFAULT_VEHICLE_COUNT: usize = 1;

/// Non-fatal problem found while reading an instance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseWarning {
    /// Header `n` disagrees with the number of node lines
    #[error("node count mismatch (expected {declared}, got {actual})")]
    NodeCountMismatch {
        /// Count declared by the `n` line
        declared: usize,
        /// Nodes actually read
        actual: usize,
    },

    /// A required header line never appeared
    #[error("missing '{0}' line, using default")]
    MissingHeader(&'static str),

    /// Header with a missing or unparseable value
    #[error("line {line}: invalid value for '{key}'")]
    InvalidHeader {
        /// 1-based line number
        line: usize,
        /// Header key
        key: &'static str,
    },

    /// Node line without three parseable fields
    #[error("line {line}: invalid node line '{content}', skipped")]
    InvalidNodeLine {
        /// 1-based line number
        line: usize,
        /// Trimmed line text
        content: String,
    },

    /// Line that is neither a header nor a node
    #[error("line {line}: unrecognized line, skipped")]
    UnrecognizedLine {
        /// 1-based line number
        line: usize,
    },
}

/// Instance read from text together with everything that looked wrong.
#[derive(Debug, Clone)]
pub struct ParsedInstance {
    pub instance: ProblemInstance,
    pub warnings: Vec<ParseWarning>,
}

/// Parses an instance from text. Never fails; problems become warnings.
///
/// # Examples
///
/// ```
/// use u_orienteering::parser::parse_instance;
///
/// let parsed = parse_instance("n 2\nm 1\ntmax 20\n0 0 0\n3 4 10\n");
/// assert!(parsed.warnings.is_empty());
/// assert_eq!(parsed.instance.num_nodes(), 2);
/// assert_eq!(parsed.instance.score(1), 10);
/// ```
pub fn parse_instance(text: &str) -> ParsedInstance {
    let mut warnings = Vec::new();
    let mut declared: Option<usize> = None;
    let mut vehicles: Option<usize> = None;
    let mut tmax: Option<f64> = None;
    let mut nodes = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };

        match first.to_ascii_lowercase().as_str() {
            "n" => match fields.next().and_then(|v| v.parse().ok()) {
                Some(v) => declared = Some(v),
                None => warnings.push(ParseWarning::InvalidHeader { line: line_no, key: "n" }),
            },
            "m" => match fields.next().and_then(|v| v.parse().ok()) {
                Some(v) => vehicles = Some(v),
                None => warnings.push(ParseWarning::InvalidHeader { line: line_no, key: "m" }),
            },
            "tmax" => match fields
                .next()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
            {
                Some(v) => tmax = Some(v),
                None => warnings.push(ParseWarning::InvalidHeader {
                    line: line_no,
                    key: "tmax",
                }),
            },
            _ if first.parse::<f64>().is_ok() => match parse_node(line) {
                Some(node) => nodes.push(node),
                None => warnings.push(ParseWarning::InvalidNodeLine {
                    line: line_no,
                    content: line.to_string(),
                }),
            },
            _ => warnings.push(ParseWarning::UnrecognizedLine { line: line_no }),
        }
    }

    if vehicles.is_none() {
        warnings.push(ParseWarning::MissingHeader("m"));
    }
    if tmax.is_none() {
        warnings.push(ParseWarning::MissingHeader("tmax"));
    }
    match declared {
        Some(d) if d != nodes.len() => warnings.push(ParseWarning::NodeCountMismatch {
            declared: d,
            actual: nodes.len(),
        }),
        Some(_) => {}
        None => warnings.push(ParseWarning::MissingHeader("n")),
    }

    ParsedInstance {
        instance: ProblemInstance::new(
            nodes,
            vehicles.unwrap_or(DEFAULT_VEHICLE_COUNT),
            tmax.unwrap_or(0.0),
        ),
        warnings,
    }
}

/// Reads and parses an instance file.
///
/// Only I/O failures are errors; content problems are returned as warnings.
pub fn read_instance(path: impl AsRef<Path>) -> Result<ParsedInstance> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| OrienteeringError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_instance(&text))
}

fn parse_node(line: &str) -> Option<Node> {
    let mut fields = line.split_whitespace();
    let x: f64 = fields.next()?.parse().ok()?;
    let y: f64 = fields.next()?.parse().ok()?;
    let score: u32 = fields.next()?.parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Node::new(x, y, score))
}

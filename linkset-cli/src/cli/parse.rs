//! Edge-list file parsing.
//!
//! The format is line based. Blank lines and lines starting with `#` are
//! skipped. The first remaining line holds the vertex count; each later line
//! is `source target weight` separated by whitespace.

use std::io::{self, BufRead};

use linkset_core::{EdgeList, WeightedEdge};
use thiserror::Error;

/// Errors raised while reading an edge list. Line numbers are 1-based and
/// count every physical line, comments included.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),
    /// The input contained no data lines.
    #[error("edge list is empty: expected a vertex count")]
    MissingVertexCount,
    /// The header line is not a non-negative integer.
    #[error("line {line}: invalid vertex count `{raw}`")]
    InvalidVertexCount {
        /// Line holding the header.
        line: usize,
        /// Header text as written.
        raw: String,
    },
    /// An edge line did not have exactly three fields.
    #[error("line {line}: expected `source target weight`, found {fields} field(s)")]
    FieldCount {
        /// Offending line.
        line: usize,
        /// Number of whitespace-separated fields found.
        fields: usize,
    },
    /// An endpoint is not a non-negative integer.
    #[error("line {line}: invalid vertex id `{raw}`")]
    InvalidVertex {
        /// Offending line.
        line: usize,
        /// Endpoint text as written.
        raw: String,
    },
    /// The weight is not a floating-point number.
    #[error("line {line}: invalid weight `{raw}`")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Weight text as written.
        raw: String,
    },
}

/// Reads an edge list from `reader`.
///
/// Endpoints are not checked against the vertex count here; the core
/// rejects them when the graph is used.
///
/// # Errors
/// Returns [`ParseError`] on I/O failure or malformed content.
///
/// # Examples
/// ```
/// use linkset_cli::cli::parse_edge_list;
/// use linkset_core::WeightedGraph;
///
/// let input = "# triangle\n3\n0 1 1.5\n1 2 2\n\n0 2 4\n";
/// let graph = parse_edge_list(input.as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 3);
/// # Ok::<(), linkset_cli::cli::ParseError>(())
/// ```
pub fn parse_edge_list(reader: impl BufRead) -> Result<EdgeList<f64>, ParseError> {
    let mut data_lines = data_lines(reader);

    let (header_line, header) = data_lines
        .next()
        .transpose()?
        .ok_or(ParseError::MissingVertexCount)?;
    let vertex_count = header
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidVertexCount {
            line: header_line,
            raw: header.clone(),
        })?;

    let mut graph = EdgeList::new(vertex_count, Vec::new());
    for entry in data_lines {
        let (line, text) = entry?;
        graph.push(parse_edge(line, &text)?);
    }
    Ok(graph)
}

/// Yields `(line_number, trimmed_text)` for every non-blank, non-comment
/// line.
fn data_lines(reader: impl BufRead) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| match line {
            Ok(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty() && !trimmed.starts_with('#'))
                    .then(|| Ok((index + 1, trimmed.to_owned())))
            }
            Err(err) => Some(Err(err)),
        })
}

fn parse_edge(line: usize, text: &str) -> Result<WeightedEdge<f64>, ParseError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            line,
            fields: fields.len(),
        });
    };
    let vertex = |raw: &str| {
        raw.parse::<usize>()
            .map_err(|_| ParseError::InvalidVertex {
                line,
                raw: raw.to_owned(),
            })
    };
    let weight = weight
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidWeight {
            line,
            raw: (*weight).to_owned(),
        })?;
    Ok(WeightedEdge::new(vertex(*source)?, vertex(*target)?, weight))
}

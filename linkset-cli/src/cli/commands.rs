//! Command implementations and argument parsing for the `linkset` binary.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkset_core::{
    DisjointSet, DisjointSetError, EdgeList, GraphEdge, SpanningForest, WeightedEdge,
    WeightedGraph, kruskal,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::parse::{ParseError, parse_edge_list};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "linkset",
    about = "Build spanning forests and disjoint sets from edge-list files."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute a minimum spanning forest with Kruskal's algorithm.
    Mst(MstCommand),
    /// Union every edge's endpoints and print the resulting sets.
    Sets(SetsCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Output format for the forest.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Options accepted by the `sets` command.
#[derive(Debug, Args, Clone)]
pub struct SetsCommand {
    /// Path to the edge-list file. Weights are read but ignored.
    pub path: PathBuf,
}

/// Output formats for the `mst` command.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one accepted edge per line.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file is not a valid edge list.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with its line number.
        #[source]
        source: ParseError,
    },
    /// The graph was rejected by the core, usually for an out-of-range
    /// vertex id.
    #[error(transparent)]
    Core(#[from] DisjointSetError),
}

/// A computed spanning forest ready for rendering.
#[derive(Debug, Clone)]
pub struct ForestReport {
    /// Number of vertices declared by the input.
    pub vertex_count: usize,
    /// Accepted edges and component count.
    pub forest: SpanningForest<WeightedEdge<f64>>,
    /// Requested output format.
    pub format: OutputFormat,
}

/// Disjoint sets produced by the `sets` command.
#[derive(Debug, Clone)]
pub struct SetsReport {
    /// Number of edges read from the input.
    pub edges_applied: usize,
    /// The set after every union.
    pub sets: DisjointSet,
}

/// Outcome of a CLI command.
#[derive(Debug, Clone)]
pub enum Report {
    /// Output of `linkset mst`.
    Forest(ForestReport),
    /// Output of `linkset sets`.
    Sets(SetsReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when it
/// references vertices outside the declared range.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linkset_cli::cli::{Cli, Command, MstCommand, OutputFormat, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 1\n1 2 2\n0 2 3\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         format: OutputFormat::Human,
///     }),
/// };
/// let Report::Forest(report) = run_cli(cli)? else {
///     unreachable!("mst produces a forest");
/// };
/// assert!(report.forest.is_tree());
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(command).map(Report::Forest)
        }
        Command::Sets(command) => {
            span.record("command", field::display("sets"));
            run_sets(command).map(Report::Sets)
        }
    }
}

#[instrument(name = "cli.mst", err, skip(command), fields(path = field::Empty))]
pub(super) fn run_mst(command: MstCommand) -> Result<ForestReport, CliError> {
    let MstCommand { path, format } = command;
    Span::current().record("path", field::display(path.display()));
    let graph = load_graph(&path)?;
    let forest = kruskal(&graph)?;
    info!(
        vertices = graph.vertex_count(),
        accepted = forest.edges().len(),
        components = forest.component_count(),
        "spanning forest computed"
    );
    Ok(ForestReport {
        vertex_count: graph.vertex_count(),
        forest,
        format,
    })
}

#[instrument(name = "cli.sets", err, skip(command), fields(path = field::Empty))]
pub(super) fn run_sets(command: SetsCommand) -> Result<SetsReport, CliError> {
    Span::current().record("path", field::display(command.path.display()));
    let graph = load_graph(&command.path)?;

    let mut sets = DisjointSet::new(graph.vertex_count());
    for _ in 0..graph.vertex_count() {
        sets.make()?;
    }
    for edge in graph.edges() {
        sets.union(edge.source(), edge.target())?;
    }
    info!(
        elements = sets.len(),
        components = sets.component_count(),
        "disjoint sets built"
    );
    Ok(SetsReport {
        edges_applied: graph.edge_count(),
        sets,
    })
}

#[instrument(name = "cli.load_graph", err, fields(path = field::Empty))]
pub(super) fn load_graph(path: &Path) -> Result<EdgeList<f64>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(BufReader::new(file)).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Serialize)]
struct ForestDocument {
    vertex_count: usize,
    component_count: usize,
    is_tree: bool,
    total_weight: f64,
    edges: Vec<EdgeDocument>,
}

#[derive(Serialize)]
struct EdgeDocument {
    source: usize,
    target: usize,
    weight: f64,
}

impl From<&ForestReport> for ForestDocument {
    fn from(report: &ForestReport) -> Self {
        Self {
            vertex_count: report.vertex_count,
            component_count: report.forest.component_count(),
            is_tree: report.forest.is_tree(),
            total_weight: report.forest.total_weight(),
            edges: report
                .forest
                .edges()
                .iter()
                .map(|edge| EdgeDocument {
                    source: edge.source(),
                    target: edge.target(),
                    weight: edge.weight(),
                })
                .collect(),
        }
    }
}

/// Renders `report` to `writer`.
///
/// Forests are written as text or JSON according to their requested format.
/// Sets are written as their slot-by-slot listing.
///
/// # Errors
/// Returns [`io::Error`] if writing fails or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use linkset_cli::cli::{Report, SetsReport, render_report};
/// # use linkset_core::DisjointSet;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut sets = DisjointSet::new(2);
/// sets.make()?;
/// sets.make()?;
/// sets.union(0, 1)?;
/// let report = Report::Sets(SetsReport { edges_applied: 1, sets });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.starts_with("components: 1\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Forest(forest) => match forest.format {
            OutputFormat::Human => render_forest_human(forest, &mut writer),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &ForestDocument::from(forest))?;
                writeln!(writer)
            }
        },
        Report::Sets(sets) => {
            writeln!(writer, "components: {}", sets.sets.component_count())?;
            writeln!(writer, "edges applied: {}", sets.edges_applied)?;
            write!(writer, "{}", sets.sets)
        }
    }
}

fn render_forest_human(report: &ForestReport, writer: &mut impl Write) -> io::Result<()> {
    let forest = &report.forest;
    writeln!(writer, "vertices: {}", report.vertex_count)?;
    writeln!(writer, "components: {}", forest.component_count())?;
    writeln!(writer, "edges: {}", forest.edges().len())?;
    writeln!(writer, "total weight: {}", forest.total_weight::<f64>())?;
    for edge in forest.edges() {
        writeln!(writer, "{}\t{}\t{}", edge.source(), edge.target(), edge.weight())?;
    }
    Ok(())
}

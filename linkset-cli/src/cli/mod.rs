//! Command-line interface for linkset.
//!
//! `mst` reads an edge-list file and prints its minimum spanning forest;
//! `sets` unions every edge's endpoints and prints the resulting partition.

mod commands;
mod parse;

pub use commands::{
    Cli, CliError, Command, ForestReport, MstCommand, OutputFormat, Report, SetsCommand,
    SetsReport, render_report, run_cli,
};
pub use parse::{ParseError, parse_edge_list};

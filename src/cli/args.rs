use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bounded-width clause encoding, and metrics on graph layouts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(super) struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(super) enum Command {
    /// Split each clause of a DIMACS formula to within a width.
    Split {
        /// The DIMACS formula to read.
        file: PathBuf,

        /// The split limit.
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        #[arg(long_help = "The split limit.

A limit of 0 (or below) disables splitting.
With a limit of w of at least 2, a clause longer than w is split into chunks of w literals and a fresh atom, followed by a final chunk of at most w literals.")]
        width: isize,

        /// Where to write the split formula, standard output by default.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarise a graph, and report metrics on a labelling of the graph.
    Graph {
        /// The graph to read.
        file: PathBuf,

        /// A labelling of the nodes of the graph, one label for each node in order.
        #[arg(short, long)]
        labels: Option<PathBuf>,

        /// Write the summary and report as JSON.
        #[arg(long)]
        json: bool,
    },
}

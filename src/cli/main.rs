use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Serialize;

use cnf_split::{
    builder::dimacs::{parse_dimacs, write_header},
    config::Config,
    encoder::ClauseEncoder,
    graph::{
        metrics::{parse_labels, LayoutReport},
        Graph, GraphSummary,
    },
    sink::DimacsSink,
    types::err::ErrorKind,
};

use args::{Args, Command};
use read::ReadError;

mod args;
mod read;

enum CliError {
    Read(ReadError),
    Library(ErrorKind),
    Output(std::io::ErrorKind),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Read(e) => write!(f, "{e}"),
            Self::Library(e) => write!(f, "{e}"),
            Self::Output(kind) => write!(f, "Failed to write output: {kind}"),
        }
    }
}

impl From<ReadError> for CliError {
    fn from(e: ReadError) -> Self {
        CliError::Read(e)
    }
}

impl From<ErrorKind> for CliError {
    fn from(e: ErrorKind) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Output(e.kind())
    }
}

#[derive(Serialize)]
struct GraphOutput {
    summary: GraphSummary,
    layout: Option<LayoutReport>,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let result = match args.command {
        Command::Split {
            file,
            width,
            output,
        } => split(&file, width, output),

        Command::Graph { file, labels, json } => graph(&file, labels, json),
    };

    if let Err(e) = result {
        eprintln!("c {e}");
        std::process::exit(1);
    }
}

fn split(path: &Path, width: isize, output: Option<PathBuf>) -> Result<(), CliError> {
    let formula = parse_dimacs(read::open(path)?).map_err(ReadError::from)?;

    match formula.expected_atoms {
        Some(count) => eprintln!("c Expected atoms:   {count}"),
        None => eprintln!("c No preamble was found."),
    }
    eprintln!("c Read clauses:     {}", formula.clauses.len());

    let mut config = Config::default();
    config.split_limit.value = width;
    config.reserved_atoms.value = formula.atom_floor();

    // Nothing is written unless each clause can be forwarded.
    formula.check_clauses()?;
    let limit = config.split_limit().map_err(ErrorKind::from)?;
    let (atoms, clauses) = formula.split_counts(limit);

    let mut writer: BufWriter<Box<dyn Write>> = match output {
        Some(path) => BufWriter::new(Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(std::io::stdout().lock())),
    };
    write_header(&mut writer, atoms, clauses)?;

    let mut encoder = ClauseEncoder::from_config(&config, DimacsSink::new(writer))?;
    let mut forwarded = 0;
    for clause in formula.clauses {
        forwarded += encoder.add_clause(clause)?;
        // The record is not needed, as each clause is written on being forwarded.
        encoder.clear();
    }
    let fresh = encoder.allocator().issued();

    encoder.into_sink().finish().map_err(ErrorKind::from)?;

    eprintln!("c Split limit:      {limit}");
    eprintln!("c Fresh atoms:      {fresh}");
    eprintln!("c Written clauses:  {forwarded}");
    Ok(())
}

fn graph(path: &Path, labels: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let the_graph = Graph::from_reader(read::open(path)?, name).map_err(ReadError::from)?;

    let layout = match labels {
        Some(labels_path) => {
            let labels = parse_labels(read::open(&labels_path)?).map_err(ReadError::from)?;
            Some(the_graph.layout_report(&labels)?)
        }
        None => None,
    };

    let output = GraphOutput {
        summary: the_graph.summary(),
        layout,
    };

    match json {
        true => match serde_json::to_string_pretty(&output) {
            Ok(string) => println!("{string}"),
            Err(e) => return Err(CliError::Output(std::io::Error::from(e).kind())),
        },

        false => {
            let summary = &output.summary;
            println!("c Graph:                 {}", summary.name.as_deref().unwrap_or("-"));
            println!("c Nodes:                 {}", summary.nodes);
            println!("c Edges:                 {}", summary.edges);
            println!("c Components:            {}", summary.components);
            if let Some(node) = summary.greatest_degree_node {
                println!("c Greatest degree node:  {node}");
            }
            if let Some(node) = summary.smallest_degree_node {
                println!("c Smallest degree node:  {node}");
            }
            if let Some(report) = &output.layout {
                println!("c Bandwidth:             {}", report.bandwidth);
                println!("c Antibandwidth:         {}", report.antibandwidth);
                println!("c Cyclic antibandwidth:  {}", report.cyclic_antibandwidth);
            }
        }
    }

    Ok(())
}

//! A library for encoding clauses of a boolean formula in conjunctive normal form within a bounded width.
//!
//! Some consumers of a formula (solver back ends, hardware-constrained solvers, proof pipelines, …) place a hard bound on the number of literals in a clause.
//! cnf_split rewrites any clause which exceeds a configured bound into a chain of shorter clauses linked by fresh atoms, such that the chain is satisfiable if and only if the original clause is.
//!
//! # Orientation
//!
//! The library is built around an [encoder](crate::encoder::ClauseEncoder).
//!
//! An encoder is built from a [configuration](crate::config) and a [sink](crate::sink) to which every clause produced by the encoder is forwarded.
//! Fresh atoms introduced when splitting a clause are taken from a [variable allocator](crate::db::atom::VariableAllocator) owned by the encoder, seeded above any atom used by the caller.
//!
//! Useful starting points, then, may be:
//! - The [splitting procedure](crate::encoder::ClauseEncoder::add_clause).
//! - The [structures] to familiarise yourself with the representation of atoms, literals, and clauses.
//! - The [DIMACS](crate::builder::dimacs) reader and writer, for using the encoder on a formula stored in a file.
//! - The [graph] module, for instances of layout problems (bandwidth, antibandwidth, …) and metrics on a labelling of such instances.
//!
//! # Examples
//!
//! + Split a clause of five literals into clauses of width (at most) three.
//!
//! ```rust
//! # use cnf_split::config::Config;
//! # use cnf_split::encoder::ClauseEncoder;
//! # use cnf_split::structures::clause::CClause;
//! let mut config = Config::default();
//! config.split_limit.value = 3;
//! config.reserved_atoms.value = 5;
//!
//! let mut encoder = ClauseEncoder::from_config(&config, Vec::<CClause>::new()).unwrap();
//!
//! assert_eq!(encoder.add_clause(vec![1, 2, 3, 4, 5]), Ok(2));
//! assert_eq!(encoder.size(), 2);
//!
//! let forwarded = encoder.into_sink();
//! assert_eq!(forwarded, vec![vec![1, 2, 3, 6], vec![-6, 4, 5]]);
//! ```
//!
//! + Read a DIMACS formula and split each clause.
//!
//! ```rust
//! # use cnf_split::builder::dimacs::parse_dimacs;
//! # use cnf_split::config::Config;
//! # use cnf_split::encoder::ClauseEncoder;
//! # use cnf_split::sink::DiscardSink;
//! let formula = parse_dimacs("p cnf 4 2\n1 2 3 4 0\n-1 -2 0\n".as_bytes()).unwrap();
//!
//! let mut config = Config::default();
//! config.split_limit.value = 2;
//! config.reserved_atoms.value = formula.atom_floor();
//!
//! let mut encoder = ClauseEncoder::from_config(&config, DiscardSink).unwrap();
//! assert!(encoder.add_clauses(formula.clauses).is_ok());
//!
//! // 1 2 5 0, -5 3 6 0, -6 4 0, -1 -2 0
//! assert_eq!(encoder.size(), 4);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! No log implementation is provided.
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) logs of each forwarded clause can be found with `RUST_LOG=encoder=trace …`

pub mod builder;
pub mod config;
pub mod db;
pub mod encoder;
pub mod graph;
pub mod misc;
pub mod sink;
pub mod structures;
pub mod types;

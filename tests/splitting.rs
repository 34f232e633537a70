use cnf_split::{
    config::{Config, SplitLimit},
    db::atom::VariableAllocator,
    encoder::{split_count, ClauseEncoder},
    sink::{CallbackSink, DiscardSink},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
        valuation::all_valuations,
    },
    types::err::{self, ErrorKind},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Splits `clause`, whose atoms are `1..=reserved`, to within `width`.
fn split(clause: &CClause, width: usize, reserved: Atom) -> Vec<CClause> {
    let mut encoder = ClauseEncoder::new(
        SplitLimit::Width(width),
        VariableAllocator::new(reserved),
        Vec::default(),
    )
    .unwrap();
    assert!(encoder.add_clause(clause.clone()).is_ok());
    encoder.into_sink()
}

/// Whether some valuation of the atoms `original + 1..=total` extends `valuation` to satisfy each chunk.
fn extendable(valuation: &[bool], chunks: &[CClause], total: usize) -> bool {
    let original = valuation.len() - 1;
    all_valuations(total - original).any(|extension| {
        let mut full = valuation.to_vec();
        full.extend_from_slice(&extension[1..]);
        chunks.iter().all(|chunk| chunk.satisfied_on(&full))
    })
}

mod equivalence {
    use super::*;

    #[test]
    fn exhaustive_small() {
        let mut rng = SmallRng::seed_from_u64(17);

        for length in 3..=8 {
            for width in 2..=4 {
                let clause = (1..=length as Atom)
                    .map(|atom| CLiteral::new(atom, rng.gen_bool(0.5)))
                    .collect::<CClause>();

                let chunks = split(&clause, width, length as Atom);
                let total = length + split_count(length, SplitLimit::Width(width));

                for valuation in all_valuations(length) {
                    assert_eq!(
                        clause.satisfied_on(&valuation),
                        extendable(&valuation, &chunks, total),
                        "clause {clause:?} width {width} valuation {valuation:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn repeated_atoms() {
        // Atoms may repeat, and a clause may be a tautology.
        let clause = vec![1, -1, 2, 2, -3, 1, 3];
        let chunks = split(&clause, 2, 3);
        let total = 3 + split_count(clause.len(), SplitLimit::Width(2));

        for valuation in all_valuations(3) {
            assert!(extendable(&valuation, &chunks, total));
        }
    }

    #[test]
    fn unsatisfied_only_when_all_false() {
        let clause = vec![1, 2, 3, 4, 5, 6, 7];
        let chunks = split(&clause, 3, 7);
        let total = 7 + split_count(clause.len(), SplitLimit::Width(3));

        let all_false = vec![false; 8];
        assert!(!extendable(&all_false, &chunks, total));

        let mut last_true = all_false.clone();
        last_true[7] = true;
        assert!(extendable(&last_true, &chunks, total));
    }
}

mod width {
    use super::*;

    #[test]
    fn chunk_widths() {
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..200 {
            let length = rng.gen_range(1..40);
            let width = rng.gen_range(2..8);
            let clause = (1..=length as i32).collect::<CClause>();

            let chunks = split(&clause, width, length as Atom);
            let (last, prefixes) = chunks.split_last().unwrap();

            assert!(prefixes.iter().all(|chunk| chunk.size() == width + 1));
            assert!(!last.is_empty() && last.size() <= width);
        }
    }

    #[test]
    fn order_preserved() {
        let clause = (1..=10).collect::<CClause>();
        let chunks = split(&clause, 4, 10);

        let original = chunks
            .iter()
            .flat_map(|chunk| chunk.literals().copied())
            .filter(|literal| literal.atom() <= 10)
            .collect::<CClause>();
        assert_eq!(original, clause);
    }

    #[test]
    fn each_fresh_atom_links_two_chunks() {
        let chunks = split(&(1..=12).collect::<CClause>(), 3, 12);

        for (index, pair) in chunks.windows(2).enumerate() {
            let fresh = *pair[0].last().unwrap();
            assert!(fresh.atom() > 12);
            assert!(fresh.polarity());
            assert_eq!(pair[1][0], fresh.negate());

            // And nowhere else.
            let elsewhere = chunks
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index && *other != index + 1)
                .any(|(_, chunk)| chunk.atoms().any(|atom| atom == fresh.atom()));
            assert!(!elsewhere);
        }
    }
}

mod pass_through {
    use super::*;

    #[test]
    fn disabled() {
        for value in [0, -1, -100] {
            let mut config = Config::default();
            config.split_limit.value = value;

            let mut encoder = ClauseEncoder::from_config(&config, Vec::default()).unwrap();
            let clause = (1..=30).collect::<CClause>();

            assert_eq!(encoder.add_clause(clause.clone()), Ok(1));
            assert_eq!(encoder.size(), 1);
            assert_eq!(encoder.sink(), &vec![clause]);
            assert_eq!(encoder.allocator().issued(), 0);
        }
    }
}

mod freshness {
    use super::*;

    #[test]
    fn across_calls() {
        let mut rng = SmallRng::seed_from_u64(99);
        let reserved = 20;

        let mut config = Config::default();
        config.split_limit.value = 3;
        config.reserved_atoms.value = reserved;

        let mut fresh_atoms = Vec::default();
        let inputs = (0..50)
            .map(|_| {
                let length = rng.gen_range(1..15);
                (0..length)
                    .map(|_| CLiteral::new(rng.gen_range(1..=reserved), rng.gen_bool(0.5)))
                    .collect::<CClause>()
            })
            .collect::<Vec<_>>();

        let sink = CallbackSink::new(Box::new(|clause: &CClause| {
            fresh_atoms.extend(clause.atoms().filter(|atom| *atom > reserved));
        }));
        let mut encoder = ClauseEncoder::from_config(&config, sink).unwrap();

        let mut expected_chunks = 0;
        for input in &inputs {
            expected_chunks += encoder.add_clause(input.clone()).unwrap();
        }
        assert_eq!(encoder.size(), expected_chunks);
        let issued = encoder.allocator().issued();
        drop(encoder);

        // Each fresh atom occurs twice, once in each polarity.
        fresh_atoms.sort_unstable();
        let mut distinct = fresh_atoms.clone();
        distinct.dedup();
        assert_eq!(distinct.len() as u64, issued);
        assert_eq!(fresh_atoms.len(), 2 * distinct.len());
        assert!(distinct.iter().all(|atom| *atom > reserved));
    }

    #[test]
    fn clear_keeps_allocator() {
        let mut config = Config::default();
        config.split_limit.value = 2;
        config.reserved_atoms.value = 4;

        let mut encoder = ClauseEncoder::from_config(&config, DiscardSink).unwrap();
        assert_eq!(encoder.add_clause(vec![1, 2, 3, 4]), Ok(3));
        assert_eq!(encoder.allocator().peek(), Some(7));

        encoder.clear();
        assert_eq!(encoder.size(), 0);

        assert_eq!(encoder.add_clause(vec![1, 2, 3]), Ok(2));
        assert_eq!(
            encoder.clauses().cloned().collect::<Vec<_>>(),
            vec![vec![1, 2, 7], vec![-7, 3]]
        );
    }
}

mod scenarios {
    use super::*;

    fn encoder_three() -> ClauseEncoder<Vec<CClause>> {
        let mut config = Config::default();
        config.split_limit.value = 3;
        config.reserved_atoms.value = 5;
        ClauseEncoder::from_config(&config, Vec::default()).unwrap()
    }

    #[test]
    fn five_literals() {
        let mut encoder = encoder_three();
        assert_eq!(encoder.add_clause(vec![1, 2, 3, 4, 5]), Ok(2));
        assert_eq!(encoder.size(), 2);
        assert_eq!(encoder.sink(), &vec![vec![1, 2, 3, 6], vec![-6, 4, 5]]);
        assert_eq!(encoder.allocator().peek(), Some(7));
    }

    #[test]
    fn no_split_needed() {
        let mut encoder = encoder_three();
        assert_eq!(encoder.add_clause(vec![1, -2]), Ok(1));
        assert_eq!(encoder.size(), 1);
        assert_eq!(encoder.sink(), &vec![vec![1, -2]]);
        assert_eq!(encoder.allocator().peek(), Some(6));
    }

    #[test]
    fn empty_clause() {
        let mut encoder = encoder_three();
        assert!(encoder.add_clause(vec![1, 2, 3, 4]).is_ok());
        let before = encoder.allocator().peek();

        assert_eq!(
            encoder.add_clause(Vec::default()),
            Err(ErrorKind::Clause(err::ClauseError::Empty))
        );
        assert_eq!(encoder.size(), 2);
        assert_eq!(encoder.sink().len(), 2);
        assert_eq!(encoder.allocator().peek(), before);
    }

    #[test]
    fn width_one_rejected() {
        let mut config = Config::default();
        config.split_limit.value = 1;
        assert!(matches!(
            ClauseEncoder::from_config(&config, DiscardSink),
            Err(ErrorKind::Config(err::ConfigError::InvalidSplitLimit(1)))
        ));
    }

    #[test]
    fn width_below_two_refused_on_construction() {
        for width in [0, 1] {
            assert!(matches!(
                ClauseEncoder::new(
                    SplitLimit::Width(width),
                    VariableAllocator::new(3),
                    DiscardSink
                ),
                Err(ErrorKind::Config(err::ConfigError::InvalidSplitLimit(_)))
            ));
        }
    }

    #[test]
    fn zero_literal_refused() {
        let mut encoder = encoder_three();
        assert_eq!(
            encoder.add_clause(vec![1, 2, 0, 3, 4]),
            Err(ErrorKind::Clause(err::ClauseError::ZeroLiteral))
        );
        assert_eq!(encoder.size(), 0);
        assert_eq!(encoder.allocator().peek(), Some(6));
    }

    #[test]
    fn add_clauses_stops_at_error() {
        let mut encoder = encoder_three();
        let result = encoder.add_clauses(vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(result, Err(ErrorKind::Clause(err::ClauseError::Empty)));
        assert_eq!(encoder.size(), 1);
    }
}

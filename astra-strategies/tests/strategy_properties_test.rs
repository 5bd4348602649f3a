use std::collections::HashSet;

use astra_acquisitions::RandomAcquisition;
use astra_core::errors::{AstraError, QueryError};
use astra_core::models::{AcquisitionSet, PoolIndices, QueryParams};
use astra_core::traits::{IAcquisition, IStrategy};
use astra_strategies::{top_k, RandomStrategy};
use ndarray::Array1;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_fixtures::labeled_context;

fn arb_pool() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::hash_set(0usize..10_000, 1..40).prop_map(|set| set.into_iter().collect())
}

fn random_named(names: &[&str]) -> AcquisitionSet {
    AcquisitionSet::from_named(
        names
            .iter()
            .map(|name| (*name, Box::new(RandomAcquisition) as Box<dyn IAcquisition>)),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn selections_are_unique_members_of_the_pool(
        pool in arb_pool(),
        k_fraction in 0.0f64..1.0,
        n_mc_samples in 1usize..6,
        n_classes in 1usize..5,
        seed in any::<u64>(),
    ) {
        let k = 1 + ((pool.len() - 1) as f64 * k_fraction) as usize;
        let strategy = RandomStrategy::from_set(
            random_named(&["a", "b"]),
            labeled_context(12, n_classes),
            StdRng::seed_from_u64(seed),
        ).unwrap();
        let params = QueryParams::default()
            .with_n_query_samples(k)
            .with_n_mc_samples(n_mc_samples);

        let result = strategy.query(None, &PoolIndices::from(pool.clone()), None, &params).unwrap();

        prop_assert_eq!(result.names().collect::<Vec<_>>(), vec!["a", "b"]);
        let members: HashSet<usize> = pool.iter().copied().collect();
        for selection in result.iter() {
            prop_assert_eq!(selection.indices.len(), k);
            let unique: HashSet<usize> = selection.indices.iter().copied().collect();
            prop_assert_eq!(unique.len(), k);
            prop_assert!(unique.is_subset(&members));
        }
    }

    #[test]
    fn full_request_is_a_permutation(pool in arb_pool(), seed in any::<u64>()) {
        let strategy = RandomStrategy::with_seed(
            vec![Box::new(RandomAcquisition) as Box<dyn IAcquisition>],
            labeled_context(6, 2),
            seed,
        ).unwrap();
        let params = QueryParams::default().with_n_query_samples(pool.len());

        let result = strategy.query(None, &PoolIndices::from(pool.clone()), None, &params).unwrap();

        let mut selected = result.get("random").unwrap().to_vec();
        let mut expected = pool;
        selected.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(selected, expected);
    }

    #[test]
    fn over_request_always_fails(pool in arb_pool(), extra in 1usize..5) {
        let strategy = RandomStrategy::new(
            vec![Box::new(RandomAcquisition) as Box<dyn IAcquisition>],
            labeled_context(6, 2),
        ).unwrap();
        let params = QueryParams::default().with_n_query_samples(pool.len() + extra);

        let err = strategy.query(None, &PoolIndices::from(pool), None, &params).unwrap_err();
        let is_over_request = matches!(err, AstraError::Query(QueryError::OverRequest { .. }));
        prop_assert!(is_over_request);
    }

    #[test]
    fn top_k_returns_best_scores_in_descending_order(
        scores in prop::collection::vec(-100.0f32..100.0, 1..64),
        k_fraction in 0.0f64..=1.0,
    ) {
        let k = (scores.len() as f64 * k_fraction) as usize;
        let positions = top_k(Array1::from(scores.clone()).view(), k).unwrap();

        prop_assert_eq!(positions.len(), k);
        for pair in positions.windows(2) {
            prop_assert!(scores[pair[0]] >= scores[pair[1]]);
            if scores[pair[0]] == scores[pair[1]] {
                prop_assert!(pair[0] < pair[1]);
            }
        }
        if let Some(&last) = positions.last() {
            let chosen: HashSet<usize> = positions.iter().copied().collect();
            for (position, score) in scores.iter().enumerate() {
                if !chosen.contains(&position) {
                    prop_assert!(*score <= scores[last]);
                }
            }
        }
    }
}

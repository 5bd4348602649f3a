use astra_core::errors::{QueryError, StrategyError};
use astra_core::models::*;
use astra_core::traits::IAcquisition;
use astra_core::AstraResult;
use ndarray::{array, Array1, Array2, ArrayD, ArrayView3, IxDyn};
use proptest::prelude::*;

#[derive(Debug)]
struct Tagged(AcquisitionKind);

impl IAcquisition for Tagged {
    fn kind(&self) -> AcquisitionKind {
        self.0
    }

    fn acquire_scores(&self, logits: ArrayView3<'_, f32>) -> AstraResult<Array1<f32>> {
        Ok(Array1::zeros(logits.shape()[1]))
    }
}

fn tagged(kind: AcquisitionKind) -> Box<dyn IAcquisition> {
    Box::new(Tagged(kind))
}

// --- Context ---

#[test]
fn context_counts_distinct_labels() {
    let context = Context::new(Array2::zeros((6, 2)), array![0, 2, 2, 5, 0, 5]).unwrap();
    assert_eq!(context.n_classes(), 3);
    assert_eq!(context.len(), 6);
}

#[test]
fn context_rejects_length_mismatch() {
    let err = Context::new(Array2::zeros((4, 2)), array![0, 1, 1]).unwrap_err();
    assert!(matches!(
        err,
        StrategyError::ContextLengthMismatch {
            inputs: 4,
            outputs: 3
        }
    ));
}

#[test]
fn context_rejects_empty_labels() {
    let err = Context::new(Array2::zeros((0, 3)), Array1::zeros(0)).unwrap_err();
    assert!(matches!(err, StrategyError::EmptyContext));
}

#[test]
fn context_selects_rows_in_pool_order() {
    let inputs = array![[0.0f32, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
    let context = Context::new(inputs, array![0, 1, 0, 1]).unwrap();
    let rows = context
        .select_inputs(&PoolIndices::from(vec![3, 1]))
        .unwrap();
    assert_eq!(rows, array![[3.0f32, 3.0], [1.0, 1.0]]);
}

#[test]
fn context_select_rejects_out_of_bounds_index() {
    let context = Context::new(Array2::zeros((3, 1)), array![0, 1, 0]).unwrap();
    let err = context
        .select_inputs(&PoolIndices::from(vec![0, 3]))
        .unwrap_err();
    assert!(matches!(err, QueryError::IndexOutOfBounds { index: 3, len: 3 }));
}

proptest! {
    #[test]
    fn n_classes_equals_distinct_output_count(labels in prop::collection::vec(0i64..20, 1..64)) {
        let n = labels.len();
        let mut distinct = labels.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let context = Context::new(Array2::zeros((n, 1)), Array1::from(labels)).unwrap();
        prop_assert_eq!(context.n_classes(), distinct.len());
    }
}

// --- PoolIndices ---

#[test]
fn pool_indices_accept_one_dimensional_integer_tensor() {
    let tensor = ArrayD::from_shape_vec(IxDyn(&[3]), vec![4i64, 0, 9]).unwrap();
    let pool = PoolIndices::try_from(tensor).unwrap();
    assert_eq!(pool.as_slice(), &[4, 0, 9]);
}

#[test]
fn pool_indices_reject_two_dimensional_tensor() {
    let tensor = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1i64, 2, 3, 4]).unwrap();
    let err = PoolIndices::try_from(tensor).unwrap_err();
    assert!(matches!(err, QueryError::ContractViolation { .. }));
}

#[test]
fn pool_indices_reject_negative_index() {
    let err = PoolIndices::try_from(vec![3i64, -1]).unwrap_err();
    assert!(err.to_string().contains("-1"));
}

#[test]
fn pool_indices_reject_plain_numeric_list() {
    let err = PoolIndices::try_from(vec![5.0f64, 6.0, 7.0]).unwrap_err();
    assert!(matches!(err, QueryError::ContractViolation { .. }));
}

#[test]
fn pool_indices_gather_maps_positions() {
    let pool = PoolIndices::from(vec![10, 20, 30]);
    assert_eq!(pool.gather(&[2, 0]).unwrap(), vec![30, 10]);
    assert!(pool.gather(&[3]).is_err());
}

#[test]
fn pool_indices_report_first_repeated_index() {
    assert_eq!(PoolIndices::from(vec![4, 7, 4, 7]).first_duplicate(), Some(4));
    assert_eq!(PoolIndices::from(vec![4, 7, 9]).first_duplicate(), None);
}

// --- AcquisitionSet ---

#[test]
fn acquisition_set_preserves_insertion_order() {
    let set = AcquisitionSet::from_sequence(vec![
        tagged(AcquisitionKind::Bald),
        tagged(AcquisitionKind::Random),
        tagged(AcquisitionKind::Entropy),
    ])
    .unwrap();
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, vec!["bald", "random", "entropy"]);
}

#[test]
fn acquisition_set_rejects_duplicate_names() {
    let err = AcquisitionSet::from_sequence(vec![
        tagged(AcquisitionKind::Random),
        tagged(AcquisitionKind::Random),
    ])
    .unwrap_err();
    assert!(matches!(err, StrategyError::DuplicateAcquisition { ref name } if name == "random"));
}

#[test]
fn acquisition_set_allows_explicit_names_for_same_kind() {
    let set = AcquisitionSet::from_named(vec![
        ("random-a", tagged(AcquisitionKind::Random)),
        ("random-b", tagged(AcquisitionKind::Random)),
    ])
    .unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.get("random-b").is_some());
}

#[test]
fn acquisition_set_rejects_empty_sequence() {
    let err = AcquisitionSet::from_sequence(Vec::<Box<dyn IAcquisition>>::new()).unwrap_err();
    assert!(matches!(err, StrategyError::NoAcquisitions));
}

#[test]
fn acquisition_set_kind_check_reports_offender() {
    let set = AcquisitionSet::from_sequence(vec![
        tagged(AcquisitionKind::Random),
        tagged(AcquisitionKind::Entropy),
    ])
    .unwrap();
    let err = set.ensure_kinds(&[AcquisitionKind::Random]).unwrap_err();
    match err {
        StrategyError::AcquisitionMismatch {
            name,
            expected,
            actual,
        } => {
            assert_eq!(name, "entropy");
            assert_eq!(expected, "random");
            assert!(actual.contains("Entropy"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// --- QueryParams / SelectionResult ---

#[test]
fn query_params_defaults_match_interface() {
    let params = QueryParams::default();
    assert_eq!(params.n_query_samples, 1);
    assert_eq!(params.n_mc_samples, 10);
    assert_eq!(params.batch_size, None);
}

#[test]
fn query_params_reject_zero_counts() {
    let err = QueryParams::default()
        .with_n_mc_samples(0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, QueryError::InvalidParameter { ref name, .. } if name == "n_mc_samples"));
}

#[test]
fn selection_result_serializes_in_order() {
    let mut result = SelectionResult::new();
    result.insert("random", vec![7, 5]);
    result.insert("entropy", vec![6]);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.find("random").unwrap() < json.find("entropy").unwrap());
    assert_eq!(result.get("random"), Some(&[7, 5][..]));
}

// --- AcquisitionKind ---

#[test]
fn acquisition_kind_tags_are_lowercase() {
    let tags: Vec<String> = AcquisitionKind::ALL.iter().map(|k| k.to_string()).collect();
    assert_eq!(tags, vec!["random", "entropy", "bald"]);
    assert_eq!(
        serde_json::to_string(&AcquisitionKind::Bald).unwrap(),
        "\"bald\""
    );
}

#[test]
fn acquisition_set_names_by_kind() {
    let set = AcquisitionSet::from_sequence(vec![tagged(AcquisitionKind::Entropy)]).unwrap();
    assert_eq!(set.names().collect::<Vec<_>>(), vec!["entropy"]);
    assert!(set.ensure_kinds(&[AcquisitionKind::Entropy, AcquisitionKind::Bald]).is_ok());
}

use astra_core::errors::QueryError;
use ndarray::ArrayView1;

/// Positions of the `k` highest scores, best first.
///
/// Stable: on equal scores the lower position comes first. Non-finite scores
/// and `k > scores.len()` are errors.
pub fn top_k(scores: ArrayView1<'_, f32>, k: usize) -> Result<Vec<usize>, QueryError> {
    if k > scores.len() {
        return Err(QueryError::OverRequest {
            requested: k,
            available: scores.len(),
        });
    }
    if let Some(position) = scores.iter().position(|s| !s.is_finite()) {
        return Err(QueryError::NonFiniteScore { position });
    }

    let mut positions: Vec<usize> = (0..scores.len()).collect();
    // `sort_by` is stable, so ties keep ascending position order.
    positions.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    positions.truncate(k);
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn picks_highest_scores_first() {
        let scores = array![0.1f32, 0.9, 0.5, 0.7];
        assert_eq!(top_k(scores.view(), 2).unwrap(), vec![1, 3]);
    }

    #[test]
    fn ties_resolve_to_lower_position() {
        let scores = array![0.5f32, 0.8, 0.5, 0.8, 0.5];
        assert_eq!(top_k(scores.view(), 3).unwrap(), vec![1, 3, 0]);
    }

    #[test]
    fn k_equal_to_len_returns_every_position() {
        let scores = array![0.3f32, 0.2, 0.1];
        assert_eq!(top_k(scores.view(), 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn k_zero_returns_nothing() {
        let scores = array![0.3f32, 0.2];
        assert!(top_k(scores.view(), 0).unwrap().is_empty());
    }

    #[test]
    fn over_request_is_an_error() {
        let scores = array![0.3f32, 0.2];
        let err = top_k(scores.view(), 3).unwrap_err();
        assert!(matches!(
            err,
            QueryError::OverRequest {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn nan_scores_are_rejected() {
        let scores = array![0.3f32, f32::NAN];
        let err = top_k(scores.view(), 1).unwrap_err();
        assert!(matches!(err, QueryError::NonFiniteScore { position: 1 }));
    }
}

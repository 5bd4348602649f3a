//! Indices into the external unlabeled pool.

use std::collections::HashSet;

use ndarray::{Array1, ArrayD};
use serde::{Deserialize, Serialize};

use crate::errors::QueryError;

/// One-dimensional, ordered sequence of candidate indices.
///
/// Integer tensors convert fallibly (rank and sign are checked); floating-point
/// input never converts, since a numeric list is not an index tensor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolIndices(Vec<usize>);

impl PoolIndices {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// First index that appears more than once, if any.
    pub fn first_duplicate(&self) -> Option<usize> {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().copied().find(|&index| !seen.insert(index))
    }

    /// Map pool positions back to pool indices.
    pub fn gather(&self, positions: &[usize]) -> Result<Vec<usize>, QueryError> {
        positions
            .iter()
            .map(|&position| {
                self.get(position).ok_or(QueryError::IndexOutOfBounds {
                    index: position,
                    len: self.len(),
                })
            })
            .collect()
    }
}

impl From<Vec<usize>> for PoolIndices {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for PoolIndices {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl From<Array1<usize>> for PoolIndices {
    fn from(indices: Array1<usize>) -> Self {
        Self(indices.to_vec())
    }
}

impl TryFrom<Vec<i64>> for PoolIndices {
    type Error = QueryError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        values
            .into_iter()
            .map(|value| {
                usize::try_from(value).map_err(|_| QueryError::ContractViolation {
                    reason: format!("pool index {value} is negative"),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl TryFrom<ArrayD<i64>> for PoolIndices {
    type Error = QueryError;

    fn try_from(tensor: ArrayD<i64>) -> Result<Self, Self::Error> {
        if tensor.ndim() != 1 {
            return Err(QueryError::ContractViolation {
                reason: format!(
                    "pool_indices must be one-dimensional, got shape {:?}",
                    tensor.shape()
                ),
            });
        }
        Self::try_from(tensor.iter().copied().collect::<Vec<_>>())
    }
}

impl TryFrom<Vec<f64>> for PoolIndices {
    type Error = QueryError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Err(QueryError::ContractViolation {
            reason: format!(
                "pool_indices must be an integer index tensor, got {} floating-point values",
                values.len()
            ),
        })
    }
}

impl TryFrom<ArrayD<f64>> for PoolIndices {
    type Error = QueryError;

    fn try_from(tensor: ArrayD<f64>) -> Result<Self, Self::Error> {
        Err(QueryError::ContractViolation {
            reason: format!(
                "pool_indices must be an integer index tensor, got f64 tensor of shape {:?}",
                tensor.shape()
            ),
        })
    }
}

impl<'a> IntoIterator for &'a PoolIndices {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

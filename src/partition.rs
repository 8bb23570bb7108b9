use crate::error::{BayesError, Result};

/// Training and test rows for one cross-validation fold.
#[derive(Debug, Clone)]
pub struct Fold<T> {
    pub training: Vec<T>,
    pub test: Vec<T>,
}

/// Splits an already shuffled dataset into contiguous test slices.
#[derive(Debug, Clone, Copy)]
pub struct DatasetPartitioner {
    folds: usize,
}

impl DatasetPartitioner {
    pub fn new(folds: usize) -> Result<Self> {
        if folds < 2 {
            return Err(BayesError::InvalidFoldCount(folds));
        }
        Ok(DatasetPartitioner { folds })
    }

    pub fn folds(&self) -> usize {
        self.folds
    }

    /// Real-valued `[lower, upper)` test range for fold `shift`.
    ///
    /// Both ends are `k * len / folds` for consecutive `k`, so adjacent
    /// folds share a boundary exactly.
    pub fn test_range(&self, len: usize, shift: usize) -> (f64, f64) {
        let width = len as f64 / self.folds as f64;
        (shift as f64 * width, (shift + 1) as f64 * width)
    }

    pub fn split<T: Clone>(&self, dataset: &[T], shift: usize) -> Result<Fold<T>> {
        if shift >= self.folds {
            return Err(BayesError::InvalidFoldIndex {
                shift,
                folds: self.folds,
            });
        }

        let (lower, upper) = self.test_range(dataset.len(), shift);
        let mut fold = Fold {
            training: Vec::new(),
            test: Vec::new(),
        };
        for (i, row) in dataset.iter().enumerate() {
            let i = i as f64;
            if i >= lower && i < upper {
                fold.test.push(row.clone());
            } else {
                fold.training.push(row.clone());
            }
        }
        Ok(fold)
    }

    /// Every fold, in shift order.
    pub fn split_all<T: Clone>(&self, dataset: &[T]) -> Result<Vec<Fold<T>>> {
        (0..self.folds)
            .map(|shift| self.split(dataset, shift))
            .collect()
    }
}

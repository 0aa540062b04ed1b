use linfa::traits::Predict;
use linfa_logistic::MultiFittedLogisticRegression;
use ndarray::{Array1, ArrayView2};

use crate::{ClassifierErr, Result};

/// The fitted type the training procedure produces.
pub type Fitted = MultiFittedLogisticRegression<f64, usize>;

/// A fitted multinomial logistic regression over real-valued features.
///
/// Immutable once built, so a single instance can be shared between any
/// number of readers.
pub struct IrisModel {
    inner: Fitted,
}

impl IrisModel {
    /// Wraps a fitted regression.
    pub fn new(inner: Fitted) -> Self {
        Self { inner }
    }

    /// Returns the underlying fitted regression.
    pub fn inner(&self) -> &Fitted {
        &self.inner
    }

    /// Returns the amount of features a sample must have.
    pub fn n_features(&self) -> usize {
        self.inner.params().nrows()
    }

    /// Returns the amount of classes the model tells apart.
    pub fn n_classes(&self) -> usize {
        self.inner.params().ncols()
    }

    /// Predicts the class of every row of `x`.
    ///
    /// # Arguments
    /// * `x` - One sample per row.
    ///
    /// # Returns
    /// One label per row or `ClassifierErr::FeatureCount` if the width of `x` is off.
    pub fn predict_batch(&self, x: ArrayView2<f64>) -> Result<Array1<usize>> {
        let expected = self.n_features();
        if x.ncols() != expected {
            return Err(ClassifierErr::FeatureCount {
                got: x.ncols(),
                expected,
            });
        }

        Ok(self.inner.predict(&x))
    }

    /// Predicts the class of a single sample.
    ///
    /// # Arguments
    /// * `features` - The sample's features, in dataset order.
    ///
    /// # Returns
    /// The predicted label.
    pub fn predict_one(&self, features: &[f64]) -> Result<usize> {
        let got = features.len();
        let expected = self.n_features();
        let batch = ArrayView2::from_shape((1, got), features)
            .map_err(|_| ClassifierErr::FeatureCount { got, expected })?;

        let labels = self.predict_batch(batch)?;
        labels
            .first()
            .copied()
            .ok_or(ClassifierErr::FeatureCount { got, expected })
    }
}

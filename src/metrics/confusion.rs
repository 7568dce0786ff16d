use crate::data::attribute::Label;
use crate::error::{Id3Error, Result};
use nalgebra::{DMatrix, DVector};

/// Confusion matrix together with the classes labelling its rows and columns.
pub type ConfusionMatrix<L> = (Vec<L>, DMatrix<usize>);

pub trait ClassificationMetrics<L: Label> {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// Rows are true classes and columns predicted classes, both ordered by
    /// first occurrence in `y_true` and then in `y_pred`.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The classes and the matrix, or `LengthMismatch` when the vectors differ in size.
    fn confusion_matrix(
        &self,
        y_true: &DVector<L>,
        y_pred: &DVector<L>,
    ) -> Result<ConfusionMatrix<L>> {
        if y_true.len() != y_pred.len() {
            return Err(Id3Error::LengthMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
            });
        }

        let mut classes: Vec<L> = Vec::new();
        for label in y_true.iter().chain(y_pred.iter()) {
            if !classes.contains(label) {
                classes.push(label.clone());
            }
        }

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());
        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            let matrix_row = classes.iter().position(|c| c == y_t);
            let matrix_col = classes.iter().position(|c| c == y_p);
            if let (Some(row), Some(col)) = (matrix_row, matrix_col) {
                matrix[(row, col)] += 1;
            }
        }

        Ok((classes, matrix))
    }

    /// Computes the accuracy based on the true labels and predicted labels.
    fn accuracy(&self, y_true: &DVector<L>, y_pred: &DVector<L>) -> Result<f64> {
        let (_, matrix) = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Ok(0.0);
        }

        let correct: usize = matrix.diagonal().iter().sum();
        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Computes the macro-averaged precision based on the true labels and predicted labels.
    fn precision(&self, y_true: &DVector<L>, y_pred: &DVector<L>) -> Result<f64> {
        let (classes, matrix) = self.confusion_matrix(y_true, y_pred)?;
        if classes.is_empty() {
            return Ok(0.0);
        }

        let mut precision_total = 0.0;
        for class in 0..classes.len() {
            let tp = matrix[(class, class)];
            let fp = matrix.column(class).sum() - tp;

            if tp + fp > 0 {
                precision_total += tp as f64 / (tp + fp) as f64;
            }
        }

        Ok(precision_total / classes.len() as f64)
    }

    /// Computes the macro-averaged recall based on the true labels and predicted labels.
    fn recall(&self, y_true: &DVector<L>, y_pred: &DVector<L>) -> Result<f64> {
        let (classes, matrix) = self.confusion_matrix(y_true, y_pred)?;
        if classes.is_empty() {
            return Ok(0.0);
        }

        let mut recall_total = 0.0;
        for class in 0..classes.len() {
            let tp = matrix[(class, class)];
            let fn_ = matrix.row(class).sum() - tp;

            if tp + fn_ > 0 {
                recall_total += tp as f64 / (tp + fn_) as f64;
            }
        }

        Ok(recall_total / classes.len() as f64)
    }

    /// Computes the F1 score from the macro-averaged precision and recall.
    fn f1_score(&self, y_true: &DVector<L>, y_pred: &DVector<L>) -> Result<f64> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        match (precision + recall).abs() < f64::EPSILON {
            true => Err(Id3Error::UndefinedScore),
            false => Ok(2.0 * (precision * recall) / (precision + recall)),
        }
    }
}

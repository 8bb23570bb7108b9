//! Cross-validated ROC evaluation.
//!
//! One model is trained per fold from the dataset schema. Every test row of
//! every fold is scored once; the threshold sweep then tabulates a confusion
//! matrix over the union of all test folds for each threshold.

use crate::bayes::NaiveBayesModel;
use crate::error::{BayesError, Result};
use crate::partition::DatasetPartitioner;
use crate::schema::Schema;
use serde::Serialize;
use tracing::{debug, info};

/// Evaluation knobs passed explicitly into every run.
#[derive(Debug, Clone, Copy)]
pub struct EvalConfig {
    pub folds: usize,
    /// Number of thresholds `k / data_points` to sweep.
    pub data_points: usize,
    /// Log the first fold's frequency tables.
    pub verbose: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            folds: 3,
            data_points: 100,
            verbose: false,
        }
    }
}

/// Confusion matrix for the positive/negative framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    pub fn_: usize,
}

impl ConfusionMatrix {
    pub fn record(&mut self, actual_positive: bool, predicted_positive: bool) {
        match (actual_positive, predicted_positive) {
            (true, true) => self.tp += 1,
            (false, false) => self.tn += 1,
            (false, true) => self.fp += 1,
            (true, false) => self.fn_ += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// TP / (TP + FN). Fails when the test rows hold no positives.
    pub fn true_positive_rate(&self) -> Result<f64> {
        rate("true-positive rate", self.tp, self.tp + self.fn_)
    }

    /// TN / (TN + FP). Fails when the test rows hold no negatives.
    pub fn true_negative_rate(&self) -> Result<f64> {
        rate("true-negative rate", self.tn, self.tn + self.fp)
    }

    pub fn false_positive_rate(&self) -> Result<f64> {
        Ok(1.0 - self.true_negative_rate()?)
    }

    pub fn roc_point(&self) -> Result<RocPoint> {
        Ok(RocPoint {
            false_positive_rate: self.false_positive_rate()?,
            true_positive_rate: self.true_positive_rate()?,
        })
    }
}

fn rate(name: &'static str, numerator: usize, denominator: usize) -> Result<f64> {
    if denominator == 0 {
        return Err(BayesError::DegenerateDataset {
            rate: name,
            numerator,
        });
    }
    Ok(numerator as f64 / denominator as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

/// Positive-class posterior of one test row, paired with its true class.
#[derive(Debug, Clone, Copy)]
struct Scored {
    positive_posterior: f64,
    actual_positive: bool,
}

/// Fold models trained from one dataset, with their test rows scored.
pub struct Evaluator {
    models: Vec<NaiveBayesModel>,
    scored: Vec<Scored>,
}

impl Evaluator {
    /// Trains one model per fold and scores the held-out rows of each.
    pub fn train<S>(schema: &Schema, dataset: &[Vec<S>], config: &EvalConfig) -> Result<Self>
    where
        S: AsRef<str> + Clone,
    {
        let partitioner = DatasetPartitioner::new(config.folds)?;
        let mut models = Vec::with_capacity(config.folds);
        let mut scored = Vec::new();

        for (shift, fold) in partitioner.split_all(dataset)?.into_iter().enumerate() {
            let mut model = schema.build_model();
            model.train_all(&fold.training)?;
            debug!(
                fold = shift,
                training = fold.training.len(),
                test = fold.test.len(),
                "trained fold model"
            );

            let positive_index = model.response_index(schema.positive)?;
            for row in &fold.test {
                let (categories, label) = row.split_at(row.len().saturating_sub(1));
                let label = label.first().ok_or(BayesError::RowLength {
                    expected: schema.num_features() + 1,
                    found: 0,
                })?;
                let actual_positive = model.response_index(label.as_ref())? == positive_index;
                let distribution = model.posterior_distribution(categories)?;
                scored.push(Scored {
                    positive_posterior: distribution[positive_index],
                    actual_positive,
                });
            }
            models.push(model);
        }

        if config.verbose {
            if let Some(model) = models.first() {
                debug!("first fold model:\n{}", model.frequency_table());
            }
        }

        Ok(Evaluator { models, scored })
    }

    pub fn models(&self) -> &[NaiveBayesModel] {
        &self.models
    }

    /// Number of held-out rows across all folds.
    pub fn test_rows(&self) -> usize {
        self.scored.len()
    }

    /// Confusion matrix over all test folds; positive iff posterior >= threshold.
    pub fn confusion_at(&self, threshold: f64) -> ConfusionMatrix {
        let mut matrix = ConfusionMatrix::default();
        for row in &self.scored {
            matrix.record(row.actual_positive, row.positive_posterior >= threshold);
        }
        matrix
    }

    /// One ROC point per threshold `k / data_points`, in threshold order.
    pub fn sweep(&self, data_points: usize) -> Result<Vec<RocPoint>> {
        let step = (data_points / 10).max(1);
        let mut points = Vec::with_capacity(data_points);
        for k in 0..data_points {
            if (k + 1) % step == 0 {
                info!("{}%", (k + 1) * 100 / data_points);
            }
            let threshold = k as f64 / data_points as f64;
            points.push(self.confusion_at(threshold).roc_point()?);
        }
        Ok(points)
    }
}

/// Averages the true-positive rates of points sharing a false-positive rate.
///
/// The result is sorted by ascending false-positive rate.
pub fn merge_duplicates(points: &[RocPoint]) -> Vec<RocPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.false_positive_rate.total_cmp(&b.false_positive_rate));

    let mut merged: Vec<RocPoint> = Vec::new();
    let mut group_len = 0usize;
    let mut group_sum = 0.0;
    for point in sorted {
        match merged.last_mut() {
            Some(last) if last.false_positive_rate == point.false_positive_rate => {
                group_len += 1;
                group_sum += point.true_positive_rate;
                last.true_positive_rate = group_sum / group_len as f64;
            }
            _ => {
                group_len = 1;
                group_sum = point.true_positive_rate;
                merged.push(point);
            }
        }
    }
    merged
}

/// Runs the whole pipeline: train per fold, sweep, merge duplicate x values.
pub fn evaluate<S>(schema: &Schema, dataset: &[Vec<S>], config: &EvalConfig) -> Result<Vec<RocPoint>>
where
    S: AsRef<str> + Clone,
{
    let evaluator = Evaluator::train(schema, dataset, config)?;
    info!(
        rows = dataset.len(),
        test_rows = evaluator.test_rows(),
        "calculating ROC curve"
    );
    let points = evaluator.sweep(config.data_points)?;
    Ok(merge_duplicates(&points))
}

/// A finished ROC curve ready for rendering.
#[derive(Debug, Clone)]
pub struct RocCurve {
    pub title: String,
    pub line_style: String,
    pub points: Vec<RocPoint>,
}

impl RocCurve {
    /// Area under the curve by the trapezoidal rule, anchored at (0,0) and (1,1).
    pub fn auc(&self) -> f64 {
        let origin = RocPoint {
            false_positive_rate: 0.0,
            true_positive_rate: 0.0,
        };
        let corner = RocPoint {
            false_positive_rate: 1.0,
            true_positive_rate: 1.0,
        };

        let mut area = 0.0;
        let mut prev = origin;
        for point in self.points.iter().copied().chain(std::iter::once(corner)) {
            area += (point.false_positive_rate - prev.false_positive_rate)
                * (point.true_positive_rate + prev.true_positive_rate)
                / 2.0;
            prev = point;
        }
        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FeatureSpec;

    const TOY: Schema = Schema {
        negative: "neg",
        positive: "pos",
        features: &[FeatureSpec {
            name: "marker",
            categories: &["x", "y"],
        }],
    };

    fn point(x: f64, y: f64) -> RocPoint {
        RocPoint {
            false_positive_rate: x,
            true_positive_rate: y,
        }
    }

    fn toy_rows() -> Vec<Vec<&'static str>> {
        let pattern = ["pos", "neg", "pos", "neg", "pos", "neg", "pos", "neg", "pos"];
        pattern
            .iter()
            .map(|&label| vec![if label == "pos" { "x" } else { "y" }, label])
            .collect()
    }

    #[test]
    fn confusion_matrix_rates() {
        let matrix = ConfusionMatrix {
            tp: 3,
            tn: 6,
            fp: 2,
            fn_: 1,
        };
        assert_eq!(matrix.total(), 12);
        assert!((matrix.true_positive_rate().unwrap() - 0.75).abs() < 1e-12);
        assert!((matrix.true_negative_rate().unwrap() - 0.75).abs() < 1e-12);
        assert!((matrix.false_positive_rate().unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_denominator_is_degenerate() {
        let mut matrix = ConfusionMatrix::default();
        matrix.record(true, true);
        let err = matrix.roc_point().unwrap_err();
        assert!(matches!(
            err,
            BayesError::DegenerateDataset {
                rate: "true-negative rate",
                ..
            }
        ));
    }

    #[test]
    fn separable_toy_dataset_is_perfect_at_half() {
        let rows = toy_rows();
        let evaluator = Evaluator::train(&TOY, &rows, &EvalConfig::default()).unwrap();
        assert_eq!(evaluator.models().len(), 3);
        assert_eq!(evaluator.test_rows(), 9);

        let point = evaluator.confusion_at(0.5).roc_point().unwrap();
        assert_eq!(point.true_positive_rate, 1.0);
        assert_eq!(point.false_positive_rate, 0.0);
    }

    #[test]
    fn threshold_zero_accepts_everything() {
        let rows = toy_rows();
        let evaluator = Evaluator::train(&TOY, &rows, &EvalConfig::default()).unwrap();
        let matrix = evaluator.confusion_at(0.0);
        assert_eq!(matrix.tp, 5);
        assert_eq!(matrix.fp, 4);
        assert_eq!(matrix.roc_point().unwrap(), point(1.0, 1.0));
    }

    #[test]
    fn sweep_is_monotone() {
        let rows: Vec<Vec<&str>> = (0..60)
            .map(|i| {
                let label = if i % 3 == 0 { "pos" } else { "neg" };
                let marker = if i % 5 == 0 || (label == "pos" && i % 2 == 0) {
                    "x"
                } else {
                    "y"
                };
                vec![marker, label]
            })
            .collect();
        let evaluator = Evaluator::train(&TOY, &rows, &EvalConfig::default()).unwrap();
        let points = evaluator.sweep(50).unwrap();
        assert_eq!(points.len(), 50);
        for pair in points.windows(2) {
            assert!(pair[1].true_positive_rate <= pair[0].true_positive_rate);
            assert!(pair[1].false_positive_rate <= pair[0].false_positive_rate);
        }
    }

    #[test]
    fn single_class_dataset_is_reported() {
        let rows: Vec<Vec<&str>> = (0..9).map(|_| vec!["x", "pos"]).collect();
        let err = evaluate(&TOY, &rows, &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, BayesError::DegenerateDataset { .. }));
    }

    #[test]
    fn unknown_category_aborts_evaluation() {
        let mut rows = toy_rows();
        rows[4][0] = "z";
        let err = evaluate(&TOY, &rows, &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, BayesError::UnknownCategory { .. }));
    }

    #[test]
    fn duplicate_false_positive_rates_are_averaged() {
        let merged = merge_duplicates(&[point(0.0, 0.2), point(0.0, 0.4), point(0.5, 0.6)]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].false_positive_rate, 0.0);
        assert!((merged[0].true_positive_rate - 0.3).abs() < 1e-12);
        assert_eq!(merged[1], point(0.5, 0.6));
    }

    #[test]
    fn merged_curve_is_ascending() {
        let merged = merge_duplicates(&[
            point(1.0, 1.0),
            point(0.5, 0.8),
            point(0.5, 0.6),
            point(0.0, 0.1),
        ]);
        let xs: Vec<f64> = merged.iter().map(|p| p.false_positive_rate).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0]);
        assert!((merged[1].true_positive_rate - 0.7).abs() < 1e-12);
    }

    #[test]
    fn auc_of_perfect_and_diagonal_curves() {
        let perfect = RocCurve {
            title: String::new(),
            line_style: String::new(),
            points: vec![point(0.0, 1.0), point(1.0, 1.0)],
        };
        assert!((perfect.auc() - 1.0).abs() < 1e-12);

        let diagonal = RocCurve {
            title: String::new(),
            line_style: String::new(),
            points: vec![point(0.5, 0.5)],
        };
        assert!((diagonal.auc() - 0.5).abs() < 1e-12);
    }
}

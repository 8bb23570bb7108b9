//! Categorical naive-Bayes classification evaluated by cross-validated ROC
//! curves.
//!
//! Rows are sequences of category tokens followed by a class label. A
//! [`schema::Schema`] declares the features and the positive/negative
//! responses; [`evaluate::evaluate`] trains one model per fold and sweeps a
//! decision threshold over the held-out rows.

pub mod bayes;
pub mod bucket;
pub mod config;
pub mod datasets;
pub mod error;
pub mod evaluate;
pub mod feature;
pub mod loader;
pub mod partition;
pub mod render;
pub mod schema;

pub use bayes::NaiveBayesModel;
pub use error::{BayesError, Result};
pub use evaluate::{evaluate, EvalConfig, RocCurve, RocPoint};
pub use feature::CategoricalFeature;
pub use schema::{FeatureSpec, Schema};

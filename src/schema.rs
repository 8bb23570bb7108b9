//! Declarative dataset schemas.
//!
//! A schema lists the features of a dataset in column order together with
//! their category vocabularies, plus the two response labels. Every fold of
//! a cross-validation run gets a fresh model from [`Schema::build_model`].

use crate::bayes::NaiveBayesModel;
use crate::feature::CategoricalFeature;

/// One attribute and the categories it may take.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub categories: &'static [&'static str],
}

/// Column layout and binary response framing of a dataset.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub negative: &'static str,
    pub positive: &'static str,
    pub features: &'static [FeatureSpec],
}

impl Schema {
    /// Builds an untrained model with every response and category registered.
    ///
    /// The negative label is registered first, so index 1 of a posterior
    /// distribution is the positive class.
    pub fn build_model(&self) -> NaiveBayesModel {
        let mut model = NaiveBayesModel::new();
        model.register_response(self.negative);
        model.register_response(self.positive);

        let num_responses = model.responses().len();
        for spec in self.features {
            let mut feature = CategoricalFeature::new(spec.name, num_responses);
            for category in spec.categories {
                feature.register(category);
            }
            model.add_feature(feature);
        }
        model
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}

use crate::error::{BayesError, Result};
use crate::feature::CategoricalFeature;
use std::collections::{hash_map::Entry, HashMap};
use std::fmt::Write;

const LABEL_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 6;

/// Categorical naive-Bayes classifier over an ordered list of features.
///
/// Feature `i` consumes column `i` of a row; the trailing column of a
/// training row is the response label.
#[derive(Debug, Default)]
pub struct NaiveBayesModel {
    features: Vec<CategoricalFeature>,
    responses: HashMap<String, usize>,
    response_order: Vec<String>,
    total_entries_per_response: Vec<u64>,
    total_entries: u64,
}

impl NaiveBayesModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_response(&mut self, label: &str) {
        if let Entry::Vacant(entry) = self.responses.entry(label.to_string()) {
            entry.insert(self.response_order.len());
            self.response_order.push(label.to_string());
            self.total_entries_per_response.push(0);
        }
    }

    pub fn add_feature(&mut self, feature: CategoricalFeature) {
        self.features.push(feature);
    }

    pub fn response_index(&self, label: &str) -> Result<usize> {
        self.responses
            .get(label)
            .copied()
            .ok_or_else(|| BayesError::UnknownResponse {
                label: label.to_string(),
            })
    }

    pub fn responses(&self) -> &[String] {
        &self.response_order
    }

    pub fn features(&self) -> &[CategoricalFeature] {
        &self.features
    }

    pub fn total_entries(&self) -> u64 {
        self.total_entries
    }

    pub fn total_entries_per_response(&self) -> &[u64] {
        &self.total_entries_per_response
    }

    pub fn train_all<S: AsRef<str>>(&mut self, rows: &[Vec<S>]) -> Result<()> {
        for row in rows {
            self.train(row)?;
        }
        Ok(())
    }

    /// Accumulates one row: categories followed by the response label.
    ///
    /// The row is validated before any counter moves, so a rejected row
    /// leaves the model untouched.
    pub fn train<S: AsRef<str>>(&mut self, row: &[S]) -> Result<()> {
        let expected = self.features.len() + 1;
        if row.len() != expected {
            return Err(BayesError::RowLength {
                expected,
                found: row.len(),
            });
        }

        let (categories, label) = row.split_at(self.features.len());
        let response_index = self.response_index(label[0].as_ref())?;
        for (feature, category) in self.features.iter().zip(categories) {
            feature.index_of(category.as_ref())?;
        }

        for (feature, category) in self.features.iter_mut().zip(categories) {
            feature.record(category.as_ref(), response_index)?;
        }
        self.total_entries_per_response[response_index] += 1;
        self.total_entries += 1;
        Ok(())
    }

    /// `P(response) * Π P(category_i | response)`, not normalised.
    ///
    /// A response that never appeared in training scores 0.
    pub fn posterior_unnormalized<S: AsRef<str>>(
        &self,
        response: &str,
        categories: &[S],
    ) -> Result<f64> {
        let response_index = self.response_index(response)?;
        self.score(response_index, categories)
    }

    fn score<S: AsRef<str>>(&self, response_index: usize, categories: &[S]) -> Result<f64> {
        if categories.len() < self.features.len() {
            return Err(BayesError::RowLength {
                expected: self.features.len(),
                found: categories.len(),
            });
        }

        let response_total = self.total_entries_per_response[response_index];
        if response_total == 0 {
            // Still validate the categories so schema mismatches surface.
            for (feature, category) in self.features.iter().zip(categories) {
                feature.index_of(category.as_ref())?;
            }
            return Ok(0.0);
        }

        let mut probability = 1.0;
        for (feature, category) in self.features.iter().zip(categories) {
            probability *=
                feature.conditional_probability(category.as_ref(), response_index, response_total)?;
        }
        Ok(probability * (response_total as f64 / self.total_entries as f64))
    }

    /// Posterior for every response, in registration order.
    ///
    /// The vector is normalised to sum to one unless every score is zero, in
    /// which case it is returned as-is.
    pub fn posterior_distribution<S: AsRef<str>>(&self, categories: &[S]) -> Result<Vec<f64>> {
        let mut probabilities = (0..self.response_order.len())
            .map(|index| self.score(index, categories))
            .collect::<Result<Vec<f64>>>()?;

        let sum: f64 = probabilities.iter().sum();
        if sum != 0.0 {
            probabilities.iter_mut().for_each(|p| *p /= sum);
        }
        Ok(probabilities)
    }

    /// Renders every feature's count table followed by the response totals.
    pub fn frequency_table(&self) -> String {
        let mut out = String::new();
        for feature in &self.features {
            let _ = writeln!(out, "Feature: {}", feature.name());
            let _ = write!(out, "{:w$}", "", w = LABEL_WIDTH);
            for response in &self.response_order {
                let _ = write!(out, "{:<w$}", response, w = COUNT_WIDTH);
            }
            out.push('\n');

            for (category, row) in feature.rows() {
                let _ = write!(out, "{:.<w$}", category, w = LABEL_WIDTH);
                for count in row {
                    let _ = write!(out, "{:<w$}", count, w = COUNT_WIDTH);
                }
                out.push('\n');
            }

            let _ = write!(out, "{:.<w$}", "Total", w = LABEL_WIDTH);
            for total in &self.total_entries_per_response {
                let _ = write!(out, "{:<w$}", total, w = COUNT_WIDTH);
            }
            out.push_str("\n\n");
        }
        out
    }
}

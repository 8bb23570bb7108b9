use crate::error::{BayesError, Result};
use std::collections::{hash_map::Entry, HashMap};

/// Frequency table for one discrete attribute.
///
/// Rows are categories in registration order, columns are responses. Every
/// row holds exactly `num_responses` counters.
#[derive(Debug)]
pub struct CategoricalFeature {
    name: String,
    num_responses: usize,
    categories: HashMap<String, usize>,
    category_order: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl CategoricalFeature {
    pub fn new<S: Into<String>>(name: S, num_responses: usize) -> Self {
        CategoricalFeature {
            name: name.into(),
            num_responses,
            categories: HashMap::new(),
            category_order: Vec::new(),
            counts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_responses(&self) -> usize {
        self.num_responses
    }

    /// Adds `category` with a zeroed row. Registering twice is a no-op.
    pub fn register(&mut self, category: &str) {
        if let Entry::Vacant(entry) = self.categories.entry(category.to_string()) {
            entry.insert(self.category_order.len());
            self.category_order.push(category.to_string());
            self.counts.push(vec![0; self.num_responses]);
        }
    }

    pub fn index_of(&self, category: &str) -> Result<usize> {
        self.categories
            .get(category)
            .copied()
            .ok_or_else(|| BayesError::UnknownCategory {
                feature: self.name.clone(),
                category: category.to_string(),
            })
    }

    pub fn record(&mut self, category: &str, response_index: usize) -> Result<()> {
        let index = self.index_of(category)?;
        self.counts[index][response_index] += 1;
        Ok(())
    }

    pub fn count(&self, category: &str, response_index: usize) -> Result<u64> {
        let index = self.index_of(category)?;
        Ok(self.counts[index][response_index])
    }

    /// `P(category | response)` as a raw frequency, without smoothing.
    ///
    /// A category never seen alongside the response yields exactly 0.
    pub fn conditional_probability(
        &self,
        category: &str,
        response_index: usize,
        response_total: u64,
    ) -> Result<f64> {
        let count = self.count(category, response_index)?;
        Ok(count as f64 / response_total as f64)
    }

    /// Categories and their count rows, in registration order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.category_order
            .iter()
            .zip(self.counts.iter())
            .map(|(category, row)| (category.as_str(), row.as_slice()))
    }
}

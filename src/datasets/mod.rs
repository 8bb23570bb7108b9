//! The UCI datasets this tool evaluates.
//!
//! Each dataset is a table entry: where its file lives, how to parse it, the
//! schema the classifier is built from, and a preprocessing step that turns
//! raw fields into the schema's categories.

mod cmc;
mod income;
mod mushroom;

use crate::config::RunConfig;
use crate::error::Result;
use crate::evaluate::{evaluate, EvalConfig, RocCurve};
use crate::loader::{self, LoadOptions, Row};
use crate::schema::Schema;
use anyhow::Context;
use rand::Rng;
use tracing::info;

pub use cmc::CMC;
pub use income::INCOME;
pub use mushroom::MUSHROOM;

pub struct Dataset {
    pub name: &'static str,
    pub file: &'static str,
    pub load: LoadOptions,
    pub schema: Schema,
    pub title: &'static str,
    pub line_style: &'static str,
    /// Number of thresholds swept for the ROC curve.
    pub data_points: usize,
    pub prepare: fn(Vec<Row>) -> Result<Vec<Row>>,
}

pub const ALL: &[&Dataset] = &[&CMC, &MUSHROOM, &INCOME];

pub fn find(name: &str) -> Option<&'static Dataset> {
    ALL.iter().copied().find(|dataset| dataset.name == name)
}

/// Loads, prepares and evaluates one dataset.
pub fn run<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &RunConfig,
    rng: &mut R,
) -> anyhow::Result<RocCurve> {
    let path = config.data_dir.join(dataset.file);
    info!(dataset = dataset.name, path = %path.display(), "loading data");
    let rows = loader::load_file(&path, &dataset.load, rng)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let rows = (dataset.prepare)(rows)
        .with_context(|| format!("failed to prepare {} rows", dataset.name))?;

    let eval = EvalConfig {
        data_points: dataset.data_points,
        verbose: config.verbose,
        ..Default::default()
    };
    let points = evaluate(&dataset.schema, &rows, &eval)
        .with_context(|| format!("failed to evaluate {}", dataset.name))?;

    Ok(RocCurve {
        title: dataset.title.to_string(),
        line_style: dataset.line_style.to_string(),
        points,
    })
}

fn unchanged(rows: Vec<Row>) -> Result<Vec<Row>> {
    Ok(rows)
}

#[cfg(test)]
fn to_row(line: &[&str]) -> Row {
    line.iter().map(|field| field.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_findable() {
        let names: HashSet<&str> = ALL.iter().map(|dataset| dataset.name).collect();
        assert_eq!(names.len(), ALL.len());
        for name in names {
            assert_eq!(find(name).unwrap().name, name);
        }
        assert!(find("iris").is_none());
    }

    #[test]
    fn schemas_have_two_distinct_responses() {
        for dataset in ALL {
            let model = dataset.schema.build_model();
            assert_eq!(model.responses().len(), 2, "{}", dataset.name);
            assert_eq!(model.response_index(dataset.schema.positive).unwrap(), 1);
        }
    }
}

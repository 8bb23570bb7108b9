//! Contraceptive Method Choice.
//! <https://archive.ics.uci.edu/ml/datasets/Contraceptive+Method+Choice>
//!
//! Positives use a short- or long-term method (source classes 2 and 3),
//! negatives use none (class 1).

use super::{Dataset, Row};
use crate::bucket::bucketize_column;
use crate::error::{BayesError, Result};
use crate::loader::LoadOptions;
use crate::schema::{FeatureSpec, Schema};

const COLUMNS: usize = 10;
const AGE: usize = 0;
const CHILDREN: usize = 3;
const LABEL: usize = 9;

/// <=20, 21-25, 26-30, 31-35, 36-40, 41-45, 46+
const AGE_BOUNDS: &[i64] = &[21, 26, 31, 36, 41, 46];
/// 0..=8 kept as-is, 9 means "9 or more".
const CHILDREN_BOUNDS: &[i64] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];

const LOW_TO_HIGH: &[&str] = &["1", "2", "3", "4"];
const BINARY: &[&str] = &["0", "1"];

pub const CMC: Dataset = Dataset {
    name: "cmc",
    file: "cmc.data",
    load: LoadOptions {
        class_column: LABEL,
        delimiter: b',',
        missing_marker: None,
    },
    schema: Schema {
        negative: "1",
        positive: "2",
        features: &[
            FeatureSpec {
                name: "wife_age",
                categories: &["0", "1", "2", "3", "4", "5", "6"],
            },
            FeatureSpec {
                name: "wife_education",
                categories: LOW_TO_HIGH,
            },
            FeatureSpec {
                name: "husband_education",
                categories: LOW_TO_HIGH,
            },
            FeatureSpec {
                name: "children",
                categories: &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
            },
            // 0 = non-Islam, 1 = Islam
            FeatureSpec {
                name: "wife_religion",
                categories: BINARY,
            },
            // 0 = yes, 1 = no
            FeatureSpec {
                name: "wife_working",
                categories: BINARY,
            },
            FeatureSpec {
                name: "husband_occupation",
                categories: LOW_TO_HIGH,
            },
            FeatureSpec {
                name: "living_standard",
                categories: LOW_TO_HIGH,
            },
            // 0 = good, 1 = not good
            FeatureSpec {
                name: "media_exposure",
                categories: BINARY,
            },
        ],
    },
    title: "ROC curve - contraceptive use (cmc.data)",
    line_style: "b-",
    data_points: 1000,
    prepare,
};

fn prepare(mut rows: Vec<Row>) -> Result<Vec<Row>> {
    for row in &mut rows {
        if row.len() != COLUMNS {
            return Err(BayesError::RowLength {
                expected: COLUMNS,
                found: row.len(),
            });
        }
        bucketize_column(row, AGE, AGE_BOUNDS)?;
        bucketize_column(row, CHILDREN, CHILDREN_BOUNDS)?;
        if row[LABEL] == "3" {
            row[LABEL] = "2".to_string();
        }
    }
    Ok(rows)
}

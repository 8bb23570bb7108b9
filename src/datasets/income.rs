//! Adult census income.
//! <https://archive.ics.uci.edu/ml/datasets/Adult>
//!
//! Only United-States rows are kept. The continuous `fnlwgt`,
//! `education-num`, `capital-gain` and `capital-loss` columns are dropped
//! along with `native-country`; age and hours-per-week are bucketed.

use super::{Dataset, Row};
use crate::bucket::bucketize_column;
use crate::error::{BayesError, Result};
use crate::loader::LoadOptions;
use crate::schema::{FeatureSpec, Schema};
use tracing::debug;

const COLUMNS: usize = 15;
const NATIVE_COUNTRY: usize = 13;
/// Removed highest index first so earlier positions stay valid.
const DROPPED: &[usize] = &[NATIVE_COUNTRY, 11, 10, 4, 2];

const AGE: usize = 0;
const HOURS_PER_WEEK: usize = 8;

/// <=20, 21-25, ..., 61-65, 66+
const AGE_BOUNDS: &[i64] = &[21, 26, 31, 36, 41, 46, 51, 56, 61, 66];
/// <5, 5-14, 15-24, ..., 85-94, 95+
const HOURS_BOUNDS: &[i64] = &[5, 15, 25, 35, 45, 55, 65, 75, 85, 95];
const ELEVEN_BUCKETS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

pub const INCOME: Dataset = Dataset {
    name: "income",
    file: "income.data",
    load: LoadOptions {
        class_column: 14,
        delimiter: b',',
        missing_marker: Some("?"),
    },
    schema: Schema {
        negative: "<=50K",
        positive: ">50K",
        features: &[
            FeatureSpec {
                name: "age",
                categories: ELEVEN_BUCKETS,
            },
            FeatureSpec {
                name: "workclass",
                categories: &[
                    "Private",
                    "Self-emp-not-inc",
                    "Self-emp-inc",
                    "Federal-gov",
                    "Local-gov",
                    "State-gov",
                    "Without-pay",
                    "Never-worked",
                ],
            },
            FeatureSpec {
                name: "education",
                categories: &[
                    "Bachelors",
                    "Some-college",
                    "11th",
                    "HS-grad",
                    "Prof-school",
                    "Assoc-acdm",
                    "Assoc-voc",
                    "9th",
                    "7th-8th",
                    "12th",
                    "Masters",
                    "1st-4th",
                    "10th",
                    "Doctorate",
                    "5th-6th",
                    "Preschool",
                ],
            },
            FeatureSpec {
                name: "marital_status",
                categories: &[
                    "Married-civ-spouse",
                    "Divorced",
                    "Never-married",
                    "Separated",
                    "Widowed",
                    "Married-spouse-absent",
                    "Married-AF-spouse",
                ],
            },
            FeatureSpec {
                name: "occupation",
                categories: &[
                    "Tech-support",
                    "Craft-repair",
                    "Other-service",
                    "Sales",
                    "Exec-managerial",
                    "Prof-specialty",
                    "Handlers-cleaners",
                    "Machine-op-inspct",
                    "Adm-clerical",
                    "Farming-fishing",
                    "Transport-moving",
                    "Priv-house-serv",
                    "Protective-serv",
                    "Armed-Forces",
                ],
            },
            FeatureSpec {
                name: "relationship",
                categories: &[
                    "Wife",
                    "Own-child",
                    "Husband",
                    "Not-in-family",
                    "Other-relative",
                    "Unmarried",
                ],
            },
            FeatureSpec {
                name: "race",
                categories: &[
                    "White",
                    "Asian-Pac-Islander",
                    "Amer-Indian-Eskimo",
                    "Other",
                    "Black",
                ],
            },
            FeatureSpec {
                name: "sex",
                categories: &["Female", "Male"],
            },
            FeatureSpec {
                name: "hours_per_week",
                categories: ELEVEN_BUCKETS,
            },
        ],
    },
    title: "ROC curve - yearly income >$50k (income.data)",
    line_style: "b-",
    data_points: 100,
    prepare,
};

fn prepare(rows: Vec<Row>) -> Result<Vec<Row>> {
    let total = rows.len();
    let rows = rows
        .into_iter()
        .filter(|row| row.get(NATIVE_COUNTRY).map(String::as_str) == Some("United-States"))
        .map(|mut row| {
            if row.len() != COLUMNS {
                return Err(BayesError::RowLength {
                    expected: COLUMNS,
                    found: row.len(),
                });
            }
            for &column in DROPPED {
                row.remove(column);
            }
            bucketize_column(&mut row, AGE, AGE_BOUNDS)?;
            bucketize_column(&mut row, HOURS_PER_WEEK, HOURS_BOUNDS)?;
            Ok(row)
        })
        .collect::<Result<Vec<Row>>>()?;

    debug!(
        kept = rows.len(),
        dropped = total - rows.len(),
        "kept United-States rows"
    );
    Ok(rows)
}

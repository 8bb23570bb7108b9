use crate::error::{BayesError, Result};

/// Maps a numeric field to the index of the first upper bound it is below.
///
/// Values at or above the last bound land in bucket `upper_bounds.len()`.
/// `column` only feeds the error message.
pub fn bucketize(value: &str, column: usize, upper_bounds: &[i64]) -> Result<String> {
    let number: i64 = value.parse().map_err(|_| BayesError::InvalidNumber {
        column,
        value: value.to_string(),
    })?;
    let index = upper_bounds
        .iter()
        .position(|&bound| number < bound)
        .unwrap_or(upper_bounds.len());
    Ok(index.to_string())
}

/// Replaces `row[column]` with its bucket index.
pub fn bucketize_column(row: &mut [String], column: usize, upper_bounds: &[i64]) -> Result<()> {
    let field = row.get(column).ok_or(BayesError::RowLength {
        expected: column + 1,
        found: row.len(),
    })?;
    let bucket = bucketize(field, column, upper_bounds)?;
    row[column] = bucket;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGES: &[i64] = &[21, 26, 31, 36, 41, 46];

    #[test]
    fn values_fall_into_half_open_buckets() {
        assert_eq!(bucketize("16", 0, AGES).unwrap(), "0");
        assert_eq!(bucketize("20", 0, AGES).unwrap(), "0");
        assert_eq!(bucketize("21", 0, AGES).unwrap(), "1");
        assert_eq!(bucketize("45", 0, AGES).unwrap(), "5");
        assert_eq!(bucketize("46", 0, AGES).unwrap(), "6");
        assert_eq!(bucketize("90", 0, AGES).unwrap(), "6");
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = bucketize("forty", 3, AGES).unwrap_err();
        assert_eq!(err.to_string(), "column 3: 'forty' is not a number");
    }

    #[test]
    fn column_is_rewritten_in_place() {
        let mut row = vec!["33".to_string(), "Private".to_string()];
        bucketize_column(&mut row, 0, AGES).unwrap();
        assert_eq!(row, vec!["3", "Private"]);
    }
}

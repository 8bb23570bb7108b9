use crate::error::Result;
use csv::{ReaderBuilder, StringRecord, Trim};
use rand::seq::SliceRandom;
use rand::Rng;
use std::{io, path::Path};
use tracing::debug;

/// A row of category tokens with the class label as the last element.
pub type Row = Vec<String>;

/// How to read one delimited dataset file.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Column holding the class label in the source file.
    pub class_column: usize,
    pub delimiter: u8,
    /// Rows containing this exact field are dropped.
    pub missing_marker: Option<&'static str>,
}

/// Reads a dataset file and returns its rows in shuffled order.
pub fn load_file<P, R>(path: P, options: &LoadOptions, rng: &mut R) -> Result<Vec<Row>>
where
    P: AsRef<Path>,
    R: Rng + ?Sized,
{
    let file = std::fs::File::open(path)?;
    let mut rows = load_reader(file, options)?;
    rows.shuffle(rng);
    Ok(rows)
}

/// Reads rows in source order, moving the class column to the end.
///
/// Rows with fewer than two fields, too few fields to hold the class
/// column, or a missing-value marker are skipped.
pub fn load_reader<R: io::Read>(reader: R, options: &LoadOptions) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        match to_row(&record, options) {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }

    debug!(rows = rows.len(), skipped, "loaded dataset");
    Ok(rows)
}

fn to_row(record: &StringRecord, options: &LoadOptions) -> Option<Row> {
    if record.len() < 2 || options.class_column >= record.len() {
        return None;
    }
    if let Some(marker) = options.missing_marker {
        if record.iter().any(|field| field == marker) {
            return None;
        }
    }

    let mut row: Row = record
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != options.class_column)
        .map(|(_, field)| field.to_string())
        .collect();
    row.push(record[options.class_column].to_string());
    Some(row)
}

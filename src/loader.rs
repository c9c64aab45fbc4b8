use serde::Deserialize;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

/// One parsed data row, keyed by the source file's header column names.
///
/// Values are kept as untyped strings; interpreting a field (for example,
/// parsing `rating` as a number) is the report generator's job.
#[derive(Clone, Debug, Deserialize)]
#[serde(transparent)]
pub struct Record(HashMap<String, String>);

impl Record {
    /// Returns the value of `field`, if the row has one.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads the CSV files at `paths` and returns all their data rows, in file
/// order then row order.
///
/// Problems with individual files are never fatal: a missing file, a file
/// without a `.csv` extension (any case), a file with no data rows, or a
/// file that cannot be parsed is reported with a diagnostic line on stdout
/// and contributes no records, and loading continues with the remaining
/// paths.
#[must_use]
pub fn load(paths: &[PathBuf]) -> Vec<Record> {
    let mut records = Vec::new();
    for path in paths {
        if !path.exists() {
            println!("File not found: {}", path.display());
            continue;
        }
        if !is_csv(path) {
            println!("Skipped (not a CSV file): {}", path.display());
            continue;
        }
        match read_file(path) {
            Ok(rows) if rows.is_empty() => println!("File is empty: {}", path.display()),
            Ok(rows) => records.extend(rows),
            Err(err) => println!("Error reading file {}: {err}", path.display()),
        }
    }
    records
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_file(path: &Path) -> anyhow::Result<Vec<Record>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

use std::fmt::Display;

use crate::loader::Record;
use crate::rating::Rating;

/// Holds the per-brand average ratings for a set of records.
///
/// To build a report, use [`AverageRatingReport::from_records`].
///
/// To get a printable version of the report, use its [`Display`]
/// implementation, which renders a pipe-delimited grid table sorted by
/// average rating, descending. If no record produced a usable rating, the
/// table is replaced by an "empty" message.
#[derive(Debug, Default)]
pub struct AverageRatingReport {
    rows: Vec<(String, Rating)>,
}

impl AverageRatingReport {
    /// Aggregates `records` into one average rating per brand.
    ///
    /// Each record must have a non-empty `brand` field and a numeric
    /// `rating` field to count; records missing either are skipped, without
    /// any diagnostic. Brand names are trimmed of surrounding whitespace.
    ///
    /// Averages are rounded to 2 decimal places and sorted descending.
    /// Brands with equal averages stay in the order their first record was
    /// seen.
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut buckets: Vec<(String, Vec<Rating>)> = Vec::new();
        for record in records {
            let Some(brand) = record.get("brand").map(str::trim).filter(|b| !b.is_empty())
            else {
                continue;
            };
            let Some(rating) = record.get("rating").and_then(|r| r.parse::<Rating>().ok())
            else {
                continue;
            };
            match buckets.iter_mut().find(|(name, _)| name == brand) {
                Some((_, ratings)) => ratings.push(rating),
                None => buckets.push((brand.to_string(), vec![rating])),
            }
        }
        let mut rows: Vec<(String, Rating)> = buckets
            .into_iter()
            .filter_map(|(brand, ratings)| Rating::mean(&ratings).map(|mean| (brand, mean)))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        Self { rows }
    }
}

impl Display for AverageRatingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "File is empty.");
        }
        let width = self
            .rows
            .iter()
            .map(|(brand, _)| brand.len())
            .max()
            .unwrap_or(0)
            .max("Brand".len());
        writeln!(f, "| {:width$} | {:>14} |", "Brand", "Average rating")?;
        let dashes = width + 2;
        writeln!(f, "|{:-<dashes$}|{:-<16}|", "", "")?;
        for (brand, average) in &self.rows {
            writeln!(f, "| {brand:width$} | {average:>14} |")?;
        }
        Ok(())
    }
}

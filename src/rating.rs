use anyhow::bail;

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

/// Represents a product rating.
///
/// The rating is stored internally as an integer number of hundredths, but
/// the [`Display`] implementation formats it to 2 decimal places.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Rating(i64);

impl Rating {
    /// Returns the arithmetic mean of `ratings`, rounded to 2 decimal
    /// places, or `None` if `ratings` is empty.
    #[must_use]
    pub fn mean(ratings: &[Self]) -> Option<Self> {
        if ratings.is_empty() {
            return None;
        }
        let sum: i64 = ratings.iter().map(|r| r.0).sum();
        Some(Self((sum as f64 / ratings.len() as f64).round() as i64))
    }
}

impl Debug for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&format!("{:.2}", self.0 as f64 / 100.0))
    }
}

impl FromStr for Rating {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let value: f64 = s.trim().parse()?;
        if !value.is_finite() {
            bail!("rating is not a finite number: {s}");
        }
        Ok(Self((value * 100.0).round() as i64))
    }
}

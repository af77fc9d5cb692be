//! Month × year accident counts.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::dataset::Dataset;
use crate::error::{FarsError, Result};
use crate::extract::YearExtract;
use crate::filename::IntoYear;

/// One month's accident counts, aligned with [`MonthlySummary::years`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRow {
    pub month: u8,
    pub counts: Vec<usize>,
}

/// Accidents per month (rows 1–12) for each year that loaded (columns,
/// ascending).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    years: Vec<i32>,
    rows: Vec<MonthRow>,
}

impl MonthlySummary {
    /// Counts `(month, year)` pairs. Every year in `loaded` gets a column,
    /// even one without rows. Months outside 1–12 are dropped.
    fn from_pairs(loaded: &[i32], pairs: impl IntoIterator<Item = (u8, i32)>) -> Self {
        let mut counts: BTreeMap<i32, [usize; 12]> =
            loaded.iter().map(|year| (*year, [0; 12])).collect();
        let mut out_of_range = 0usize;

        for (month, year) in pairs {
            let column = counts.entry(year).or_insert([0; 12]);
            match month {
                1..=12 => column[usize::from(month) - 1] += 1,
                _ => out_of_range += 1,
            }
        }

        if out_of_range > 0 {
            debug!(out_of_range, "Rows with a MONTH outside 1-12 left out of summary");
        }

        let years: Vec<i32> = counts.keys().copied().collect();
        let rows = (1..=12u8)
            .map(|month| MonthRow {
                month,
                counts: counts
                    .values()
                    .map(|column| column[usize::from(month) - 1])
                    .collect(),
            })
            .collect();

        Self { years, rows }
    }

    /// Column headers: each year whose file loaded, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Always twelve rows, January first.
    pub fn rows(&self) -> &[MonthRow] {
        &self.rows
    }

    pub fn count(&self, year: i32, month: u8) -> Option<usize> {
        let column = self.years.iter().position(|y| *y == year)?;
        let row = self.rows.iter().find(|r| r.month == month)?;
        Some(row.counts[column])
    }

    pub fn year_total(&self, year: i32) -> Option<usize> {
        let column = self.years.iter().position(|y| *y == year)?;
        Some(self.rows.iter().map(|r| r.counts[column]).sum())
    }

    pub fn month_total(&self, month: u8) -> Option<usize> {
        let row = self.rows.iter().find(|r| r.month == month)?;
        Some(row.counts.iter().sum())
    }
}

impl Dataset {
    /// Counts accidents per month for each requested year.
    ///
    /// Years whose file cannot be loaded are logged and left out. Rows of a
    /// year requested twice are counted twice.
    ///
    /// # Errors
    ///
    /// [`FarsError::NoData`] when `years` is empty or none of them loaded.
    /// A year whose file loads but holds no rows still gets a zero column.
    pub fn summarize_years<I, Y>(&self, years: I) -> Result<MonthlySummary>
    where
        I: IntoIterator<Item = Y>,
        Y: IntoYear,
    {
        let requested: Vec<i32> = years.into_iter().map(IntoYear::into_year).collect();
        let extracts = self.extract_years(requested.iter().copied());

        let mut loaded = Vec::new();
        let mut pairs = Vec::new();
        for extract in extracts {
            if let Some(message) = extract.warning() {
                if let YearExtract::Skipped { year, reason } = &extract {
                    warn!(year, error = %reason, "{message}");
                }
                continue;
            }
            if let YearExtract::Loaded { year, rows } = extract {
                loaded.push(year);
                pairs.extend(rows.into_iter().map(|r| (r.month, r.year)));
            }
        }

        if loaded.is_empty() {
            return Err(FarsError::NoData { requested });
        }

        Ok(MonthlySummary::from_pairs(&loaded, pairs))
    }
}

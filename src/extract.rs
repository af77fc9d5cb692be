//! Per-year extraction of (MONTH, year) pairs.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::FarsError;
use crate::filename::IntoYear;

/// The month of one accident tagged with the year it was requested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthYear {
    #[serde(rename = "MONTH")]
    pub month: u8,
    pub year: i32,
}

/// Outcome of extracting one requested year.
#[derive(Debug)]
pub enum YearExtract {
    /// The year's file loaded; one pair per accident row.
    Loaded { year: i32, rows: Vec<MonthYear> },
    /// The year could not be loaded and was left out.
    Skipped { year: i32, reason: FarsError },
}

impl YearExtract {
    pub fn year(&self) -> i32 {
        match self {
            YearExtract::Loaded { year, .. } | YearExtract::Skipped { year, .. } => *year,
        }
    }

    pub fn rows(&self) -> Option<&[MonthYear]> {
        match self {
            YearExtract::Loaded { rows, .. } => Some(rows),
            YearExtract::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, YearExtract::Skipped { .. })
    }

    /// User-facing warning for a skipped year, `None` when it loaded.
    pub fn warning(&self) -> Option<String> {
        match self {
            YearExtract::Skipped { year, .. } => Some(format!("invalid year: {year}")),
            YearExtract::Loaded { .. } => None,
        }
    }
}

impl Dataset {
    /// Loads each requested year independently and keeps only its months.
    ///
    /// The result has one entry per input year, in input order. A year whose
    /// file is missing or unreadable becomes [`YearExtract::Skipped`] and
    /// does not affect the others. Nothing is logged here; callers decide
    /// how to report skips.
    pub fn extract_years<I, Y>(&self, years: I) -> Vec<YearExtract>
    where
        I: IntoIterator<Item = Y>,
        Y: IntoYear,
    {
        years
            .into_iter()
            .map(|y| {
                let year = y.into_year();
                match self.load_year(year) {
                    Ok(table) => YearExtract::Loaded {
                        year,
                        rows: table
                            .records()
                            .iter()
                            .map(|r| MonthYear {
                                month: r.month,
                                year,
                            })
                            .collect(),
                    },
                    Err(reason) => YearExtract::Skipped { year, reason },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SAMPLE_CSV, write_bz2};

    #[test]
    fn test_extract_keeps_position_and_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_bz2(dir.path(), "accident_2013.csv.bz2", SAMPLE_CSV);
        let dataset = Dataset::new(dir.path());

        let results = dataset.extract_years([2013, 9999]);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].year(), 2013);
        let rows = results[0].rows().unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.year == 2013));
        assert_eq!(
            rows.iter().map(|r| r.month).collect::<Vec<_>>(),
            vec![1, 1, 2, 12, 2]
        );

        assert!(results[1].is_skipped());
        assert!(results[1].rows().is_none());

        let warnings: Vec<_> = results.iter().filter_map(YearExtract::warning).collect();
        assert_eq!(warnings, vec!["invalid year: 9999".to_string()]);
    }

    #[test]
    fn test_skip_carries_reason() {
        let dataset = Dataset::new(tempfile::tempdir().unwrap().path());
        let results = dataset.extract_years([1975]);

        match &results[0] {
            YearExtract::Skipped { year, reason } => {
                assert_eq!(*year, 1975);
                assert!(matches!(reason, FarsError::NotFound(_)));
            }
            other => panic!("expected a skip, got {other:?}"),
        }
    }

    #[test]
    fn test_requested_year_overrides_file_year() {
        let dir = tempfile::tempdir().unwrap();
        // The file's own YEAR column disagrees with its name.
        write_bz2(
            dir.path(),
            "accident_2014.csv.bz2",
            "STATE,MONTH,YEAR,LONGITUD,LATITUDE\n1,5,2013,-86.5,32.4\n",
        );

        let results = Dataset::new(dir.path()).extract_years([2014]);
        assert_eq!(
            results[0].rows().unwrap(),
            &[MonthYear {
                month: 5,
                year: 2014
            }]
        );
    }

    #[test]
    fn test_malformed_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_bz2(dir.path(), "accident_2013.csv.bz2", SAMPLE_CSV);
        write_bz2(dir.path(), "accident_2014.csv.bz2", "STATE,MONTH\n1,1\n");

        let results = Dataset::new(dir.path()).extract_years([2014, 2013]);

        assert!(matches!(
            results[0],
            YearExtract::Skipped {
                reason: FarsError::Schema { .. },
                ..
            }
        ));
        assert_eq!(results[1].rows().map(<[_]>::len), Some(5));
    }

    #[test]
    fn test_empty_input() {
        let dataset = Dataset::default();
        assert!(dataset.extract_years(Vec::<i32>::new()).is_empty());
    }
}

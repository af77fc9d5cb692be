use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filename::{IntoYear, format_filename};
use crate::parser::load_file;
use crate::record::AccidentTable;

/// A directory of per-year FARS accident files.
///
/// Every operation reads the files afresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Dataset {
    data_dir: PathBuf,
}

impl Default for Dataset {
    /// Files resolved against the working directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl Dataset {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the accident file for `year` inside the data directory.
    pub fn path_for(&self, year: impl IntoYear) -> PathBuf {
        self.data_dir.join(format_filename(year))
    }

    /// Loads the accident file for `year`.
    pub fn load_year(&self, year: impl IntoYear) -> Result<AccidentTable> {
        load_file(self.path_for(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FarsError;
    use crate::test_support::{SAMPLE_CSV, write_bz2};

    #[test]
    fn test_path_for_joins_data_dir() {
        let dataset = Dataset::new("/srv/fars");
        assert_eq!(
            dataset.path_for(2013),
            PathBuf::from("/srv/fars/accident_2013.csv.bz2")
        );
    }

    #[test]
    fn test_default_is_working_directory() {
        assert_eq!(Dataset::default().data_dir(), Path::new("."));
    }

    #[test]
    fn test_load_year() {
        let dir = tempfile::tempdir().unwrap();
        write_bz2(dir.path(), "accident_2013.csv.bz2", SAMPLE_CSV);
        let dataset = Dataset::new(dir.path());

        assert_eq!(dataset.load_year(2013).unwrap().len(), 5);
        assert!(matches!(
            dataset.load_year(2014).unwrap_err(),
            FarsError::NotFound(_)
        ));
    }
}

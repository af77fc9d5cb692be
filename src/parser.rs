//! Loader for FARS accident files (bzip2, gzip or plain CSV).

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::error::{FarsError, Result};
use crate::record::{AccidentRecord, AccidentTable, REQUIRED_COLUMNS};

/// Reads the accident file at `path` into an [`AccidentTable`].
///
/// The decompressor is picked from the extension: `.bz2`, `.gz`, otherwise
/// the file is read as plain CSV. Rows are returned as they appear in the
/// file.
///
/// # Errors
///
/// - [`FarsError::NotFound`] if `path` does not exist.
/// - [`FarsError::Schema`] if a required column is missing from the header.
/// - [`FarsError::Csv`] / [`FarsError::Io`] on unreadable or malformed content.
pub fn load_file(path: impl AsRef<Path>) -> Result<AccidentTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FarsError::NotFound(path.to_path_buf()));
    }

    let reader = open_decompressed(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|source| csv_error(path, source))?;
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(FarsError::Schema {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: AccidentRecord = result.map_err(|source| csv_error(path, source))?;
        records.push(record);
    }

    debug!(path = %path.display(), rows = records.len(), "Loaded accident file");
    Ok(AccidentTable::new(path, records))
}

fn open_decompressed(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            FarsError::NotFound(path.to_path_buf())
        } else {
            FarsError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let file = BufReader::new(file);

    let reader: Box<dyn Read> = match path.extension().and_then(|e| e.to_str()) {
        Some("bz2") => Box::new(MultiBzDecoder::new(file)),
        Some("gz") => Box::new(MultiGzDecoder::new(file)),
        _ => Box::new(file),
    };
    Ok(reader)
}

fn csv_error(path: &Path, source: csv::Error) -> FarsError {
    debug!(path = %path.display(), error = %source, "Accident file failed to parse");
    FarsError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{SAMPLE_CSV, write_bz2, write_gz, write_plain};

    #[test]
    fn test_load_missing_file_names_it() {
        let err = load_file("nonexistent.csv.bz2").unwrap_err();
        match err {
            FarsError::NotFound(p) => assert_eq!(p, Path::new("nonexistent.csv.bz2")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_bz2() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bz2(dir.path(), "accident_2013.csv.bz2", SAMPLE_CSV);

        let table = load_file(&path).unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table.path(), path.as_path());
        let first = &table.records()[0];
        assert_eq!(first.state, 1);
        assert_eq!(first.month, 1);
        assert_eq!(first.year, Some(2013));
        assert_eq!(first.longitude, Some(-86.5));
        assert_eq!(first.latitude, Some(32.4));
    }

    #[test]
    fn test_gz_and_plain_match_bz2() {
        let dir = tempfile::tempdir().unwrap();
        let bz2 = load_file(write_bz2(dir.path(), "a.csv.bz2", SAMPLE_CSV)).unwrap();
        let gz = load_file(write_gz(dir.path(), "a.csv.gz", SAMPLE_CSV)).unwrap();
        let plain = load_file(write_plain(dir.path(), "a.csv", SAMPLE_CSV)).unwrap();

        assert_eq!(bz2.records(), gz.records());
        assert_eq!(bz2.records(), plain.records());
    }

    #[test]
    fn test_missing_required_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plain(
            dir.path(),
            "no_lat.csv",
            "STATE,MONTH,LONGITUD\n1,1,-86.5\n",
        );

        match load_file(&path).unwrap_err() {
            FarsError::Schema { column, .. } => assert_eq!(column, "LATITUDE"),
            other => panic!("expected Schema, got {other:?}"),
        }
    }

    #[test]
    fn test_year_column_optional_and_extra_columns_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plain(
            dir.path(),
            "minimal.csv",
            "ST_CASE,STATE,MONTH,LONGITUD,LATITUDE,FATALS\n10001,1,3,-86.5,32.4,2\n",
        );

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].year, None);
        assert_eq!(table.records()[0].month, 3);
    }

    #[test]
    fn test_unparsable_coordinates_load_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plain(
            dir.path(),
            "blank.csv",
            "STATE,MONTH,LONGITUD,LATITUDE\n1,1,,abc\n",
        );

        let table = load_file(&path).unwrap();
        assert_eq!(table.records()[0].longitude, None);
        assert_eq!(table.records()[0].latitude, None);
    }

    #[test]
    fn test_malformed_month_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plain(
            dir.path(),
            "bad.csv",
            "STATE,MONTH,LONGITUD,LATITUDE\n1,January,-86.5,32.4\n",
        );

        assert!(matches!(
            load_file(&path).unwrap_err(),
            FarsError::Csv { .. }
        ));
    }
}

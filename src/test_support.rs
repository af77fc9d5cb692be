//! Fixture helpers shared by the unit tests.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Five accidents: three in Alabama (one without a location), one in
/// California and one in Alaska, spread over January, February and December.
pub const SAMPLE_CSV: &str = "\
STATE,ST_CASE,MONTH,YEAR,LONGITUD,LATITUDE,FATALS
1,10001,1,2013,-86.5,32.4,1
1,10002,1,2013,999.9999,99.9999,2
1,10003,2,2013,-87.1,33.2,1
6,60001,12,2013,-118.2,34.0,1
2,20001,2,2013,-149.9,61.2,1
";

pub fn write_bz2(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = bzip2::write::BzEncoder::new(file, bzip2::Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

pub fn write_gz(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

pub fn write_plain(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

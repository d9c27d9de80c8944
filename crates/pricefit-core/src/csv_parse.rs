use crate::sample::SampleSet;

use std::fs::File;
use std::io;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub fn mk_rdr<P: AsRef<Path>>(filename: P) -> Result<csv::Reader<File>, DataError> {
    let file = File::open(filename)?;
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    Ok(rdr)
}

pub fn read_samples<P: AsRef<Path>>(filename: P) -> Result<SampleSet, DataError> {
    let mut rdr = mk_rdr(filename)?;
    samples_from_rdr(&mut rdr)
}

/// One header line is skipped, every following row must hold exactly
/// two numeric fields.
pub fn samples_from_rdr<R: io::Read>(rdr: &mut csv::Reader<R>) -> Result<SampleSet, DataError> {
    let mut samples = SampleSet::new();
    for row in rdr.deserialize() {
        let (km, price): (f64, f64) = row?;
        samples.push(km, price);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::{samples_from_rdr, DataError};

    fn rdr_from(data: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new().has_headers(true).from_reader(data.as_bytes())
    }

    #[test]
    fn test_header_skipped() {
        let mut rdr = rdr_from("km,price\n240000,3650\n139800,3800\n");
        let samples = samples_from_rdr(&mut rdr).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples.km, vec![240000., 139800.]);
        assert_eq!(samples.price, vec![3650., 3800.]);
    }

    #[test]
    fn test_header_only_gives_empty_set() {
        let mut rdr = rdr_from("km,price\n");
        let samples = samples_from_rdr(&mut rdr).unwrap();

        assert!(samples.is_empty());
    }

    #[test]
    fn test_bad_numeric_field() {
        let mut rdr = rdr_from("km,price\n240000,cheap\n");

        assert!(matches!(samples_from_rdr(&mut rdr), Err(DataError::Csv(_))));
    }

    #[test]
    fn test_short_row() {
        let mut rdr = rdr_from("km,price\n240000\n");

        assert!(matches!(samples_from_rdr(&mut rdr), Err(DataError::Csv(_))));
    }
}

//! CSV file of saved tax records

use crate::core::TaxRecord;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Append-only record file with the header
/// `ic_number,income,tax_relief,tax_payable`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first if the file is new or empty.
    pub fn append(&self, record: &TaxRecord) -> Result<(), StoreError> {
        let write_header = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(err) if err.kind() == io::ErrorKind::NotFound => true,
            Err(err) => return Err(self.io_error(err)),
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        wtr.serialize(record).map_err(|err| self.csv_error(err))?;
        wtr.flush().map_err(|err| self.io_error(err))?;

        log::info!(
            "Saved record for {} to {}{}",
            record.ic_number,
            self.path.display(),
            if write_header { " (new file)" } else { "" }
        );
        Ok(())
    }

    /// Read every record in file order, `None` if the file does not exist.
    pub fn read_all(&self) -> Result<Option<Vec<TaxRecord>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No record file at {}", self.path.display());
                return Ok(None);
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);
        let records = rdr
            .deserialize()
            .collect::<Result<Vec<TaxRecord>, _>>()
            .map_err(|err| self.csv_error(err))?;
        log::info!("Read {} records from {}", records.len(), self.path.display());
        Ok(Some(records))
    }

    /// Records saved for one IC number, `None` if the file does not exist.
    pub fn find(&self, ic_number: &str) -> Result<Option<Vec<TaxRecord>>, StoreError> {
        Ok(self.read_all()?.map(|records| {
            records
                .into_iter()
                .filter(|r| r.ic_number == ic_number)
                .collect()
        }))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, source: csv::Error) -> StoreError {
        StoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(ic: &str, income: rust_decimal::Decimal) -> TaxRecord {
        TaxRecord::calculate(ic, income, dec!(9000)).unwrap()
    }

    #[test]
    fn missing_file_reads_as_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        assert_eq!(store.read_all().unwrap(), None);
        assert_eq!(store.find("123456789012").unwrap(), None);
    }

    #[test]
    fn first_append_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        store.append(&record("123456789012", dec!(34000))).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "ic_number,income,tax_relief,tax_payable\n123456789012,34000,9000,300.00\n"
        );
    }

    #[test]
    fn later_appends_skip_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        store.append(&record("123456789012", dec!(34000))).unwrap();
        store.append(&record("999999999999", dec!(109000))).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.matches("ic_number").count(), 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn empty_file_gets_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        File::create(&path).unwrap();

        let store = RecordStore::new(&path);
        store.append(&record("123456789012", dec!(34000))).unwrap();
        assert_eq!(store.read_all().unwrap().map(|r| r.len()), Some(1));
    }

    #[test]
    fn written_records_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        let written = vec![
            record("123456789012", dec!(34000)),
            record("000000001234", dec!(109000)),
            TaxRecord::calculate("123456789012", dec!(5000.5), dec!(0)).unwrap(),
        ];
        for r in &written {
            store.append(r).unwrap();
        }

        let read = store.read_all().unwrap().unwrap();
        assert_eq!(read, written);
        assert_eq!(read[1].ic_number, "000000001234");
        assert_eq!(read[1].tax_payable, dec!(9400.00));
    }

    #[test]
    fn find_filters_by_ic_number() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("records.csv"));
        store.append(&record("123456789012", dec!(34000))).unwrap();
        store.append(&record("999999999999", dec!(50000))).unwrap();
        store.append(&record("123456789012", dec!(60000))).unwrap();

        let found = store.find("123456789012").unwrap().unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].income, dec!(60000));
        assert_eq!(store.find("000000000000").unwrap(), Some(vec![]));
    }

    #[test]
    fn reads_files_written_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(
            &path,
            "ic_number,income,tax_relief,tax_payable\n880101105555,25000.0,0.0,300.0\n",
        )
        .unwrap();

        let records = RecordStore::new(&path).read_all().unwrap().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].income, dec!(25000));
        assert_eq!(records[0].tax_payable, dec!(300));
    }

    #[test]
    fn malformed_row_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(
            &path,
            "ic_number,income,tax_relief,tax_payable\n123456789012,lots,0,0\n",
        )
        .unwrap();

        let err = RecordStore::new(&path).read_all().unwrap_err();
        assert!(matches!(err, StoreError::Csv { .. }));
    }
}

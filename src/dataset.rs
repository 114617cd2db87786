use crate::error::HarvestError;
use crate::records::Book;
use std::path::Path;

/// Ordered, finalized collection of harvested records.
///
/// Owned by the active session; the analyzer and the search engine only ever
/// see it behind a shared reference.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Book>,
}

impl Dataset {
    /// Builds a dataset from collected records, dropping any record with a
    /// missing or unusable field
    pub fn finalize(records: Vec<Book>) -> Self {
        let total = records.len();
        let records: Vec<Book> = records.into_iter().filter(Book::is_complete).collect();

        let dropped = total - records.len();
        if dropped > 0 {
            ::log::warn!("Dropped {} incomplete record(s) during finalization", dropped);
        }

        Self { records }
    }

    /// The records in harvest order
    pub fn records(&self) -> &[Book] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the dataset as a delimited file with a `Title,Link,Price,Stock`
    /// header row. The derived stock flag is never persisted.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), HarvestError> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in &self.records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Reads a previously persisted dataset back. Finalization runs again so
    /// the completeness rules hold for loaded data too, and the derived stock
    /// flag is recomputed from the stored availability text.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Self, HarvestError> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }

        ::log::debug!("Read {} record(s) from disk", records.len());
        Ok(Self::finalize(records))
    }
}

//! Batch file reader with iterator interface
//!
//! Streams the lines of a batch file as [`RawRecord`]s. Every line is one record,
//! blank lines included, and the first line is data. Fields are split on plain
//! commas without quoting (see [`RawRecord::parse`]). The reader does not validate
//! field counts or types: the replay phases own that policy.
//!
//! ```no_run
//! use bank_ledger::io::sync_reader::RecordReader;
//! use std::path::Path;
//!
//! let reader = RecordReader::open(Path::new("account.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("line {}: {}", record.line, record.raw()),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - A line that is not valid UTF-8 is yielded as `Err(LedgerError::ParseError)`
//! - Any other read failure is yielded as `Err(LedgerError::IoError)`
//!
//! Records are read one at a time; the file is never loaded into memory at once.

use crate::types::{LedgerError, RawRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines, Read};
use std::path::Path;

/// Streaming reader over the lines of a batch file
#[derive(Debug)]
pub struct RecordReader<R: Read = File> {
    lines: Lines<BufReader<R>>,
    records_read: u64,
}

impl RecordReader<File> {
    /// Open a batch file
    ///
    /// # Returns
    ///
    /// * `Ok(RecordReader)` if the file was opened
    /// * `Err(LedgerError::FileNotFound)` if it does not exist
    /// * `Err(LedgerError::IoError)` for any other failure
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> RecordReader<R> {
    /// Read batch records from any byte source
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn from_reader(source: R) -> Self {
        RecordReader {
            lines: BufReader::with_capacity(8 * 1024, source).lines(),
            records_read: 0,
        }
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.records_read += 1;

        Some(match line {
            Ok(text) => Ok(RawRecord::parse(self.records_read, &text)),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(LedgerError::ParseError {
                line: Some(self.records_read),
                message: e.to_string(),
            }),
            Err(e) => Err(e.into()),
        })
    }
}

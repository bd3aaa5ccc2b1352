//! Append-only ledger file
//!
//! Backs the transaction store with a pipe-delimited text file, one
//! transaction per line, no header.
//!
//! # Design
//!
//! The file is opened and closed per operation: one open/read/close for a
//! load, one open/append/close per write. No handle is held between calls and
//! no locking is performed; a single process is assumed to own the file.
//!
//! # Error Handling
//!
//! - A missing file is created empty on load (first run)
//! - The first undecodable line aborts the whole load; the error names the
//!   file, the line number and the cause
//! - I/O failures are reported as `LedgerError::FileAccess`

use crate::core::traits::RecordLog;
use crate::io::record_format::{decode_record, encode, FIELD_DELIMITER};
use crate::types::{LedgerError, Transaction};
use csv::ReaderBuilder;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Well-known ledger filename used when no other path is configured
pub const DEFAULT_LEDGER_FILE: &str = "transactions.csv";

/// File-backed record log
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self, file: File) -> Result<Vec<Transaction>, LedgerError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(FIELD_DELIMITER)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        let mut transactions = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| self.read_error(e))?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let transaction = decode_record(&record).map_err(|e| e.at_line(line))?;
            transactions.push(transaction);
        }
        Ok(transactions)
    }

    /// I/O failures while reading are access errors, everything else is a bad record
    fn read_error(&self, error: csv::Error) -> LedgerError {
        if let csv::ErrorKind::Io(io_error) = error.kind() {
            return LedgerError::file_access(&self.path, io_error);
        }
        LedgerError::from(error)
    }
}

/// Whether a non-empty file is missing its final newline
fn lacks_trailing_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

impl Default for LedgerFile {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_FILE)
    }
}

impl RecordLog for LedgerFile {
    /// Load every transaction in file order
    ///
    /// Creates the file empty and returns no transactions if it does not exist.
    fn load_all(&self) -> Result<Vec<Transaction>, LedgerError> {
        if !self.path.exists() {
            File::create(&self.path).map_err(|e| LedgerError::file_access(&self.path, &e))?;
            info!(path = %self.path.display(), "Created new ledger file");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).map_err(|e| LedgerError::file_access(&self.path, &e))?;
        let transactions = self.read_all(file).map_err(|e| match e {
            LedgerError::FileAccess { .. } => e,
            other => LedgerError::load_failed(&self.path, other),
        })?;

        info!(
            path = %self.path.display(),
            count = transactions.len(),
            "Loaded ledger file"
        );
        Ok(transactions)
    }

    /// Append one encoded line
    ///
    /// The handle is flushed and dropped before returning, on success and on failure.
    /// A file whose last line lacks a newline gets one first.
    fn append(&mut self, transaction: &Transaction) -> Result<(), LedgerError> {
        let line = encode(transaction);

        let mut file = OpenOptions::new()
            .read(true)
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::file_access(&self.path, &e))?;

        let needs_separator = lacks_trailing_newline(&mut file)
            .map_err(|e| LedgerError::file_access(&self.path, &e))?;

        let mut bytes = String::with_capacity(line.len() + 2);
        if needs_separator {
            bytes.push('\n');
        }
        bytes.push_str(&line);
        bytes.push('\n');

        file.write_all(bytes.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| LedgerError::file_access(&self.path, &e))?;

        debug!(path = %self.path.display(), %line, "Appended record");
        Ok(())
    }
}

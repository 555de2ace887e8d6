//! Generic RRF file parser.
//!
//! Provides a streaming parser for UMLS Rich Release Format files: pipe
//! delimited, no header row, no quoting, one trailing `|` per line.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{UmlsError, UmlsResult};

/// Trait for types that can be parsed from RRF records.
pub trait RrfRecord: Sized {
    /// Column layout used to locate fields in a record.
    type Columns: Copy;

    /// Minimum number of fields a record needs for this layout.
    fn required_fields(columns: &Self::Columns) -> usize;

    /// Builds a value from a record with at least `required_fields` fields.
    fn from_record(record: &StringRecord, columns: &Self::Columns) -> Self;
}

/// Passes bytes through unchanged, noting where empty lines end.
///
/// The csv reader skips empty lines without reporting them, so the offsets
/// collected here are the only trace they leave.
struct BlankLines<R> {
    inner: R,
    offset: u64,
    line_len: usize,
    blanks: VecDeque<u64>,
}

impl<R: Read> BlankLines<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            line_len: 0,
            blanks: VecDeque::new(),
        }
    }

    /// Removes and returns the first empty line ending before byte `end`.
    fn take_before(&mut self, end: u64) -> Option<u64> {
        match self.blanks.front() {
            Some(&offset) if offset < end => self.blanks.pop_front(),
            _ => None,
        }
    }
}

impl<R: Read> Read for BlankLines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &byte in &buf[..n] {
            match byte {
                b'\n' => {
                    if self.line_len == 0 {
                        self.blanks.push_back(self.offset);
                    }
                    self.line_len = 0;
                }
                b'\r' => {}
                _ => self.line_len += 1,
            }
            self.offset += 1;
        }
        Ok(n)
    }
}

/// A streaming parser for RRF files.
///
/// Reads record-by-record so files are never loaded into memory whole.
/// A record with too few fields, or an empty line, yields
/// [`UmlsError::MalformedRow`] with its 1-based line number.
pub struct RrfParser<R: Read, T: RrfRecord> {
    reader: Reader<BlankLines<R>>,
    columns: T::Columns,
    source_name: String,
    row: u64,
    pending: Option<StringRecord>,
    _marker: PhantomData<T>,
}

impl<T: RrfRecord> RrfParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns [`UmlsError::FileNotFound`] if the file does not exist.
    pub fn from_path<P: AsRef<Path>>(path: P, columns: T::Columns) -> UmlsResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(UmlsError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(Self::from_reader(reader, columns, path.display().to_string()))
    }
}

impl<R: Read, T: RrfRecord> RrfParser<R, T> {
    /// Creates a new parser from a reader.
    ///
    /// `source_name` identifies the input in error messages.
    pub fn from_reader(reader: R, columns: T::Columns, source_name: impl Into<String>) -> Self {
        let csv_reader = ReaderBuilder::new()
            .delimiter(b'|')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(BlankLines::new(reader));

        Self {
            reader: csv_reader,
            columns,
            source_name: source_name.into(),
            row: 0,
            pending: None,
            _marker: PhantomData,
        }
    }

    /// Returns the 1-based line number of the last line read.
    pub fn row(&self) -> u64 {
        self.row
    }

    /// Returns the name used for this input in error messages.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    fn malformed(&self, found: usize) -> UmlsError {
        UmlsError::MalformedRow {
            file: self.source_name.clone(),
            row: self.row,
            expected: T::required_fields(&self.columns),
            found,
        }
    }
}

impl<R: Read, T: RrfRecord> Iterator for RrfParser<R, T> {
    type Item = UmlsResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.pending.take() {
            Some(record) => record,
            None => {
                let mut record = StringRecord::new();
                match self.reader.read_record(&mut record) {
                    Ok(true) => record,
                    Ok(false) => {
                        // Empty lines after the last record
                        self.reader.get_mut().blanks.pop_front()?;
                        self.row += 1;
                        return Some(Err(self.malformed(0)));
                    }
                    Err(source) => {
                        return Some(Err(UmlsError::Csv {
                            file: self.source_name.clone(),
                            source,
                        }))
                    }
                }
            }
        };

        self.row += 1;

        let end = self.reader.position().byte();
        if self.reader.get_mut().take_before(end).is_some() {
            self.pending = Some(record);
            return Some(Err(self.malformed(0)));
        }

        if record.len() < T::required_fields(&self.columns) {
            return Some(Err(self.malformed(record.len())));
        }

        Some(Ok(T::from_record(&record, &self.columns)))
    }
}

/// Returns the field at `index`, or an empty string past the end.
pub(crate) fn field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

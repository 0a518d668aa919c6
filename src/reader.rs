use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};

use crate::error::ReaderError;
use crate::parser::StreamEventParser;
use crate::record::Record;

const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Pull-based record reader over any `Read` source.
pub struct RecordReader<R> {
    reader: BufReader<R>,
    parser: StreamEventParser,
    ready: VecDeque<Record>,
    eof: bool,
}

impl<R: Read> RecordReader<R> {
    /// Creates a reader with default 8 KiB buffer.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, reader)
    }

    /// Creates a reader with specified buffer capacity.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            parser: StreamEventParser::new(),
            ready: VecDeque::new(),
            eof: false,
        }
    }

    /// Returns the next record, or `None` at EOF.
    ///
    /// A trailing record whose terminating blank line never arrives is not
    /// emitted.
    pub fn next_record(&mut self) -> Option<Result<Record, ReaderError>> {
        loop {
            if let Some(record) = self.ready.pop_front() {
                return Some(Ok(record));
            }
            if self.eof {
                return None;
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => self.eof = true,
                Ok(_) => self.ready.extend(self.parser.parse(&line)),
                Err(e) => {
                    self.eof = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

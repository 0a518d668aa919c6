use memchr::memchr;

use crate::record::Record;

#[derive(Debug, Default)]
struct Pending {
    event: Option<String>,
    data: Option<String>,
}

/// Incremental parser for line-oriented event streams.
///
/// Chunks may split lines anywhere; the unterminated tail of each chunk is
/// buffered and rejoined with the next one. One instance per stream.
#[derive(Debug, Default)]
pub struct StreamEventParser {
    buffer: String,
    pending: Pending,
}

impl StreamEventParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one chunk of stream text and returns the records it completed.
    pub fn parse(&mut self, chunk: &str) -> Vec<Record> {
        self.buffer.push_str(chunk);

        let mut records = Vec::new();
        let mut start = 0;

        while let Some(pos) = memchr(b'\n', &self.buffer.as_bytes()[start..]) {
            let line = &self.buffer[start..start + pos];
            apply_line(&mut self.pending, line, &mut records);
            start += pos + 1;
        }

        // The last segment has no terminating newline yet; it stays buffered
        // until a later chunk completes it.
        self.buffer.drain(..start);
        records
    }

    /// Discards buffered, line-incomplete input.
    ///
    /// Fields already read into the in-progress record are kept, so a record
    /// terminated after a reset still carries them.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}

fn apply_line(pending: &mut Pending, line: &str, records: &mut Vec<Record>) {
    let line = line.trim();

    if line.is_empty() {
        // A blank line terminates the pending record, but only one with data
        // in it. Empty records are never emitted.
        if pending.data.as_deref().is_some_and(|d| !d.is_empty()) {
            records.push(Record {
                event: pending.event.take(),
                data: pending.data.take(),
            });
        }
        return;
    }

    if let Some(value) = line.strip_prefix("event:") {
        pending.event = Some(value.trim().to_owned());
    } else if let Some(value) = line.strip_prefix("data:") {
        pending.data = Some(value.trim().to_owned());
    }
    // Unrecognized lines are skipped.
}

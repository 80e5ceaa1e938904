//! Trace sink printing one line per event to the output stream.

use std::io::{self, Write};

use setcover_core::{TraceEvent, TraceSink};

/// Writes each [`TraceEvent`] as a line of text.
///
/// The first write failure is kept and reported by [`WriterTrace::finish`];
/// later events are dropped.
pub(crate) struct WriterTrace<'w> {
    writer: &'w mut dyn Write,
    failure: Option<io::Error>,
}

impl<'w> WriterTrace<'w> {
    pub(crate) fn new(writer: &'w mut dyn Write) -> Self {
        Self {
            writer,
            failure: None,
        }
    }

    /// Surface the first write failure, if any.
    pub(crate) fn finish(self) -> io::Result<()> {
        self.failure.map_or(Ok(()), Err)
    }
}

impl TraceSink for WriterTrace<'_> {
    fn is_enabled(&self) -> bool {
        self.failure.is_none()
    }

    fn record(&mut self, event: TraceEvent) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{event}") {
            self.failure = Some(err);
        }
    }
}

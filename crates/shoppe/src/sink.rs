use std::io::{self, Write};

/// Where served lines end up.
#[cfg_attr(test, mockall::automock)]
pub trait OrderSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;

    /// Marks the end of one order.
    fn finish(&mut self) -> io::Result<()>;
}

/// Writes one line per call, and a blank line between orders.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OrderSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

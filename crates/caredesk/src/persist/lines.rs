//! Line-oriented record codec
//!
//! One field per line, in declared order, integers in plain decimal. A record
//! therefore spans exactly [`LineRecord::LINES`] lines.

use std::io::{self, BufRead, Write};

use crate::record::{
    BoundedText, IntakeRecord, InventoryRecord, RotationRecord, TriageRecord,
};

/// Sequential line reader that counts lines and remembers read failures.
pub struct LineCursor<'a> {
    reader: Box<dyn BufRead + 'a>,
    line_no: usize,
    failed: bool,
}

impl<'a> LineCursor<'a> {
    pub fn new(reader: impl BufRead + 'a) -> Self {
        Self {
            reader: Box::new(reader),
            line_no: 0,
            failed: false,
        }
    }

    /// Next line without its terminator, or `None` at end of input.
    ///
    /// A trailing `\r` is dropped. A read error (including invalid UTF-8)
    /// also ends the input and is remembered in [`LineCursor::failed`].
    pub fn next_line(&mut self) -> Option<String> {
        if self.failed {
            return None;
        }
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                if buf.ends_with('\n') {
                    buf.pop();
                }
                if buf.ends_with('\r') {
                    buf.pop();
                }
                Some(buf)
            }
            Err(e) => {
                tracing::debug!("Read failed after line {}: {}", self.line_no, e);
                self.failed = true;
                None
            }
        }
    }

    /// Next line as a bounded text field. Blank lines are empty values.
    pub fn text<const MAX: usize>(&mut self) -> Option<BoundedText<MAX>> {
        self.next_line().map(|line| BoundedText::new(&line))
    }

    /// Next line as a decimal integer, surrounding whitespace ignored
    pub fn integer(&mut self) -> Option<i32> {
        self.next_line()?.trim().parse().ok()
    }

    /// Number of lines consumed so far (1-based line number of the last one)
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn failed(&self) -> bool {
        self.failed
    }
}

/// A record with a fixed line layout.
pub trait LineRecord: Sized {
    /// Lines per record
    const LINES: usize;

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Rebuild a record from its already-read leading line plus the lines
    /// that follow. Returns `None` if a line is missing or an integer field
    /// does not parse.
    fn read_rest(first: &str, cursor: &mut LineCursor<'_>) -> Option<Self>;
}

impl LineRecord for IntakeRecord {
    const LINES: usize = 3;

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.id)?;
        writeln!(out, "{}", self.name)?;
        writeln!(out, "{}", self.condition)
    }

    fn read_rest(first: &str, cursor: &mut LineCursor<'_>) -> Option<Self> {
        Some(Self {
            id: BoundedText::new(first),
            name: cursor.text()?,
            condition: cursor.text()?,
        })
    }
}

impl LineRecord for InventoryRecord {
    const LINES: usize = 3;

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.kind)?;
        writeln!(out, "{}", self.quantity)?;
        writeln!(out, "{}", self.batch)
    }

    fn read_rest(first: &str, cursor: &mut LineCursor<'_>) -> Option<Self> {
        Some(Self {
            kind: BoundedText::new(first),
            quantity: cursor.integer()?,
            batch: cursor.text()?,
        })
    }
}

impl LineRecord for TriageRecord {
    const LINES: usize = 3;

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.subject)?;
        writeln!(out, "{}", self.category)?;
        writeln!(out, "{}", self.priority)
    }

    fn read_rest(first: &str, cursor: &mut LineCursor<'_>) -> Option<Self> {
        Some(Self {
            subject: BoundedText::new(first),
            category: cursor.text()?,
            priority: cursor.integer()?,
        })
    }
}

impl LineRecord for RotationRecord {
    const LINES: usize = 1;

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.tag)
    }

    fn read_rest(first: &str, _cursor: &mut LineCursor<'_>) -> Option<Self> {
        Some(Self {
            tag: BoundedText::new(first),
        })
    }
}

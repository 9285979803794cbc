use std::io::{self, Write};

/// Rendering selected for code words, fixed for a whole run. Padding words
/// render as `" 00"` in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Hex,
    Binary,
}

/// Logisim memory-image writer.
///
/// Owns the sink and the running word count: a fixed two-line header up
/// front, one space-prefixed token per appended code word, and zero-padding
/// up to the minimum image length on [`finish`](ImageWriter::finish). The
/// sink is flushed once, at the end of the run.
#[derive(Debug)]
pub struct ImageWriter<W: Write> {
    out: W,
    format: OutputFormat,
    count: usize,
}

impl<W: Write> ImageWriter<W> {
    /// Writes the format identifier line and the `0:` address prefix; code
    /// words follow on the same line as the prefix.
    pub fn new(out: W, format: OutputFormat) -> io::Result<Self> {
        let mut image = Self {
            out,
            format,
            count: 0,
        };
        writeln!(image.out, "v3.0 hex words addressed")?;
        write!(image.out, "0:")?;
        Ok(image)
    }

    /// Appends one code word to the image.
    pub fn push(&mut self, word: u8) -> io::Result<()> {
        match self.format {
            OutputFormat::Hex => write!(self.out, " {word:02x}")?,
            OutputFormat::Binary => write!(self.out, " {word:08b}")?,
        }
        self.count += 1;
        Ok(())
    }

    /// Code words appended so far; padding never counts.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Pads images shorter than 15 words up to 16 with `" 00"` tokens and a
    /// trailing newline, flushes, and hands the sink back. At 15 words or
    /// more nothing is appended: no padding and no final newline.
    pub fn finish(mut self) -> io::Result<W> {
        if self.count < 15 {
            for _ in self.count..16 {
                self.out.write_all(b" 00")?;
            }
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

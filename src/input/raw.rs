//! Byte-at-a-time line reading for input that is not a terminal.

use std::io::{BufRead, Read, Write};

use super::LineSource;
use crate::core::buffer::GrowableBuffer;
use crate::error::ShellError;

const LINE_CAPACITY: usize = 100;

pub struct RawLineReader<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> RawLineReader<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Reads up to the next `\n` into a growable buffer.
    ///
    /// A last line without a newline is still returned; `None` only comes
    /// back when nothing at all was left to read. Running out of memory is
    /// fatal for the caller.
    pub fn read_raw_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut line = GrowableBuffer::with_capacity(LINE_CAPACITY)?;
        let mut saw_input = false;

        for byte in self.input.by_ref().bytes() {
            let byte = byte?;
            saw_input = true;
            if byte == b'\n' {
                return Ok(Some(line.into_string()));
            }
            line.push(byte)?;
        }

        Ok(saw_input.then(|| line.into_string()))
    }
}

impl<R: BufRead, W: Write> LineSource for RawLineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.read_raw_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> RawLineReader<Cursor<Vec<u8>>, Vec<u8>> {
        RawLineReader::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_lines_then_eof() -> Result<(), ShellError> {
        let mut raw = reader("pushd /tmp\n\npath\n");
        assert_eq!(raw.read_raw_line()?, Some("pushd /tmp".to_string()));
        assert_eq!(raw.read_raw_line()?, Some(String::new()));
        assert_eq!(raw.read_raw_line()?, Some("path".to_string()));
        assert_eq!(raw.read_raw_line()?, None);
        Ok(())
    }

    #[test]
    fn test_unterminated_last_line() -> Result<(), ShellError> {
        let mut raw = reader("dirs");
        assert_eq!(raw.read_raw_line()?, Some("dirs".to_string()));
        assert_eq!(raw.read_raw_line()?, None);
        Ok(())
    }

    #[test]
    fn test_long_line_grows() -> Result<(), ShellError> {
        let long = "a".repeat(10_000);
        let mut raw = reader(&format!("{}\n", long));
        assert_eq!(raw.read_raw_line()?, Some(long));
        Ok(())
    }

    #[test]
    fn test_prompt_is_written() -> Result<(), ShellError> {
        let mut raw = reader("exit\n");
        let line = raw.read_line("[/tmp]: ")?;
        assert_eq!(line.as_deref(), Some("exit"));
        assert_eq!(raw.out, b"[/tmp]: ");
        Ok(())
    }
}

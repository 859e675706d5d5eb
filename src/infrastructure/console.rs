//! Console backed by a line reader and a writer

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::domain::console::{Console, ConsoleError};

/// Reads answers from `reader` and writes prompts and output to `writer`
#[derive(Debug)]
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console on the process's standard input and output
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn print(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
impl LineConsole<io::Cursor<Vec<u8>>, Vec<u8>> {
    /// Console answering with `answers`, one per line, recording all output
    pub fn scripted(answers: &[&str]) -> Self {
        let mut input = answers.join("\n");
        if !answers.is_empty() {
            input.push('\n');
        }
        Self::new(io::Cursor::new(input.into_bytes()), Vec::new())
    }

    /// Everything written so far
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut console = LineConsole::new(io::Cursor::new(b"  Ada \r\nnext\n".to_vec()), Vec::new());

        assert_eq!(console.read_line("Name: ").unwrap(), "  Ada ");
        assert_eq!(console.read_line("Next: ").unwrap(), "next");
        assert_eq!(String::from_utf8(console.into_writer()).unwrap(), "Name: Next: ");
    }

    #[test]
    fn test_read_line_at_end_of_input() {
        let mut console = LineConsole::scripted(&[]);
        assert!(matches!(console.read_line("> "), Err(ConsoleError::Closed)));
    }

    #[test]
    fn test_empty_answer_is_not_end_of_input() {
        let mut console = LineConsole::scripted(&[""]);
        assert_eq!(console.read_line("> ").unwrap(), "");
    }

    #[test]
    fn test_print() {
        let mut console = LineConsole::scripted(&[]);
        console.print("2 users read").unwrap();
        assert_eq!(console.transcript(), "2 users read\n");
    }
}

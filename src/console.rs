use std::io::{self, BufRead, Write};

use crate::errors::AppError;

/// Line-oriented terminal handle. The orchestrator only ever talks to the
/// operator through this, so tests can run it over in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Read one line, trimmed. End of input is an error: every prompt in
    /// this program blocks until a line arrives, so a closed stdin means
    /// the session is over.
    pub fn read_line(&mut self) -> Result<String, AppError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;

        if read == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }

        Ok(line.trim().to_string())
    }

    /// Print `message` without a newline, flush, then read the reply.
    pub fn prompt(&mut self, message: &str) -> Result<String, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn prompt_lowercase(&mut self, message: &str) -> Result<String, AppError> {
        Ok(self.prompt(message)?.to_lowercase())
    }
}

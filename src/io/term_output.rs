use std::fmt::{Debug, Formatter};
use std::io::Write;

use crossterm::cursor;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::io::output::Output;

pub struct TermOutput<W: Write> {
    stdout: W,
}

impl<W: Write> TermOutput<W> {
    pub fn new(stdout: W) -> Self {
        TermOutput { stdout }
    }
}

impl<W: Write> Debug for TermOutput<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[TermOutput]")
    }
}

impl<W: Write> Output for TermOutput<W> {
    fn write_line(&mut self, line: &str) -> Result<(), std::io::Error> {
        writeln!(self.stdout, "{}", line)?;
        self.stdout.flush()
    }

    fn clear(&mut self) -> Result<(), std::io::Error> {
        self.stdout.queue(Clear(ClearType::All))?.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()
    }
}

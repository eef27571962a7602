use std::io::{BufRead, Error};

use crate::io::input::Input;

pub struct TermInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> TermInput<R> {
    pub fn new(reader: R) -> Self {
        TermInput { reader }
    }
}

impl<R: BufRead> Input for TermInput<R> {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(Some(line))
    }
}

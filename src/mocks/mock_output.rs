use std::fmt::{Debug, Formatter};
use std::io::Error;

use crate::io::output::Output;

// Records everything the engine renders. clear() starts a new frame, write_line
// appends to the current one, so a frame is "what the user would see on screen".
pub struct MockOutput {
    frames: Vec<Vec<String>>,
}

impl MockOutput {
    pub fn new() -> MockOutput {
        MockOutput { frames: vec![Vec::new()] }
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> &[String] {
        self.frames.last().map(|frame| frame.as_slice()).unwrap_or(&[])
    }

    pub fn all_lines(&self) -> Vec<&str> {
        self.frames.iter().flatten().map(|line| line.as_str()).collect()
    }

    pub fn count_line(&self, line: &str) -> usize {
        self.frames.iter().flatten().filter(|l| l.as_str() == line).count()
    }

    pub fn clear_count(&self) -> usize {
        self.frames.len() - 1
    }
}

impl Debug for MockOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[MockOutput frames: {}]", self.frames.len())
    }
}

impl Output for MockOutput {
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.frames.last_mut().unwrap().push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.frames.push(Vec::new());
        Ok(())
    }
}

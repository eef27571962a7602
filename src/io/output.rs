use std::fmt::Debug;

pub trait Output: Debug {
    fn write_line(&mut self, line: &str) -> Result<(), std::io::Error>;

    fn clear(&mut self) -> Result<(), std::io::Error>;
}

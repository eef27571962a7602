use std::io::Error;

/*
Blocking side of the engine: everything else is synchronous relative to the caller.
Ok(None) means the input is exhausted, there will be no more lines.
 */
pub trait Input {
    fn read_line(&mut self) -> Result<Option<String>, Error>;
}

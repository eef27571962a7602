use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::io::input::Input;

/*
Scripted input for tests: lines are "typed" by pushing them into the sender, dropping
the sender acts like closing stdin. Everything runs on one thread, so push the lines
before starting a navigation loop or read_line will block forever.
 */
pub struct MockInput {
    receiver: Receiver<String>,
}

impl MockInput {
    pub fn new() -> (MockInput, Sender<String>) {
        let (sender, receiver) = unbounded::<String>();

        (MockInput { receiver }, sender)
    }
}

impl Input for MockInput {
    fn read_line(&mut self) -> Result<Option<String>, std::io::Error> {
        Ok(self.receiver.recv().ok())
    }
}

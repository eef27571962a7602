use std::rc::Rc;

use log::debug;

use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::item::{Item, PickResult};

// Item that executes a procedure passed in the constructor, for its side effect only.
pub struct ActionItem {
    label: String,
    action: Box<dyn Fn()>,
}

impl ActionItem {
    pub fn new(label: impl Into<String>, action: impl Fn() + 'static) -> Self {
        ActionItem {
            label: label.into(),
            action: Box::new(action),
        }
    }
}

impl Item for ActionItem {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn pick(self: Rc<Self>, _input: &mut dyn Input, _output: &mut dyn Output) -> PickResult {
        debug!("running action \"{}\"", self.label);
        (self.action)();
        Ok(None)
    }
}

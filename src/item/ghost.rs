use std::rc::Rc;

use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::item::{Item, PickResult};

// Item that exists in a menu but never resolves. Picking it changes nothing.
pub struct GhostItem {
    label: String,
}

impl GhostItem {
    pub fn new(label: impl Into<String>) -> Self {
        GhostItem { label: label.into() }
    }
}

impl Item for GhostItem {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn pick(self: Rc<Self>, _input: &mut dyn Input, _output: &mut dyn Output) -> PickResult {
        Ok(None)
    }
}

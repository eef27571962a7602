use std::any::Any;
use std::rc::Rc;

use log::debug;

use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::item::{Item, PickResult, PickedValue};

// Item that runs a zero-argument function and resolves to its result. The function is
// invoked on every pick, results are never cached.
pub struct ProducerItem<R: Any> {
    label: String,
    producer: Box<dyn Fn() -> R>,
}

impl<R: Any> ProducerItem<R> {
    pub fn new(label: impl Into<String>, producer: impl Fn() -> R + 'static) -> Self {
        ProducerItem {
            label: label.into(),
            producer: Box::new(producer),
        }
    }
}

impl<R: Any> Item for ProducerItem<R> {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn pick(self: Rc<Self>, _input: &mut dyn Input, _output: &mut dyn Output) -> PickResult {
        debug!("invoking producer \"{}\"", self.label);
        Ok(PickedValue::some((self.producer)()))
    }
}

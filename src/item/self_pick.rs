use std::any::Any;
use std::rc::Rc;

use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::item::{Item, PickResult, PickedValue};

/*
Implementing this is enough to make a type usable as a menu entry that resolves to
itself. Such items carry no stored label, they render one from their own state.

Picking yields the Rc handle the item is stored under, so identity survives the trip:
downcast to Rc<TheType> and you hold the same object the menu does.
 */
pub trait SelfPicking: Any {
    fn label(&self) -> String;
}

impl<T: SelfPicking> Item for T {
    fn label(&self) -> String {
        SelfPicking::label(self)
    }

    fn pick(self: Rc<Self>, _input: &mut dyn Input, _output: &mut dyn Output) -> PickResult {
        Ok(PickedValue::some(self))
    }
}

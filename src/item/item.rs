use std::any::{self, Any};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::pick_error::PickError;

pub type ItemRef = Rc<dyn Item>;

/*
Resolving an item has three outcomes:
- Ok(Some(value)) - the item produced a value,
- Ok(None) - the item had nothing to offer (a ghost, an action, a cancelled menu),
- Err - a fault that must reach the caller.

Menus loop on Ok(None), so "no result" is a first class citizen here, not a magic
zero value of the payload type.
 */
pub type PickResult = Result<Option<PickedValue>, PickError>;

// Type-erased payload of a resolved pick. Remembers the name of the type it was built
// with, so a mismatched downcast can name both sides of the disagreement.
pub struct PickedValue {
    value: Box<dyn Any>,
    typename: &'static str,
}

impl PickedValue {
    pub fn new<T: Any>(value: T) -> Self {
        PickedValue {
            value: Box::new(value),
            typename: any::type_name::<T>(),
        }
    }

    pub fn some<T: Any>(value: T) -> Option<PickedValue> {
        Some(Self::new(value))
    }

    pub fn typename(&self) -> &'static str {
        self.typename
    }

    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    pub fn downcast<T: Any>(self) -> Result<T, PickError> {
        let found = self.typename;
        self.value.downcast::<T>().map(|boxed| *boxed).map_err(|_| PickError::TypeMismatch {
            expected: any::type_name::<T>(),
            found,
        })
    }
}

impl Debug for PickedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PickedValue({})", self.typename)
    }
}

pub trait Item {
    fn label(&self) -> String;

    /*
    The Rc receiver is deliberate: items are shared-ownership handles (the same item may
    sit in several menus), and self-selecting items resolve to the very handle they are
    stored under.
     */
    fn pick(self: Rc<Self>, input: &mut dyn Input, output: &mut dyn Output) -> PickResult;

    fn to_item(self) -> ItemRef
    where
        Self: Sized + 'static,
    {
        Rc::new(self)
    }
}

impl Debug for dyn Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item(\"{}\")", self.label())
    }
}

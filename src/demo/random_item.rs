use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::Rng;

use crate::item::self_pick::SelfPicking;

// One generator shared by everything in the demo, passed around explicitly.
pub type RngRef = Rc<RefCell<StdRng>>;

// Demo payload: holds a number drawn at construction time. Picking it from a menu
// resolves to the container itself, not to the number.
pub struct RandomNumberContainer {
    number: u32,
}

impl RandomNumberContainer {
    pub fn new(rng: &RngRef) -> Self {
        RandomNumberContainer {
            number: rng.borrow_mut().gen_range(0..100),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl SelfPicking for RandomNumberContainer {
    fn label(&self) -> String {
        format!("Random number container containing: {}", self.number)
    }
}

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::config::config::ConfigRef;
use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::item::{Item, ItemRef, PickResult};
use crate::item::pick_error::PickError;

/*
Menu that lets the user pick an item, while being an item itself to allow for nesting.

Cancelling a nested menu cancels only that menu: the enclosing one sees Ok(None),
shrugs and asks again. A menu ends on its own exit marker, or on the first entry
that actually resolves.
 */
pub struct Menu {
    title: String,
    // RefCell so a menu already shared as Rc<dyn Item> can still grow between
    // navigation sessions. The borrow is never held across a nested pick.
    options: RefCell<Vec<ItemRef>>,
    config: ConfigRef,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Menu {
        Menu {
            title: title.into(),
            options: RefCell::new(Vec::new()),
            config: ConfigRef::default(),
        }
    }

    pub fn with_options(title: impl Into<String>, options: Vec<ItemRef>) -> Menu {
        Menu {
            title: title.into(),
            options: RefCell::new(options),
            config: ConfigRef::default(),
        }
    }

    pub fn with_config(self, config: ConfigRef) -> Self {
        Menu { config, ..self }
    }

    // Display order is insertion order, duplicates are allowed.
    pub fn add_option(&self, option: ItemRef) {
        self.options.borrow_mut().push(option);
    }

    pub fn len_options(&self) -> usize {
        self.options.borrow().len()
    }

    fn render(&self, output: &mut dyn Output) -> Result<(), PickError> {
        if self.config.clear_before_render {
            output.clear()?;
        }
        output.write_line(&self.title)?;
        for (idx, option) in self.options.borrow().iter().enumerate() {
            output.write_line(&format!(" [{}] {}", idx, option.label()))?;
        }
        output.write_line(&format!(" [{}] {}", self.config.exit_marker, self.config.exit_label))?;
        Ok(())
    }

    /*
    Typed boundary over pick. Asking for a type the resolved item did not produce is a
    wiring bug in the menu tree, and comes back as PickError::TypeMismatch - it is not
    retried the way bad user input is.
     */
    pub fn pick_value<R: Any>(
        self: Rc<Self>,
        input: &mut dyn Input,
        output: &mut dyn Output,
    ) -> Result<Option<R>, PickError> {
        match self.pick(input, output)? {
            Some(value) => Ok(Some(value.downcast::<R>()?)),
            None => Ok(None),
        }
    }

    // Entry point for a top level menu, where nobody cares about the final value.
    pub fn start(self: Rc<Self>, input: &mut dyn Input, output: &mut dyn Output) -> Result<(), PickError> {
        self.pick(input, output).map(|_| ())
    }
}

impl Item for Menu {
    fn label(&self) -> String {
        self.title.clone()
    }

    fn pick(self: Rc<Self>, input: &mut dyn Input, output: &mut dyn Output) -> PickResult {
        loop {
            self.render(output)?;

            let line = match input.read_line()? {
                Some(line) => line,
                None => {
                    // input dried up - same as an explicit exit, otherwise we'd spin forever
                    debug!("end of input in menu \"{}\"", self.title);
                    return Ok(None);
                }
            };
            let line = line.trim();

            if line == self.config.exit_marker {
                debug!("menu \"{}\" cancelled", self.title);
                return Ok(None);
            }

            // the options borrow ends here, before the nested pick runs
            let selected = match line.parse::<usize>() {
                Ok(idx) => self.options.borrow().get(idx).cloned(),
                Err(_) => None,
            };

            let selected = match selected {
                Some(item) => item,
                None => {
                    warn!("invalid selection \"{}\" in menu \"{}\"", line, self.title);
                    output.write_line(&self.config.invalid_option_notice)?;
                    continue;
                }
            };

            debug!("menu \"{}\" dispatching to \"{}\"", self.title, selected.label());
            match selected.pick(input, output)? {
                Some(value) => return Ok(Some(value)),
                // the entry had nothing to offer (ghost, action, cancelled submenu) - ask again
                None => continue,
            }
        }
    }
}

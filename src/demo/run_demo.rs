use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use rand::Rng;

use crate::config::config::ConfigRef;
use crate::demo::random_item::{RandomNumberContainer, RngRef};
use crate::io::input::Input;
use crate::io::output::Output;
use crate::item::action::ActionItem;
use crate::item::ghost::GhostItem;
use crate::item::item::{Item, ItemRef};
use crate::item::menu::Menu;
use crate::item::pick_error::PickError;
use crate::item::producer::ProducerItem;

// Builds the sample tree and hands control to the root menu until the user exits it.
pub fn run_demo(
    config: ConfigRef,
    rng: RngRef,
    input: &mut dyn Input,
    output: &mut dyn Output,
) -> Result<(), PickError> {
    // pool of test objects, shared between the menus and the closures below
    let containers: Rc<RefCell<Vec<Rc<RandomNumberContainer>>>> = Rc::new(RefCell::new(Vec::new()));
    for _ in 0..10 {
        let container = Rc::new(RandomNumberContainer::new(&rng));
        containers.borrow_mut().push(container);
    }

    // the same two items appear in both submenus on purpose
    let option_a: ItemRef = GhostItem::new("Its all").to_item();
    let option_b: ItemRef = GhostItem::new("The same").to_item();

    let menu_a = Rc::new(Menu::new("Ghost options A").with_config(config.clone()));
    menu_a.add_option(option_a.clone());
    menu_a.add_option(option_b.clone());

    let menu_b = Rc::new(Menu::new("Ghost options B").with_config(config.clone()));
    menu_b.add_option(option_a);
    menu_b.add_option(option_b);

    let add_container = {
        let containers = containers.clone();
        let rng = rng.clone();
        ActionItem::new("Add randomNumberContainer", move || {
            let container = Rc::new(RandomNumberContainer::new(&rng));
            containers.borrow_mut().push(container);
        })
    };

    let choose_container = {
        let containers = containers.clone();
        let rng = rng.clone();
        ProducerItem::new("choose randomNumberContainer", move || {
            let containers = containers.borrow();
            let idx = rng.borrow_mut().gen_range(0..containers.len());
            containers[idx].clone()
        })
    };

    let pool: Vec<ItemRef> = containers.borrow().iter().map(|c| c.clone() as ItemRef).collect();
    let choose_menu = Rc::new(Menu::with_options("Choose: ", pool).with_config(config.clone()));
    choose_menu.add_option(choose_container.to_item());
    choose_menu.add_option(add_container.to_item());

    let main_menu = Rc::new(Menu::new("Main menu").with_config(config));
    main_menu.add_option(menu_a);
    main_menu.add_option(menu_b);
    main_menu.add_option(choose_menu);

    info!("starting the demo menu");
    main_menu.start(input, output)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::config::MenuConfig;
    use crate::mocks::mock_input::MockInput;
    use crate::mocks::mock_output::MockOutput;

    #[test]
    fn test_demo_tree_walk() {
        let (mut input, sender) = MockInput::new();
        let mut output = MockOutput::new();
        let config = Arc::new(MenuConfig::default());
        let rng: RngRef = Rc::new(RefCell::new(StdRng::seed_from_u64(42)));

        // into A, cancel it, into B, cancel it, exit
        for line in ["0", "x", "1", "x", "x"] {
            sender.send(line.to_string()).unwrap();
        }

        run_demo(config, rng, &mut input, &mut output).unwrap();

        assert_eq!(output.count_line("Main menu"), 3);
        assert_eq!(output.count_line("Ghost options A"), 1);
        assert_eq!(output.count_line("Ghost options B"), 1);
        assert_eq!(output.count_line(" [0] Its all"), 2);
    }

    #[test]
    fn test_choose_menu_resolves_a_container() {
        let (mut input, sender) = MockInput::new();
        let mut output = MockOutput::new();
        let config = Arc::new(MenuConfig::default());
        let rng: RngRef = Rc::new(RefCell::new(StdRng::seed_from_u64(42)));

        // into the choose menu, then the producer sitting after ten containers - its
        // resolution closes the choose menu and the main menu alike
        for line in ["2", "10"] {
            sender.send(line.to_string()).unwrap();
        }

        run_demo(config, rng, &mut input, &mut output).unwrap();

        assert_eq!(output.count_line("Main menu"), 1);
        assert_eq!(output.count_line("Choose: "), 1);
    }
}

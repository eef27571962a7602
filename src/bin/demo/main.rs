use std::cell::RefCell;
use std::io::{stdin, stdout};
use std::process::exit;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use log::error;
use rand::rngs::StdRng;
use rand::SeedableRng;

use textmenu::config::config::MenuConfig;
use textmenu::demo::args::Args;
use textmenu::demo::logger_setup::logger_setup;
use textmenu::demo::random_item::RngRef;
use textmenu::demo::run_demo::run_demo;
use textmenu::io::term_input::TermInput;
use textmenu::io::term_output::TermOutput;

fn main() {
    let args = Args::parse();
    let _logger = logger_setup(args.stderr_log, args.file_log.as_deref());

    let config = Arc::new(MenuConfig::load_or_create_default(&args.config_path()));

    let stdin = stdin();
    let mut input = TermInput::new(stdin.lock());
    let mut output = TermOutput::new(stdout());

    let rng: RngRef = Rc::new(RefCell::new(StdRng::from_entropy()));

    match run_demo(config, rng, &mut input, &mut output) {
        Ok(()) => {}
        Err(e) => {
            error!("menu failed: {}", e);
            exit(1);
        }
    }
}

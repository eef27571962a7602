pub mod input;
pub mod output;
pub mod term_input;
pub mod term_output;

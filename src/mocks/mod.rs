pub mod mock_input;
pub mod mock_output;

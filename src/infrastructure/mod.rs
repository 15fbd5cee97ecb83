pub mod generator;
pub mod prompt;
pub mod session_file;
pub mod ui;

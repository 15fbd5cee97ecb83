pub mod generate;
pub mod port;

pub mod animal;
pub mod board;
pub mod display;
pub mod error;
pub mod input;
pub mod legend;
pub mod parser;
pub mod types;

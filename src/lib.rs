pub mod board;
pub mod cli;
pub mod core;
pub mod input;
pub mod rendering;
pub mod states;
pub mod ui;

pub mod command;
pub mod config;
pub mod display;
pub mod errors;
pub mod runner;
pub mod types;

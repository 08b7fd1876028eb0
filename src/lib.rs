// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod game;
pub mod progress;
pub mod prompt;
pub mod scrape;
pub mod store;

pub use error::{Error, Result};

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod fetch;
pub mod file;
pub mod lookup;
pub mod progress;
pub mod report;
pub mod words;

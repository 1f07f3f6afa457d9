// src/core/mod.rs

pub mod extract;
pub mod markup;
pub mod net;
pub mod sanitize;
pub mod scan;

pub use extract::{extract_entry, WordEntry, NO_DEFINITION};

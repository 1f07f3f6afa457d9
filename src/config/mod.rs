// src/config/mod.rs

pub mod consts;
pub mod delimiters;
pub mod options;

pub use delimiters::DelimiterSpec;

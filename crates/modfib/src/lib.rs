//! modfib library — application logic for the orbit enumerator.

pub mod app;
pub mod config;
pub mod errors;

pub mod config;
pub mod lead;

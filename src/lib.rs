pub mod aggregate;
pub mod config;
pub mod display;
pub mod errors;
pub mod parse;
pub mod run;
pub mod types;

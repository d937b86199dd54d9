mod term;

pub mod cmd;
pub mod config;
pub mod forge;
pub mod values;

pub use term::{error, logger};

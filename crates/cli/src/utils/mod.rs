pub mod build;
pub mod runlog;

pub mod error;
pub mod flags;
pub mod report;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod process;

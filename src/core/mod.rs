pub mod buffer;
pub mod commands;
pub mod config;
pub mod dirstack;
pub mod env;
pub mod search_path;
pub mod state;
pub mod tokenizer;

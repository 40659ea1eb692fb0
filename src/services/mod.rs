// src/services/mod.rs
pub mod completion;
pub mod interpreter;
pub mod listing_store;
pub mod prompt_builder;

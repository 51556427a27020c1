//! Core modules: the folder model, the store and its matching rules, and the
//! data-source, configuration and rendering glue around them.

pub mod config;
pub mod error;
pub mod folder;
pub mod matching;
pub mod output;
pub mod sample;
pub mod store;

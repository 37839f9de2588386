pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod render;
pub mod runner;
pub mod templates;

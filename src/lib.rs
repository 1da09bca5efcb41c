pub mod commands;
pub mod config;
pub mod feedback;
pub mod input;
pub mod llm;
pub mod logging;
pub mod outcome;
pub mod quiz;
pub mod utils;

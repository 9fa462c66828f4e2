pub mod automaton;
pub mod config;
pub mod logger;
pub mod utils;
pub mod validation;

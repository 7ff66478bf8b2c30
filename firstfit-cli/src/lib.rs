//! ## firstfit-cli
//! **Text command surface for the first-fit arena**
//!
//! Parses `INIT`, `ALLOC`, `FREE`, `INSPECT`, `STATS`, `METRICS`, `HELP` and
//! `EXIT` lines, applies them to one arena and prints the resulting memory
//! map.

pub mod cli;
pub mod commands;
pub mod interpreter;
pub mod render;

pub use cli::Cli;
pub use commands::{parse_command, Command, CommandError};
pub use interpreter::{Flow, Interpreter};

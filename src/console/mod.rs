//! Console module
//!
//! Interactive line-based front end: command parsing and the prompt
//! loop.

pub mod command;
pub mod core;

pub use command::{ConsoleCommand, parse_command};
pub use core::Console;

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod network;
pub mod parser;
pub mod passcode;
pub mod proctor;
pub mod session;
pub mod source;
pub mod state;
pub mod submit;
pub mod tui;
pub mod ui;

pub use error::{Error, Result};

//! Internal unit tests, grouped by module.

mod config;
mod error;
mod io;
mod reader;
mod session;

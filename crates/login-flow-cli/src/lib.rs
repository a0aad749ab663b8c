//! Library surface of the `login-flow` binary, exposed for integration tests.

pub mod commands;
pub mod error;
pub mod i18n;
pub mod tui;
pub mod utils;

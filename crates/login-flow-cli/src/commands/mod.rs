//! CLI command implementations.

mod common;
mod lang;
mod run;
mod validate;

pub use common::{Context, GlobalArgs};
pub use lang::{LangArgs, LangCommand, run_lang};
pub use run::{RunArgs, run_tui};
pub use validate::{ValidateArgs, run_validate};

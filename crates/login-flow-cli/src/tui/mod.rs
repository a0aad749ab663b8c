//! Terminal UI for the login and sign-up screens.

mod app;
mod keymap;
mod runtime;

pub use app::draw;
pub use keymap::map_key;
pub use runtime::{Runtime, run};

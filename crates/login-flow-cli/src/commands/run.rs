//! Default command: the interactive login screens.

use crate::commands::{Context, GlobalArgs};
use crate::error::CliError;
use crate::tui;
use crate::utils::ui::{self, LogTarget};
use clap::Args;
use login_flow::screen::ValidationMode;

#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Re-check fields while typing once the form has been submitted
    #[arg(long)]
    pub live: bool,
}

pub fn run_tui(args: RunArgs, global: &GlobalArgs) -> Result<(), CliError> {
    let context = Context::load(global)?;

    let log_file = context.config.log_file_path();
    match log_file.as_deref() {
        Some(path) => ui::init_logging(global.verbose, LogTarget::File(path)),
        None => ui::init_logging(global.verbose, LogTarget::Discard),
    }

    let mode = if args.live {
        ValidationMode::Live
    } else {
        context.config.validation
    };

    tui::run(&context, mode)
}

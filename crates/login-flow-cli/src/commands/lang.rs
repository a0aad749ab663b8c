//! `lang` command: inspect and change the stored language.

use crate::commands::{Context, GlobalArgs};
use crate::error::CliError;
use crate::utils::ui;
use clap::{Args, Subcommand};
use login_flow::{LANGUAGES, LocaleStore as _, code_to_label, parse_language};

#[derive(Debug, Args)]
pub struct LangArgs {
    #[command(subcommand)]
    pub command: LangCommand,
}

#[derive(Debug, Subcommand)]
pub enum LangCommand {
    /// Print the stored language, or the fallback when none is stored
    Get,
    /// Store a language given as a tag (hi) or a label (हिंदी)
    Set { language: String },
    /// List the supported languages, marking the current one
    List,
}

pub fn run_lang(args: LangArgs, global: &GlobalArgs) -> Result<(), CliError> {
    let context = Context::load(global)?;

    match args.command {
        LangCommand::Get => {
            let code = context.current_language();
            println!("{}\t{}", code, code_to_label(code));
        },
        LangCommand::Set { language } => {
            let code = parse_language(&language)?;
            context.store().set(code)?;
            tracing::debug!(
                "Stored '{}' in {}",
                code,
                context.preferences_path.display()
            );
            ui::print_ok(&format!("Language set to {} ({})", code_to_label(code), code));
        },
        LangCommand::List => {
            let current = context.current_language();
            for entry in &LANGUAGES {
                ui::print_language(entry.code == current, entry.tag, entry.label);
            }
        },
    }

    Ok(())
}

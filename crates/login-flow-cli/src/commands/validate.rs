//! `validate` command: run the login form checks without the interactive screen.

use crate::commands::{Context, GlobalArgs};
use crate::error::CliError;
use crate::utils::ui;
use clap::Args;
use login_flow::{MessageId, parse_language, validate_email, validate_password};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Email address to check
    #[arg(long, default_value = "")]
    pub email: String,

    /// Password to check
    #[arg(long, default_value = "")]
    pub password: String,

    /// Language for the messages (defaults to the stored language)
    #[arg(long)]
    pub lang: Option<String>,
}

pub fn run_validate(args: ValidateArgs, global: &GlobalArgs) -> Result<(), CliError> {
    let context = Context::load(global)?;
    let code = match args.lang.as_deref() {
        Some(lang) => parse_language(lang)?,
        None => context.current_language(),
    };

    let translator = context.translator()?;
    translator.apply(code);

    let failures: Vec<_> = [
        (MessageId::Email, validate_email(&args.email)),
        (MessageId::Password, validate_password(&args.password)),
    ]
    .into_iter()
    .filter_map(|(field, error)| error.map(|error| (field, error)))
    .collect();

    if failures.is_empty() {
        ui::print_ok(&translator.text(MessageId::LoginSuccess));
        return Ok(());
    }

    for (field, error) in &failures {
        ui::print_field_error(&translator.text(*field), &translator.error(*error));
    }

    Err(CliError::ValidationFailed {
        count: failures.len(),
    })
}

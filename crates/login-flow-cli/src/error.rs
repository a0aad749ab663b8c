//! CLI error types using miette for diagnostics.

use login_flow::{StoreError, UnknownLanguage};
use login_flow_i18n::LocalizationError;
use login_flow_toml::ConfigError;
use miette::Diagnostic;
use std::io;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(
        code(login_flow::config),
        help(
            "login-flow.toml accepts:\n\n  \
              fallback_language = \"en\"\n  \
              preferences_path = \".login-flow/preferences.toml\"\n  \
              validation = \"on-submit\"\n  \
              log_file = \"login-flow.log\"\n"
        )
    )]
    Config(#[from] ConfigError),

    #[error("failed to save the language preference")]
    #[diagnostic(
        code(login_flow::store),
        help("Check that the preferences path is writable, or pass --preferences <file>")
    )]
    Store(#[from] StoreError),

    #[error(transparent)]
    #[diagnostic(
        code(login_flow::language),
        help("Use a tag (en, hi, pa, ta) or a label as shown by `login-flow lang list`")
    )]
    UnknownLanguage(#[from] UnknownLanguage),

    #[error(transparent)]
    #[diagnostic(code(login_flow::i18n))]
    Localization(#[from] LocalizationError),

    #[error("terminal I/O failed")]
    #[diagnostic(code(login_flow::terminal))]
    Terminal(#[from] io::Error),

    #[error("{count} field(s) failed validation")]
    #[diagnostic(code(login_flow::validate::failed))]
    ValidationFailed { count: usize },
}

use crate::error::CliError;
use crate::i18n::Translator;
use clap::Args;
use login_flow::{FileLocaleStore, LanguageCode, LocaleStore as _};
use login_flow_toml::AppConfig;
use std::path::{Path, PathBuf};

/// Options accepted by every command.
#[derive(Clone, Debug, Default, Args)]
pub struct GlobalArgs {
    /// Path to the configuration file (defaults to ./login-flow.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the preferences file (overrides the config and LOGIN_FLOW_PREFERENCES)
    #[arg(short, long, global = true)]
    pub preferences: Option<PathBuf>,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Configuration and paths resolved once per invocation.
#[derive(Debug)]
pub struct Context {
    pub config: AppConfig,
    pub fallback: LanguageCode,
    pub preferences_path: PathBuf,
}

impl Context {
    pub fn load(args: &GlobalArgs) -> Result<Self, CliError> {
        let config = AppConfig::load(args.config.as_deref(), Path::new("."))?;
        let fallback = config.fallback_language_code()?;
        let preferences_path = config.preferences_path(args.preferences.as_deref());
        tracing::debug!("Preferences file: {}", preferences_path.display());

        Ok(Self {
            config,
            fallback,
            preferences_path,
        })
    }

    pub fn store(&self) -> FileLocaleStore {
        FileLocaleStore::new(&self.preferences_path)
    }

    /// The stored language, or the configured fallback when nothing is stored.
    pub fn current_language(&self) -> LanguageCode {
        self.store().get().unwrap_or(self.fallback)
    }

    /// A translator starting in the configured fallback language.
    pub fn translator(&self) -> Result<Translator, CliError> {
        Ok(Translator::new(self.fallback)?)
    }
}

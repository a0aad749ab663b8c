//! Translated text for the screens and commands.

use fluent_bundle::FluentValue;
use login_flow::validate::MIN_PASSWORD_LEN;
use login_flow::{LanguageCode, MessageId, ValidationError};
use login_flow_i18n::{LocalizationError, Localizer};
use std::collections::HashMap;

pub struct Translator {
    localizer: Localizer,
}

impl Translator {
    /// Starts in `initial`. Messages missing from any language come from English.
    pub fn new(initial: LanguageCode) -> Result<Self, LocalizationError> {
        let localizer = Localizer::new(&LanguageCode::default().language_identifier())?;
        let translator = Self { localizer };
        translator.apply(initial);
        Ok(translator)
    }

    /// Switches the active language. Unsupported languages keep the current one.
    pub fn apply(&self, code: LanguageCode) {
        if let Err(err) = self.localizer.select_language(&code.language_identifier()) {
            tracing::warn!("Keeping current translations: {}", err);
        }
    }

    pub fn text(&self, id: MessageId) -> String {
        let mut args = HashMap::new();
        if id == MessageId::PasswordMinLength {
            args.insert("min", FluentValue::from(MIN_PASSWORD_LEN));
        }
        self.localizer.localize_or_id(id.id(), Some(&args))
    }

    pub fn error(&self, error: ValidationError) -> String {
        self.text(error.message_id())
    }
}

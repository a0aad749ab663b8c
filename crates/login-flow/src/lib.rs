#![doc = include_str!("../README.md")]

pub mod locale;
pub mod message;
pub mod screen;
pub mod store;
pub mod validate;
pub mod worker;

pub use locale::{
    LANGUAGES, LanguageCode, LanguageEntry, LanguageLabel, UnknownLanguage, code_to_label,
    label_to_code, parse_language,
};
pub use message::MessageId;
pub use store::{FileLocaleStore, LocaleStore, MemoryLocaleStore, PREFERENCE_KEY, StoreError};
pub use validate::{ValidationError, validate_email, validate_password};
pub use worker::{PreferenceEvent, PreferenceWorker};

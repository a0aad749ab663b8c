//! Screen controllers.
//!
//! Every screen is a value: `update` consumes the current snapshot together
//! with a message and returns the next snapshot plus the [`Effect`]s the
//! runtime has to carry out. Nothing here performs I/O.

mod app;
mod login;
mod selector;
mod signup;

pub use app::{App, Msg};
pub use login::{LoginFocus, LoginMsg, LoginScreen};
pub use selector::{LanguageSelector, SelectorMsg};
pub use signup::{SignUpFocus, SignUpMsg, SignUpScreen};

use crate::locale::LanguageCode;
use crate::message::MessageId;
use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};

/// A named screen in the navigation stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Login,
    SignUp,
}

/// A modal message shown on top of the current screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Notice {
    LoginSuccess,
    SignUpSuccess,
    PreferenceNotSaved,
}

impl Notice {
    pub fn message_id(self) -> MessageId {
        match self {
            Notice::LoginSuccess => MessageId::LoginSuccess,
            Notice::SignUpSuccess => MessageId::SignUpSuccess,
            Notice::PreferenceNotSaved => MessageId::PreferenceNotSaved,
        }
    }

    pub fn is_warning(self) -> bool {
        matches!(self, Notice::PreferenceNotSaved)
    }
}

/// Work requested by a controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    /// Read the stored language preference.
    LoadLanguage,
    /// Write the language preference.
    PersistLanguage(LanguageCode),
    /// Switch the active translations.
    ApplyLanguage(LanguageCode),
    Navigate(Route),
    Back,
    Notify(Notice),
    Quit,
}

/// The next snapshot of a controller and the effects it produced.
#[derive(Debug)]
pub struct Transition<S> {
    pub state: S,
    pub effects: Vec<Effect>,
}

impl<S> Transition<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with(state: S, effects: impl IntoIterator<Item = Effect>) -> Self {
        Self {
            state,
            effects: effects.into_iter().collect(),
        }
    }
}

/// When field errors are recomputed.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Only when the form is submitted.
    #[default]
    OnSubmit,
    /// Also on every edit, once the form has been submitted at least once.
    Live,
}

/// A single text input and its current validation status.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormField {
    value: String,
    error: Option<ValidationError>,
}

impl FormField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub(crate) fn push(&mut self, ch: char) {
        self.value.push(ch);
    }

    pub(crate) fn pop(&mut self) {
        self.value.pop();
    }

    pub(crate) fn check(&mut self, validator: impl FnOnce(&str) -> Option<ValidationError>) {
        self.error = validator(&self.value);
    }
}

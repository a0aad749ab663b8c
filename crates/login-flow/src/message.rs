//! Identifiers of every translated string shown by the screens.

use strum::{EnumIter, IntoStaticStr};

/// A Fluent message id. The kebab-case variant name is the id in the `.ftl` files.
#[derive(Clone, Copy, Debug, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum MessageId {
    Welcome,
    SignInHeadline,
    Email,
    Password,
    EmailRequired,
    InvalidEmail,
    PasswordRequired,
    PasswordMinLength,
    LoginSuccess,
    ForgotPassword,
    Login,
    CreateNewUser,
    SignUpHeadline,
    Name,
    ConfirmPassword,
    NameRequired,
    ConfirmPasswordRequired,
    PasswordMismatch,
    SignUp,
    SignUpSuccess,
    AlreadyHaveAccount,
    SelectLanguage,
    PreferenceNotSaved,
    KeyHints,
}

impl MessageId {
    pub fn id(self) -> &'static str {
        self.into()
    }
}

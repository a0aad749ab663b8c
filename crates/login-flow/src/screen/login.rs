use super::{Effect, FormField, Notice, Route, Transition, ValidationMode};
use crate::validate::{validate_email, validate_password};

/// Focusable elements of the login screen, in tab order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoginFocus {
    Language,
    #[default]
    Email,
    Password,
    Submit,
    CreateAccount,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 5] = [
        LoginFocus::Language,
        LoginFocus::Email,
        LoginFocus::Password,
        LoginFocus::Submit,
        LoginFocus::CreateAccount,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoginMsg {
    /// Replaces the value of the email field.
    EmailChanged(String),
    /// Replaces the value of the password field.
    PasswordChanged(String),
    /// Appends a character to the focused field.
    Input(char),
    /// Removes the last character of the focused field.
    Backspace,
    Focus(LoginFocus),
    FocusNext,
    FocusPrev,
    Submit,
    CreateAccount,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginScreen {
    email: FormField,
    password: FormField,
    focus: LoginFocus,
    submitted: bool,
    mode: ValidationMode,
}

impl LoginScreen {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn email(&self) -> &FormField {
        &self.email
    }

    pub fn password(&self) -> &FormField {
        &self.password
    }

    pub fn focus(&self) -> LoginFocus {
        self.focus
    }

    pub fn update(mut self, msg: LoginMsg) -> Transition<Self> {
        match msg {
            LoginMsg::EmailChanged(value) => {
                self.email.set_value(value);
                self.revalidate_email();
            },
            LoginMsg::PasswordChanged(value) => {
                self.password.set_value(value);
                self.revalidate_password();
            },
            LoginMsg::Input(ch) => match self.focus {
                LoginFocus::Email => {
                    self.email.push(ch);
                    self.revalidate_email();
                },
                LoginFocus::Password => {
                    self.password.push(ch);
                    self.revalidate_password();
                },
                _ => {},
            },
            LoginMsg::Backspace => match self.focus {
                LoginFocus::Email => {
                    self.email.pop();
                    self.revalidate_email();
                },
                LoginFocus::Password => {
                    self.password.pop();
                    self.revalidate_password();
                },
                _ => {},
            },
            LoginMsg::Focus(focus) => self.focus = focus,
            LoginMsg::FocusNext => self.focus = self.focus.next(),
            LoginMsg::FocusPrev => self.focus = self.focus.prev(),
            LoginMsg::Submit => return self.submit(),
            LoginMsg::CreateAccount => {
                return Transition::with(self, [Effect::Navigate(Route::SignUp)]);
            },
        }
        Transition::new(self)
    }

    fn submit(mut self) -> Transition<Self> {
        self.email.check(validate_email);
        self.password.check(validate_password);
        self.submitted = true;

        if self.email.error().is_some() || self.password.error().is_some() {
            tracing::debug!(
                email_error = ?self.email.error(),
                password_error = ?self.password.error(),
                "Login form rejected"
            );
            return Transition::new(self);
        }

        tracing::info!("Login form accepted");
        // Credentials are dropped here; the login itself is simulated.
        let state = Self::new(self.mode);
        Transition::with(state, [Effect::Notify(Notice::LoginSuccess)])
    }

    fn revalidate_email(&mut self) {
        if self.live() {
            self.email.check(validate_email);
        }
    }

    fn revalidate_password(&mut self) {
        if self.live() {
            self.password.check(validate_password);
        }
    }

    fn live(&self) -> bool {
        self.mode == ValidationMode::Live && self.submitted
    }
}

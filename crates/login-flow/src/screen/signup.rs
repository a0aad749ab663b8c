use super::{Effect, FormField, Notice, Transition, ValidationMode};
use crate::validate::{validate_confirmation, validate_email, validate_name, validate_password};

/// Focusable elements of the sign-up screen, in tab order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SignUpFocus {
    Language,
    #[default]
    Name,
    Email,
    Password,
    ConfirmPassword,
    Submit,
    BackToLogin,
}

impl SignUpFocus {
    const ORDER: [SignUpFocus; 7] = [
        SignUpFocus::Language,
        SignUpFocus::Name,
        SignUpFocus::Email,
        SignUpFocus::Password,
        SignUpFocus::ConfirmPassword,
        SignUpFocus::Submit,
        SignUpFocus::BackToLogin,
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
pub enum SignUpMsg {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Input(char),
    Backspace,
    Focus(SignUpFocus),
    FocusNext,
    FocusPrev,
    Submit,
    BackToLogin,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignUpScreen {
    name: FormField,
    email: FormField,
    password: FormField,
    confirm_password: FormField,
    focus: SignUpFocus,
    submitted: bool,
    mode: ValidationMode,
}

impl SignUpScreen {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn name(&self) -> &FormField {
        &self.name
    }

    pub fn email(&self) -> &FormField {
        &self.email
    }

    pub fn password(&self) -> &FormField {
        &self.password
    }

    pub fn confirm_password(&self) -> &FormField {
        &self.confirm_password
    }

    pub fn focus(&self) -> SignUpFocus {
        self.focus
    }

    pub fn update(mut self, msg: SignUpMsg) -> Transition<Self> {
        match msg {
            SignUpMsg::NameChanged(value) => self.edit(Field::Name, |f| f.set_value(value)),
            SignUpMsg::EmailChanged(value) => self.edit(Field::Email, |f| f.set_value(value)),
            SignUpMsg::PasswordChanged(value) => {
                self.edit(Field::Password, |f| f.set_value(value));
            },
            SignUpMsg::ConfirmPasswordChanged(value) => {
                self.edit(Field::ConfirmPassword, |f| f.set_value(value));
            },
            SignUpMsg::Input(ch) => {
                if let Some(field) = self.focused_field() {
                    self.edit(field, |f| f.push(ch));
                }
            },
            SignUpMsg::Backspace => {
                if let Some(field) = self.focused_field() {
                    self.edit(field, FormField::pop);
                }
            },
            SignUpMsg::Focus(focus) => self.focus = focus,
            SignUpMsg::FocusNext => self.focus = self.focus.next(),
            SignUpMsg::FocusPrev => self.focus = self.focus.prev(),
            SignUpMsg::Submit => return self.submit(),
            SignUpMsg::BackToLogin => return Transition::with(self, [Effect::Back]),
        }
        Transition::new(self)
    }

    fn focused_field(&self) -> Option<Field> {
        match self.focus {
            SignUpFocus::Name => Some(Field::Name),
            SignUpFocus::Email => Some(Field::Email),
            SignUpFocus::Password => Some(Field::Password),
            SignUpFocus::ConfirmPassword => Some(Field::ConfirmPassword),
            SignUpFocus::Language | SignUpFocus::Submit | SignUpFocus::BackToLogin => None,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn edit(&mut self, field: Field, change: impl FnOnce(&mut FormField)) {
        change(self.field_mut(field));
        if self.mode == ValidationMode::Live && self.submitted {
            self.check(field);
            // The confirmation depends on the password as well.
            if matches!(field, Field::Password) {
                self.check(Field::ConfirmPassword);
            }
        }
    }

    fn check(&mut self, field: Field) {
        match field {
            Field::Name => self.name.check(validate_name),
            Field::Email => self.email.check(validate_email),
            Field::Password => self.password.check(validate_password),
            Field::ConfirmPassword => {
                let password = &self.password;
                self.confirm_password
                    .check(|confirmation| validate_confirmation(password.value(), confirmation));
            },
        }
    }

    fn submit(mut self) -> Transition<Self> {
        for field in [
            Field::Name,
            Field::Email,
            Field::Password,
            Field::ConfirmPassword,
        ] {
            self.check(field);
        }
        self.submitted = true;

        let rejected = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|field| field.error().is_some());

        if rejected {
            tracing::debug!("Sign-up form rejected");
            return Transition::new(self);
        }

        tracing::info!("Sign-up form accepted");
        let state = Self::new(self.mode);
        Transition::with(state, [Effect::Notify(Notice::SignUpSuccess), Effect::Back])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;

    fn filled(name: &str, email: &str, password: &str, confirmation: &str) -> SignUpScreen {
        SignUpScreen::default()
            .update(SignUpMsg::NameChanged(name.to_string()))
            .state
            .update(SignUpMsg::EmailChanged(email.to_string()))
            .state
            .update(SignUpMsg::PasswordChanged(password.to_string()))
            .state
            .update(SignUpMsg::ConfirmPasswordChanged(confirmation.to_string()))
            .state
    }

    #[test]
    fn valid_submit_notifies_and_goes_back() {
        let transition = filled("Asha", "asha@example.in", "secret1", "secret1")
            .update(SignUpMsg::Submit);

        assert_eq!(
            transition.effects,
            vec![Effect::Notify(Notice::SignUpSuccess), Effect::Back]
        );
        assert_eq!(transition.state.name().value(), "");
    }

    #[test]
    fn mismatched_confirmation_is_the_only_error() {
        let transition = filled("Asha", "asha@example.in", "secret1", "secret2")
            .update(SignUpMsg::Submit);

        assert!(transition.effects.is_empty());
        assert_eq!(transition.state.name().error(), None);
        assert_eq!(transition.state.email().error(), None);
        assert_eq!(transition.state.password().error(), None);
        assert_eq!(
            transition.state.confirm_password().error(),
            Some(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn empty_submit_flags_every_field() {
        let state = SignUpScreen::default().update(SignUpMsg::Submit).state;

        assert_eq!(state.name().error(), Some(ValidationError::NameRequired));
        assert_eq!(state.email().error(), Some(ValidationError::EmailRequired));
        assert_eq!(
            state.password().error(),
            Some(ValidationError::PasswordRequired)
        );
        assert_eq!(
            state.confirm_password().error(),
            Some(ValidationError::ConfirmPasswordRequired)
        );
    }

    #[test]
    fn typing_follows_focus() {
        let state = SignUpScreen::default()
            .update(SignUpMsg::Input('A'))
            .state
            .update(SignUpMsg::FocusNext)
            .state
            .update(SignUpMsg::Input('b'))
            .state
            .update(SignUpMsg::Focus(SignUpFocus::ConfirmPassword))
            .state
            .update(SignUpMsg::Input('c'))
            .state
            .update(SignUpMsg::Input('d'))
            .state
            .update(SignUpMsg::Backspace)
            .state;

        assert_eq!(state.name().value(), "A");
        assert_eq!(state.email().value(), "b");
        assert_eq!(state.confirm_password().value(), "c");
    }

    #[test]
    fn live_mode_rechecks_confirmation_when_password_changes() {
        let state = SignUpScreen::new(ValidationMode::Live)
            .update(SignUpMsg::PasswordChanged("secret1".to_string()))
            .state
            .update(SignUpMsg::ConfirmPasswordChanged("secret1".to_string()))
            .state
            .update(SignUpMsg::Submit)
            .state
            .update(SignUpMsg::PasswordChanged("secret2".to_string()))
            .state;

        assert_eq!(
            state.confirm_password().error(),
            Some(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn back_link_pops_the_screen() {
        let transition = SignUpScreen::default().update(SignUpMsg::BackToLogin);
        assert_eq!(transition.effects, vec![Effect::Back]);
    }

    #[test]
    fn focus_wraps_backwards() {
        let state = SignUpScreen::default()
            .update(SignUpMsg::Focus(SignUpFocus::Language))
            .state
            .update(SignUpMsg::FocusPrev)
            .state;
        assert_eq!(state.focus(), SignUpFocus::BackToLogin);
    }
}

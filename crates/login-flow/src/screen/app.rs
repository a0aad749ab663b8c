use super::{
    Effect, LanguageSelector, LoginFocus, LoginMsg, LoginScreen, Notice, Route, SelectorMsg,
    SignUpFocus, SignUpMsg, SignUpScreen, Transition, ValidationMode,
};
use crate::locale::LanguageCode;
use crate::store::StoreError;

/// Messages that drive the application state machine.
#[derive(Debug)]
pub enum Msg {
    /// The stored preference has been read.
    LanguageLoaded(Option<LanguageCode>),
    /// A preference write has finished.
    LanguageSaved(Result<LanguageCode, StoreError>),
    Selector(SelectorMsg),
    Login(LoginMsg),
    SignUp(SignUpMsg),
    /// Trigger the focused element of the current screen.
    Activate,
    Back,
    DismissNotice,
    Quit,
}

/// Root controller: navigation stack, language selector and both screens.
///
/// [`App::update`] handles navigation and notices itself and only returns the
/// effects that need the outside world (storage, translations, quitting).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct App {
    stack: Vec<Route>,
    selector: LanguageSelector,
    login: LoginScreen,
    signup: SignUpScreen,
    notice: Option<Notice>,
    mode: ValidationMode,
    language_settled: bool,
    should_quit: bool,
}

impl App {
    /// Builds the initial snapshot and asks for the stored language.
    pub fn mount(mode: ValidationMode) -> Transition<Self> {
        let app = Self {
            stack: vec![Route::Login],
            selector: LanguageSelector::default(),
            login: LoginScreen::new(mode),
            signup: SignUpScreen::new(mode),
            notice: None,
            mode,
            language_settled: false,
            should_quit: false,
        };
        Transition::with(app, [Effect::LoadLanguage])
    }

    pub fn route(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn selector(&self) -> &LanguageSelector {
        &self.selector
    }

    pub fn login(&self) -> &LoginScreen {
        &self.login
    }

    pub fn signup(&self) -> &SignUpScreen {
        &self.signup
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn update(mut self, msg: Msg) -> Transition<Self> {
        match msg {
            Msg::Quit => {
                self.should_quit = true;
                Transition::with(self, [Effect::Quit])
            },
            Msg::LanguageLoaded(code) => self.language_loaded(code),
            Msg::LanguageSaved(result) => {
                match result {
                    Ok(code) => tracing::debug!("Language preference saved: {}", code),
                    Err(err) => {
                        tracing::warn!("Language preference not saved: {}", err);
                        self.notice = Some(Notice::PreferenceNotSaved);
                    },
                }
                Transition::new(self)
            },
            Msg::DismissNotice => {
                self.notice = None;
                Transition::new(self)
            },
            // A notice blocks the screen until it is dismissed.
            _ if self.notice.is_some() => Transition::new(self),
            Msg::Selector(msg) => self.selector_update(msg),
            Msg::Back if self.selector.is_open() => self.selector_update(SelectorMsg::Close),
            // The open selector is modal.
            _ if self.selector.is_open() => Transition::new(self),
            Msg::Login(msg) if self.route() == Route::Login => {
                let Transition { state, effects } = std::mem::take(&mut self.login).update(msg);
                self.login = state;
                self.absorb(effects)
            },
            Msg::SignUp(msg) if self.route() == Route::SignUp => {
                let Transition { state, effects } = std::mem::take(&mut self.signup).update(msg);
                self.signup = state;
                self.absorb(effects)
            },
            Msg::Login(_) | Msg::SignUp(_) => Transition::new(self),
            Msg::Activate => self.activate(),
            Msg::Back => self.absorb([Effect::Back]),
        }
    }

    fn language_loaded(mut self, code: Option<LanguageCode>) -> Transition<Self> {
        if self.language_settled {
            tracing::debug!("Ignoring stored language, a language was already picked");
            return Transition::new(self);
        }
        self.language_settled = true;

        match code {
            Some(code) => {
                let Transition { state, effects } = self.selector.restore(code);
                self.selector = state;
                Transition::with(self, effects)
            },
            None => {
                tracing::debug!("No stored language, using {}", self.selector.code());
                Transition::new(self)
            },
        }
    }

    fn selector_update(mut self, msg: SelectorMsg) -> Transition<Self> {
        let Transition { state, effects } = self.selector.update(msg);
        self.selector = state;
        if effects
            .iter()
            .any(|effect| matches!(effect, Effect::PersistLanguage(_)))
        {
            self.language_settled = true;
        }
        Transition::with(self, effects)
    }

    fn activate(self) -> Transition<Self> {
        match self.route() {
            Route::Login => match self.login.focus() {
                LoginFocus::Language => self.selector_update(SelectorMsg::Open),
                LoginFocus::CreateAccount => self.update(Msg::Login(LoginMsg::CreateAccount)),
                LoginFocus::Email | LoginFocus::Password | LoginFocus::Submit => {
                    self.update(Msg::Login(LoginMsg::Submit))
                },
            },
            Route::SignUp => match self.signup.focus() {
                SignUpFocus::Language => self.selector_update(SelectorMsg::Open),
                SignUpFocus::BackToLogin => self.update(Msg::SignUp(SignUpMsg::BackToLogin)),
                SignUpFocus::Name
                | SignUpFocus::Email
                | SignUpFocus::Password
                | SignUpFocus::ConfirmPassword
                | SignUpFocus::Submit => self.update(Msg::SignUp(SignUpMsg::Submit)),
            },
        }
    }

    /// Applies navigation and notices, passing every other effect through.
    fn absorb(mut self, effects: impl IntoIterator<Item = Effect>) -> Transition<Self> {
        let mut outgoing = Vec::new();
        for effect in effects {
            match effect {
                Effect::Navigate(route) => {
                    if route == Route::SignUp {
                        self.signup = SignUpScreen::new(self.mode);
                    }
                    tracing::debug!("Navigating to {:?}", route);
                    self.stack.push(route);
                },
                Effect::Back => {
                    if self.stack.len() > 1 {
                        let left = self.stack.pop();
                        if left == Some(Route::SignUp) {
                            self.signup = SignUpScreen::new(self.mode);
                        }
                        tracing::debug!("Returning to {:?}", self.route());
                    }
                },
                Effect::Notify(notice) => self.notice = Some(notice),
                other => outgoing.push(other),
            }
        }
        Transition::with(self, outgoing)
    }
}

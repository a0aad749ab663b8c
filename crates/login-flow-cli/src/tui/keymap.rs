//! Translation of key presses into application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use login_flow::screen::{App, LoginMsg, Msg, Route, SelectorMsg, SignUpMsg};

/// An edit or focus change that applies to whichever form is showing.
enum FormKey {
    Input(char),
    Backspace,
    Next,
    Prev,
}

fn form_msg(route: Route, key: FormKey) -> Msg {
    match route {
        Route::Login => Msg::Login(match key {
            FormKey::Input(ch) => LoginMsg::Input(ch),
            FormKey::Backspace => LoginMsg::Backspace,
            FormKey::Next => LoginMsg::FocusNext,
            FormKey::Prev => LoginMsg::FocusPrev,
        }),
        Route::SignUp => Msg::SignUp(match key {
            FormKey::Input(ch) => SignUpMsg::Input(ch),
            FormKey::Backspace => SignUpMsg::Backspace,
            FormKey::Next => SignUpMsg::FocusNext,
            FormKey::Prev => SignUpMsg::FocusPrev,
        }),
    }
}

/// Control or Alt alone make a shortcut; both together are AltGr, which types text.
fn is_text(modifiers: KeyModifiers) -> bool {
    let control = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    control == alt
}

pub fn map_key(app: &App, key: KeyEvent) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }

    if app.notice().is_some() {
        return matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
            .then_some(Msg::DismissNotice);
    }

    if app.selector().is_open() {
        return match key.code {
            KeyCode::Up | KeyCode::BackTab => Some(Msg::Selector(SelectorMsg::Up)),
            KeyCode::Down | KeyCode::Tab => Some(Msg::Selector(SelectorMsg::Down)),
            KeyCode::Enter => Some(Msg::Selector(SelectorMsg::Confirm)),
            KeyCode::Esc => Some(Msg::Back),
            _ => None,
        };
    }

    let route = app.route();
    match key.code {
        KeyCode::F(2) => Some(Msg::Selector(SelectorMsg::Open)),
        KeyCode::Esc => Some(Msg::Back),
        KeyCode::Enter => Some(Msg::Activate),
        KeyCode::Tab | KeyCode::Down => Some(form_msg(route, FormKey::Next)),
        KeyCode::BackTab | KeyCode::Up => Some(form_msg(route, FormKey::Prev)),
        KeyCode::Backspace => Some(form_msg(route, FormKey::Backspace)),
        KeyCode::Char(ch) if is_text(key.modifiers) => Some(form_msg(route, FormKey::Input(ch))),
        _ => None,
    }
}

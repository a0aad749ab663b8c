//! Rendering of the application snapshot.

use crate::i18n::Translator;
use login_flow::LANGUAGES;
use login_flow::MessageId;
use login_flow::screen::{App, FormField, LoginFocus, Notice, Route, SignUpFocus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const FORM_WIDTH: u16 = 56;
const FIELD_HEIGHT: u16 = 4;

fn focused_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// A text input as it appears on screen.
struct Input<'a> {
    title: String,
    field: &'a FormField,
    masked: bool,
    focused: bool,
}

/// Draws the current screen and any modal on top of it.
pub fn draw(frame: &mut Frame, app: &App, translator: &Translator) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let [form] = Layout::horizontal([Constraint::Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(body);

    let cursor = match app.route() {
        Route::Login => draw_login(frame, form, app, translator),
        Route::SignUp => draw_signup(frame, form, app, translator),
    };

    let hints = Paragraph::new(translator.text(MessageId::KeyHints))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, footer);

    if let Some(notice) = app.notice() {
        draw_notice(frame, notice, translator);
    } else if app.selector().is_open() {
        draw_selector(frame, app, translator);
    } else if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn draw_login(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    translator: &Translator,
) -> Option<Position> {
    let screen = app.login();
    let focus = screen.focus();

    let [language, _, welcome, headline, _, email, password, forgot, _, submit, create] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    draw_language_button(frame, language, app, focus == LoginFocus::Language);

    let title = Paragraph::new(translator.text(MessageId::Welcome))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, welcome);
    frame.render_widget(
        Paragraph::new(translator.text(MessageId::SignInHeadline)).alignment(Alignment::Center),
        headline,
    );

    let inputs = [
        (
            email,
            Input {
                title: translator.text(MessageId::Email),
                field: screen.email(),
                masked: false,
                focused: focus == LoginFocus::Email,
            },
        ),
        (
            password,
            Input {
                title: translator.text(MessageId::Password),
                field: screen.password(),
                masked: true,
                focused: focus == LoginFocus::Password,
            },
        ),
    ];
    let mut cursor = None;
    for (area, input) in inputs {
        cursor = draw_input(frame, area, &input, translator).or(cursor);
    }

    frame.render_widget(
        Paragraph::new(translator.text(MessageId::ForgotPassword))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        forgot,
    );
    draw_button(
        frame,
        submit,
        &translator.text(MessageId::Login),
        focus == LoginFocus::Submit,
    );
    draw_link(
        frame,
        create,
        &translator.text(MessageId::CreateNewUser),
        focus == LoginFocus::CreateAccount,
    );

    cursor
}

fn draw_signup(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    translator: &Translator,
) -> Option<Position> {
    let screen = app.signup();
    let focus = screen.focus();

    let [language, _, headline, _, name, email, password, confirm, _, submit, back] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    draw_language_button(frame, language, app, focus == SignUpFocus::Language);

    frame.render_widget(
        Paragraph::new(translator.text(MessageId::SignUpHeadline))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center),
        headline,
    );

    let inputs = [
        (name, MessageId::Name, screen.name(), false, SignUpFocus::Name),
        (email, MessageId::Email, screen.email(), false, SignUpFocus::Email),
        (
            password,
            MessageId::Password,
            screen.password(),
            true,
            SignUpFocus::Password,
        ),
        (
            confirm,
            MessageId::ConfirmPassword,
            screen.confirm_password(),
            true,
            SignUpFocus::ConfirmPassword,
        ),
    ];
    let mut cursor = None;
    for (area, title, field, masked, target) in inputs {
        let input = Input {
            title: translator.text(title),
            field,
            masked,
            focused: focus == target,
        };
        cursor = draw_input(frame, area, &input, translator).or(cursor);
    }

    draw_button(
        frame,
        submit,
        &translator.text(MessageId::SignUp),
        focus == SignUpFocus::Submit,
    );
    draw_link(
        frame,
        back,
        &translator.text(MessageId::AlreadyHaveAccount),
        focus == SignUpFocus::BackToLogin,
    );

    cursor
}

fn draw_language_button(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let style = if focused {
        focused_style()
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button = Paragraph::new(Span::styled(
        format!("[ {} ▾ ]", app.selector().label()),
        style,
    ))
    .alignment(Alignment::Right);
    frame.render_widget(button, area);
}

/// Draws a bordered input with its error line. Returns the cursor position when focused.
fn draw_input(
    frame: &mut Frame,
    area: Rect,
    input: &Input<'_>,
    translator: &Translator,
) -> Option<Position> {
    let [field_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let border_style = match (input.focused, input.field.error()) {
        (true, _) => focused_style(),
        (false, Some(_)) => Style::default().fg(Color::Red),
        (false, None) => Style::default(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(input.title.as_str());

    let value = input.field.value();
    let shown = if input.masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let line = Line::from(shown);
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);

    let inner = block.inner(field_area);
    frame.render_widget(Paragraph::new(line).block(block), field_area);

    if let Some(error) = input.field.error() {
        frame.render_widget(
            Paragraph::new(translator.error(error))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true }),
            error_area,
        );
    }

    input.focused.then(|| Position {
        x: inner.x.saturating_add(width).min(inner.right().saturating_sub(1)),
        y: inner.y,
    })
}

fn draw_button(frame: &mut Frame, area: Rect, text: &str, focused: bool) {
    let style = if focused {
        focused_style().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Span::styled(format!("  {}  ", text), style))
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn draw_link(frame: &mut Frame, area: Rect, text: &str, focused: bool) {
    let style = if focused {
        focused_style().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)).alignment(Alignment::Center),
        area,
    );
}

fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

fn draw_selector(frame: &mut Frame, app: &App, translator: &Translator) {
    let height = u16::try_from(LANGUAGES.len()).unwrap_or(u16::MAX) + 2;
    let area = popup_area(frame.area(), 32, height);

    let items: Vec<ListItem> = LANGUAGES
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.tag),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.label),
            ]))
        })
        .collect();
    let highlighted = app.selector().highlighted();
    let mut state = ListState::default()
        .with_selected(LANGUAGES.iter().position(|entry| entry.label == highlighted.as_str()));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(translator.text(MessageId::SelectLanguage)),
        )
        .highlight_style(focused_style().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_notice(frame: &mut Frame, notice: Notice, translator: &Translator) {
    let area = popup_area(frame.area(), 44, 5);
    let color = if notice.is_warning() {
        Color::Yellow
    } else {
        Color::Green
    };

    let popup = Paragraph::new(translator.text(notice.message_id()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .title_bottom(Line::from(" Enter ").alignment(Alignment::Right)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

use super::{Effect, Transition};
use crate::locale::{LANGUAGES, LanguageCode, LanguageLabel, code_to_label, label_to_code};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectorMsg {
    Open,
    Close,
    Up,
    Down,
    /// Pick the highlighted entry.
    Confirm,
    Pick(LanguageLabel),
}

/// The language button and its selection modal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LanguageSelector {
    label: LanguageLabel,
    open: bool,
    highlighted: usize,
}

impl LanguageSelector {
    pub fn label(&self) -> LanguageLabel {
        self.label
    }

    pub fn code(&self) -> LanguageCode {
        label_to_code(self.label)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> LanguageLabel {
        code_to_label(LANGUAGES[self.highlighted].code)
    }

    /// Shows a language loaded from storage without persisting it again.
    pub fn restore(self, code: LanguageCode) -> Transition<Self> {
        let state = Self {
            label: code_to_label(code),
            ..self
        };
        Transition::with(state, [Effect::ApplyLanguage(code)])
    }

    pub fn update(self, msg: SelectorMsg) -> Transition<Self> {
        match msg {
            SelectorMsg::Open => Transition::new(Self {
                open: true,
                highlighted: self.code().index(),
                ..self
            }),
            SelectorMsg::Close => Transition::new(Self {
                open: false,
                ..self
            }),
            SelectorMsg::Up if self.open => Transition::new(Self {
                highlighted: (self.highlighted + LANGUAGES.len() - 1) % LANGUAGES.len(),
                ..self
            }),
            SelectorMsg::Down if self.open => Transition::new(Self {
                highlighted: (self.highlighted + 1) % LANGUAGES.len(),
                ..self
            }),
            SelectorMsg::Confirm if self.open => {
                let label = self.highlighted();
                self.pick(label)
            },
            SelectorMsg::Pick(label) => self.pick(label),
            SelectorMsg::Up | SelectorMsg::Down | SelectorMsg::Confirm => Transition::new(self),
        }
    }

    fn pick(self, label: LanguageLabel) -> Transition<Self> {
        let code = label_to_code(label);
        tracing::info!("Language selected: {} ({})", label, code);
        let state = Self {
            label,
            open: false,
            highlighted: code.index(),
        };
        Transition::with(
            state,
            [Effect::PersistLanguage(code), Effect::ApplyLanguage(code)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_on_english() {
        let selector = LanguageSelector::default();
        assert!(!selector.is_open());
        assert_eq!(selector.code(), LanguageCode::En);
    }

    #[test]
    fn open_highlights_current_language() {
        let selector = LanguageSelector::default()
            .restore(LanguageCode::Pa)
            .state
            .update(SelectorMsg::Open)
            .state;

        assert!(selector.is_open());
        assert_eq!(label_to_code(selector.highlighted()), LanguageCode::Pa);
    }

    #[test]
    fn highlight_wraps_around() {
        let selector = LanguageSelector::default()
            .update(SelectorMsg::Open)
            .state
            .update(SelectorMsg::Up)
            .state;
        assert_eq!(label_to_code(selector.highlighted()), LanguageCode::Ta);

        let selector = selector.update(SelectorMsg::Down).state;
        assert_eq!(label_to_code(selector.highlighted()), LanguageCode::En);
    }

    #[test]
    fn pick_persists_applies_and_closes() {
        let hindi = code_to_label(LanguageCode::Hi);
        let transition = LanguageSelector::default()
            .update(SelectorMsg::Open)
            .state
            .update(SelectorMsg::Pick(hindi));

        assert_eq!(transition.state.label(), hindi);
        assert!(!transition.state.is_open());
        assert_eq!(
            transition.effects,
            vec![
                Effect::PersistLanguage(LanguageCode::Hi),
                Effect::ApplyLanguage(LanguageCode::Hi),
            ]
        );
    }

    #[test]
    fn confirm_picks_highlighted() {
        let transition = LanguageSelector::default()
            .update(SelectorMsg::Open)
            .state
            .update(SelectorMsg::Down)
            .state
            .update(SelectorMsg::Down)
            .state
            .update(SelectorMsg::Confirm);

        assert_eq!(transition.state.code(), LanguageCode::Pa);
        assert_eq!(transition.effects[0], Effect::PersistLanguage(LanguageCode::Pa));
    }

    #[test]
    fn navigation_keys_are_ignored_while_closed() {
        let selector = LanguageSelector::default();
        let transition = selector.update(SelectorMsg::Confirm);

        assert_eq!(transition.state, selector);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn restore_does_not_persist() {
        let transition = LanguageSelector::default().restore(LanguageCode::Ta);

        assert_eq!(transition.state.label().as_str(), "தமிழ்");
        assert_eq!(transition.effects, vec![Effect::ApplyLanguage(LanguageCode::Ta)]);
    }
}

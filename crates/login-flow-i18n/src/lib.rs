#![doc = include_str!("../README.md")]

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use parking_lot::RwLock;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
pub use unic_langid::{LanguageIdentifier, langid};

/// Name of the `.ftl` file inside every language directory.
pub const DOMAIN: &str = "login-flow";

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Assets;

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Language '{0}' is not supported")]
    LanguageNotSupported(LanguageIdentifier),
    #[error("Invalid Fluent resource '{path}': {message}")]
    InvalidResource { path: String, message: String },
}

struct Loaded {
    lang: LanguageIdentifier,
    resource: Arc<FluentResource>,
}

/// Looks up translated strings in the embedded resources.
///
/// Messages missing from the selected language are taken from the fallback
/// language.
pub struct Localizer {
    fallback: Loaded,
    current: RwLock<Option<Loaded>>,
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("fallback", &self.fallback.lang)
            .field("current", &self.current_language())
            .finish()
    }
}

impl Localizer {
    pub fn new(fallback: &LanguageIdentifier) -> Result<Self, LocalizationError> {
        let resource = load_resource(fallback)?;
        Ok(Self {
            fallback: Loaded {
                lang: fallback.clone(),
                resource,
            },
            current: RwLock::new(None),
        })
    }

    /// Languages that ship a resource, sorted by tag.
    pub fn available_languages() -> Vec<LanguageIdentifier> {
        let file_name = format!("{}.ftl", DOMAIN);
        let mut languages = Vec::new();

        for file_path in Assets::iter() {
            if let Some(lang_part) = file_path.strip_suffix(&format!("/{}", file_name))
                && let Ok(lang_id) = lang_part.parse::<LanguageIdentifier>()
            {
                languages.push(lang_id);
            }
        }

        languages.sort_by_key(|lang| lang.to_string());
        languages
    }

    /// The language consulted when the current one lacks a message.
    pub fn fallback_language(&self) -> &LanguageIdentifier {
        &self.fallback.lang
    }

    pub fn current_language(&self) -> LanguageIdentifier {
        self.current
            .read()
            .as_ref()
            .map_or_else(|| self.fallback.lang.clone(), |loaded| loaded.lang.clone())
    }

    pub fn select_language(&self, lang: &LanguageIdentifier) -> Result<(), LocalizationError> {
        let mut current = self.current.write();
        if current.as_ref().is_some_and(|loaded| &loaded.lang == lang) {
            return Ok(());
        }

        if let Ok(resource) = load_resource(lang) {
            *current = Some(Loaded {
                lang: lang.clone(),
                resource,
            });
            tracing::debug!("Selected language '{}'", lang);
            return Ok(());
        }

        for supported in Self::available_languages() {
            if lang.matches(&supported, true, true)
                && let Ok(resource) = load_resource(&supported)
            {
                tracing::debug!("Selected language '{}' for '{}'", supported, lang);
                *current = Some(Loaded {
                    lang: supported,
                    resource,
                });
                return Ok(());
            }
        }

        Err(LocalizationError::LanguageNotSupported(lang.clone()))
    }

    pub fn localize<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        let current = self.current.read();
        if let Some(loaded) = current.as_ref()
            && let Some(message) = format_message(loaded, id, args)
        {
            return Some(message);
        }
        drop(current);

        let message = format_message(&self.fallback, id, args);
        if message.is_none() {
            tracing::warn!("Missing translation for '{}'", id);
        }
        message
    }

    /// Like [`Localizer::localize`], but renders an unknown id as itself.
    pub fn localize_or_id<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> String {
        self.localize(id, args).unwrap_or_else(|| id.to_string())
    }
}

fn load_resource(lang: &LanguageIdentifier) -> Result<Arc<FluentResource>, LocalizationError> {
    let file_path = format!("{}/{}.ftl", lang, DOMAIN);
    let file = Assets::get(&file_path)
        .ok_or_else(|| LocalizationError::LanguageNotSupported(lang.clone()))?;

    let content = String::from_utf8(file.data.to_vec()).map_err(|e| {
        LocalizationError::InvalidResource {
            path: file_path.clone(),
            message: e.to_string(),
        }
    })?;

    FluentResource::try_new(content)
        .map(Arc::new)
        .map_err(|(_, errs)| LocalizationError::InvalidResource {
            path: file_path,
            message: format!("{:?}", errs),
        })
}

fn format_message<'a>(
    loaded: &Loaded,
    id: &str,
    args: Option<&HashMap<&str, FluentValue<'a>>>,
) -> Option<String> {
    let mut bundle = FluentBundle::new(vec![loaded.lang.clone()]);
    // Bidi isolation marks show up as stray glyphs in a terminal.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(loaded.resource.clone()) {
        tracing::error!("Failed to add resource for '{}': {:?}", loaded.lang, errors);
        return None;
    }

    let message = bundle.get_message(id)?;
    let pattern = message.value()?;

    let fluent_args = args.map(|args| {
        let mut fa = FluentArgs::new();
        for (key, value) in args {
            fa.set(*key, value.clone());
        }
        fa
    });

    let mut errors = Vec::new();
    let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);

    if !errors.is_empty() {
        tracing::error!("Fluent formatting errors for id '{}': {:?}", id, errors);
        return None;
    }

    Some(value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use login_flow::{LanguageCode, MessageId};
    use rstest::rstest;
    use strum::IntoEnumIterator as _;

    fn min_args() -> HashMap<&'static str, FluentValue<'static>> {
        HashMap::from([("min", FluentValue::from(6))])
    }

    #[test]
    fn ships_all_four_languages() {
        let tags: Vec<String> = Localizer::available_languages()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tags, vec!["en", "hi", "pa", "ta"]);
    }

    #[test]
    fn every_message_resolves_in_every_language() {
        let args = min_args();

        for code in LanguageCode::iter() {
            let lang = code.language_identifier();
            let resource = load_resource(&lang).unwrap();
            let loaded = Loaded { lang, resource };

            for id in MessageId::iter() {
                assert!(
                    format_message(&loaded, id.id(), Some(&args)).is_some(),
                    "'{}' is missing in '{}'",
                    id.id(),
                    code
                );
            }
        }
    }

    #[rstest]
    #[case("en", "Welcome")]
    #[case("hi", "स्वागत है")]
    #[case("pa", "ਜੀ ਆਇਆਂ ਨੂੰ")]
    #[case("ta", "வரவேற்கிறோம்")]
    fn welcome_is_translated(#[case] tag: &str, #[case] expected: &str) {
        let localizer = Localizer::new(&langid!("en")).unwrap();
        localizer
            .select_language(&tag.parse::<LanguageIdentifier>().unwrap())
            .unwrap();

        assert_eq!(localizer.localize("welcome", None).as_deref(), Some(expected));
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let localizer = Localizer::new(&langid!("en")).unwrap();

        let message = localizer.localize("password-min-length", Some(&min_args()));

        assert_eq!(
            message.as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn fallback_language_is_used_before_selection() {
        let localizer = Localizer::new(&langid!("en")).unwrap();
        assert_eq!(localizer.current_language(), langid!("en"));
        assert_eq!(localizer.localize("login", None).as_deref(), Some("Login"));
    }

    #[test]
    fn region_subtag_matches_base_language() {
        let localizer = Localizer::new(&langid!("en")).unwrap();

        localizer.select_language(&langid!("hi-IN")).unwrap();

        assert_eq!(localizer.current_language(), langid!("hi"));
    }

    #[test]
    fn unsupported_language_is_rejected_and_keeps_selection() {
        let localizer = Localizer::new(&langid!("en")).unwrap();
        localizer.select_language(&langid!("ta")).unwrap();

        let result = localizer.select_language(&langid!("fr"));

        assert!(matches!(
            result,
            Err(LocalizationError::LanguageNotSupported(lang)) if lang == langid!("fr")
        ));
        assert_eq!(localizer.current_language(), langid!("ta"));
    }

    fn loaded(tag: &str, source: &str) -> Loaded {
        Loaded {
            lang: tag.parse().unwrap(),
            resource: Arc::new(FluentResource::try_new(source.to_string()).unwrap()),
        }
    }

    #[test]
    fn message_missing_from_current_language_comes_from_fallback() {
        let localizer = Localizer {
            fallback: loaded("en", "greeting = Hello\nfarewell = Goodbye\n"),
            current: RwLock::new(Some(loaded("ta", "greeting = வணக்கம்\n"))),
        };

        assert_eq!(localizer.localize("greeting", None).as_deref(), Some("வணக்கம்"));
        assert_eq!(localizer.localize("farewell", None).as_deref(), Some("Goodbye"));
        assert_eq!(localizer.localize("absent", None), None);
    }

    #[test]
    fn unknown_id_renders_as_itself() {
        let localizer = Localizer::new(&langid!("en")).unwrap();
        assert_eq!(localizer.localize("no-such-message", None), None);
        assert_eq!(
            localizer.localize_or_id("no-such-message", None),
            "no-such-message"
        );
    }

    #[test]
    fn unsupported_fallback_fails_construction() {
        assert!(matches!(
            Localizer::new(&langid!("de")),
            Err(LocalizationError::LanguageNotSupported(_))
        ));
    }
}

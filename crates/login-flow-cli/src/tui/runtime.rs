//! Event loop: draws snapshots, feeds key presses and worker results into
//! [`App::update`] and carries out the returned effects.

use crate::commands::Context;
use crate::error::CliError;
use crate::i18n::Translator;
use crate::tui::{draw, map_key};
use crossterm::event::{self, Event};
use login_flow::screen::{App, Effect, Msg, Transition, ValidationMode};
use login_flow::{LanguageCode, LocaleStore, PreferenceEvent, PreferenceWorker};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Carries out effects against the preference worker and the translator.
pub struct Runtime {
    worker: PreferenceWorker,
    translator: Translator,
    fallback: LanguageCode,
}

impl Runtime {
    pub fn new(store: Arc<dyn LocaleStore>, translator: Translator, fallback: LanguageCode) -> Self {
        Self {
            worker: PreferenceWorker::spawn(store),
            translator,
            fallback,
        }
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Mounts the application and starts loading the stored language.
    pub fn start(&self, mode: ValidationMode) -> App {
        let Transition { state, effects } = App::mount(mode);
        self.execute(effects);
        state
    }

    pub fn dispatch(&self, app: App, msg: Msg) -> App {
        let Transition { state, effects } = app.update(msg);
        self.execute(effects);
        state
    }

    /// Feeds every finished worker job into the application.
    pub fn drain(&self, mut app: App) -> App {
        while let Some(event) = self.worker.try_next() {
            app = self.dispatch(app, self.event_msg(event));
        }
        app
    }

    /// Waits up to a second for the next worker result.
    #[cfg(test)]
    fn wait(&self, app: App) -> App {
        let deadline = std::time::Instant::now() + Duration::from_secs(1);
        while std::time::Instant::now() < deadline {
            if let Some(event) = self.worker.try_next() {
                let msg = self.event_msg(event);
                return self.dispatch(app, msg);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        app
    }

    fn event_msg(&self, event: PreferenceEvent) -> Msg {
        match event {
            // Nothing stored: show the configured fallback if it is not the default.
            PreferenceEvent::Loaded(None) if self.fallback != LanguageCode::default() => {
                Msg::LanguageLoaded(Some(self.fallback))
            },
            PreferenceEvent::Loaded(code) => Msg::LanguageLoaded(code),
            PreferenceEvent::Saved(result) => Msg::LanguageSaved(result),
        }
    }

    fn execute(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadLanguage => self.worker.load(),
                Effect::PersistLanguage(code) => self.worker.save(code),
                Effect::ApplyLanguage(code) => self.translator.apply(code),
                Effect::Quit => tracing::debug!("Quit requested"),
                other => tracing::trace!("Unhandled effect {:?}", other),
            }
        }
    }
}

/// Runs the interactive screens until the user quits.
pub fn run(context: &Context, mode: ValidationMode) -> Result<(), CliError> {
    let translator = context.translator()?;
    let runtime = Runtime::new(Arc::new(context.store()), translator, context.fallback);

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &runtime, mode);
    ratatui::restore();

    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    runtime: &Runtime,
    mode: ValidationMode,
) -> Result<(), CliError> {
    let mut app = runtime.start(mode);

    loop {
        app = runtime.drain(app);
        terminal.draw(|frame| draw(frame, &app, runtime.translator()))?;

        if app.should_quit() {
            break;
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && let Some(msg) = map_key(&app, key)
        {
            app = runtime.dispatch(app, msg);
        }
    }

    Ok(())
}

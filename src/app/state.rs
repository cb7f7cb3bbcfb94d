use std::sync::Arc;

use crate::catalog::{Catalog, Recipe};
use crate::config::Config;
use crate::prompt::ScreenContext;
use crate::session::CookingSession;
use crate::speech::SpeechOutput;
use crate::timer::StepTimer;

/// Events delivered to the loop that owns [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A line the user typed (or a recognised utterance).
    Input(String),
    /// One second has passed.
    TimerTick,
    InputClosed,
}

/// What the front end should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    /// Print a single status line without redrawing the screen.
    Status(String),
    Unchanged,
    Quit,
}

/// The screen currently shown. The walkthrough owns the session; leaving
/// it drops the session.
#[derive(Debug)]
pub enum Screen {
    Home,
    RecipeDetail(Arc<Recipe>),
    StepWalkthrough {
        session: CookingSession,
        timer: Option<StepTimer>,
    },
}

impl Screen {
    pub fn context(&self) -> ScreenContext {
        match self {
            Screen::Home => ScreenContext::Home,
            Screen::RecipeDetail(_) => ScreenContext::RecipeDetail,
            Screen::StepWalkthrough { .. } => ScreenContext::StepWalkthrough,
        }
    }

    pub fn recipe(&self) -> Option<&Arc<Recipe>> {
        match self {
            Screen::Home => None,
            Screen::RecipeDetail(recipe) => Some(recipe),
            Screen::StepWalkthrough { session, .. } => Some(session.recipe()),
        }
    }

    pub fn session(&self) -> Option<&CookingSession> {
        match self {
            Screen::StepWalkthrough { session, .. } => Some(session),
            _ => None,
        }
    }
}

/// Central application state, owned by the event loop.
pub struct AppState {
    pub catalog: Catalog,
    pub config: Config,
    pub screen: Screen,
    pub speech: Box<dyn SpeechOutput>,
    /// One-off message shown under the screen, cleared on the next command.
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config, speech: Box<dyn SpeechOutput>) -> Self {
        Self {
            catalog,
            config,
            screen: Screen::Home,
            speech,
            notice: None,
        }
    }

    pub fn speak(&self, text: &str) {
        log::debug!("Speaking: {text}");
        self.speech.speak(text);
    }

    /// Show `message` and read it out.
    pub fn announce(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.speak(&message);
        self.notice = Some(message);
    }
}

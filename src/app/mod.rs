mod commands;
mod event_handler;
mod input;
mod state;
mod view;

pub use commands::VoiceCommand;
pub use event_handler::{enter_recipe_detail, handle_event};
pub use input::read_utterance;
pub use state::{AppEvent, AppState, Flow, Screen};
pub use view::{render, render_catalog};

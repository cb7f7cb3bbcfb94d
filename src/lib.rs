//! Cooking session model: a compiled-in recipe catalog, step-by-step
//! walkthrough state, and the voice prompts spoken on each screen.
//!
//! The terminal front end in `main.rs` drives these types through [`app`].

pub mod app;
pub mod audio_feedback;
pub mod catalog;
pub mod config;
pub mod error;
pub mod prompt;
pub mod session;
pub mod speech;
pub mod timer;

pub use catalog::{Catalog, CatalogError, Difficulty, Recipe, RecipeBuilder, RecipeStep};
pub use error::{Error, Result};
pub use prompt::{build_prompt, PromptError, ScreenContext};
pub use session::{CookingSession, SessionError, StepBoundary};
pub use speech::SpeechOutput;
pub use timer::{format_duration, StepTimer, TimerError, TimerState};

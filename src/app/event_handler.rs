use std::sync::Arc;

use super::commands::VoiceCommand;
use super::state::{AppEvent, AppState, Flow, Screen};
use crate::catalog::Recipe;
use crate::prompt::{
    build_prompt, ingredients_prompt, recipe_complete_prompt, recipe_details_prompt, step_prompt,
    timer_finished_prompt, ScreenContext,
};
use crate::session::{CookingSession, StepBoundary};
use crate::timer::{StepTimer, TimerState};

/// Handle one event. This is the screen state machine.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Flow {
    match event {
        AppEvent::Input(line) => {
            let had_notice = state.notice.take().is_some();
            match handle_command(state, VoiceCommand::parse(&line)) {
                // The old notice is still on screen
                Flow::Unchanged if had_notice && state.notice.is_none() => Flow::Redraw,
                flow => flow,
            }
        }
        AppEvent::TimerTick => on_timer_tick(state),
        AppEvent::InputClosed => {
            log::info!("Input closed, leaving");
            Flow::Quit
        }
    }
}

fn handle_command(state: &mut AppState, command: VoiceCommand) -> Flow {
    match command {
        VoiceCommand::Quit => return Flow::Quit,
        VoiceCommand::Help => {
            speak_help(state);
            return Flow::Unchanged;
        }
        _ => {}
    }

    match state.screen.context() {
        ScreenContext::Home => on_home(state, command),
        ScreenContext::RecipeDetail => on_recipe_detail(state, command),
        ScreenContext::StepWalkthrough => on_step(state, command),
    }
}

fn speak_help(state: &mut AppState) {
    let recipe = state.screen.recipe().map(|r| &**r);
    match build_prompt(
        state.screen.context(),
        recipe,
        state.screen.session(),
        &state.catalog,
    ) {
        Ok(text) => state.speak(&text),
        Err(e) => {
            log::error!("Help prompt failed: {e}");
            state.notice = Some(e.to_string());
        }
    }
}

fn on_home(state: &mut AppState, command: VoiceCommand) -> Flow {
    match command {
        VoiceCommand::Other(ref query) if query.is_empty() => Flow::Unchanged,
        VoiceCommand::Other(query) => match state.catalog.lookup(&query) {
            Ok(recipe) => {
                enter_recipe_detail(state, recipe, true);
                Flow::Redraw
            }
            Err(e) => {
                log::info!("Home lookup failed: {e}");
                state.announce(format!("Sorry, {e}. Say 'help' to hear the recipes."));
                Flow::Redraw
            }
        },
        _ => {
            state.notice = Some("Say the name of a recipe, or 'help'.".into());
            Flow::Redraw
        }
    }
}

fn on_recipe_detail(state: &mut AppState, command: VoiceCommand) -> Flow {
    let Screen::RecipeDetail(recipe) = &state.screen else {
        return Flow::Unchanged;
    };
    let recipe = Arc::clone(recipe);

    match command {
        VoiceCommand::ReadAgain => {
            state.speak(&recipe_details_prompt(&recipe));
            Flow::Unchanged
        }
        VoiceCommand::RepeatIngredients => {
            state.speak(&ingredients_prompt(&recipe));
            Flow::Unchanged
        }
        VoiceCommand::Start => match CookingSession::start(recipe) {
            Ok(session) => {
                enter_step(state, session);
                Flow::Redraw
            }
            Err(e) => {
                log::warn!("Cannot start cooking: {e}");
                state.announce(e.to_string());
                Flow::Redraw
            }
        },
        VoiceCommand::Back => {
            go_home(state);
            Flow::Redraw
        }
        _ => {
            state.notice = Some("Say 'start', 'read again', 'back' or 'help'.".into());
            Flow::Redraw
        }
    }
}

fn on_step(state: &mut AppState, command: VoiceCommand) -> Flow {
    let Screen::StepWalkthrough { session, timer } = &mut state.screen else {
        return Flow::Unchanged;
    };

    match command {
        VoiceCommand::ReadAgain => {
            let text = step_prompt(session);
            state.speak(&text);
            Flow::Unchanged
        }
        VoiceCommand::RepeatIngredients => {
            let text = ingredients_prompt(session.recipe());
            state.speak(&text);
            Flow::Unchanged
        }
        VoiceCommand::Next => match session.next() {
            Ok(()) => {
                *timer = StepTimer::for_step(session.current());
                let text = step_prompt(session);
                state.speak(&text);
                Flow::Redraw
            }
            Err(StepBoundary::AtLastStep) => {
                let text = recipe_complete_prompt(session.recipe());
                state.announce(text);
                Flow::Redraw
            }
            Err(StepBoundary::AtFirstStep) => Flow::Unchanged,
        },
        VoiceCommand::Previous => match session.previous() {
            Ok(()) => {
                *timer = StepTimer::for_step(session.current());
                let text = step_prompt(session);
                state.speak(&text);
                Flow::Redraw
            }
            Err(boundary) => {
                state.announce(format!("You are {boundary}."));
                Flow::Redraw
            }
        },
        VoiceCommand::Start | VoiceCommand::Pause | VoiceCommand::Reset => {
            let Some(timer) = timer else {
                state.announce("This step has no timer.");
                return Flow::Redraw;
            };
            let message = match command {
                VoiceCommand::Start if timer.is_finished() => {
                    "The timer has finished. Say 'reset' to run it again.".to_string()
                }
                VoiceCommand::Start => {
                    timer.start();
                    format!("Timer started: {}.", timer.label())
                }
                VoiceCommand::Pause => {
                    timer.pause();
                    format!("Timer paused at {}.", timer.label())
                }
                _ => {
                    timer.reset();
                    format!("Timer reset to {}.", timer.label())
                }
            };
            state.announce(message);
            Flow::Redraw
        }
        VoiceCommand::Back => {
            let recipe = Arc::clone(session.recipe());
            enter_recipe_detail(state, recipe, false);
            Flow::Redraw
        }
        _ => {
            state.notice = Some("Say 'next', 'previous', 'read again', 'back' or 'help'.".into());
            Flow::Redraw
        }
    }
}

fn on_timer_tick(state: &mut AppState) -> Flow {
    let Screen::StepWalkthrough {
        session,
        timer: Some(timer),
    } = &mut state.screen
    else {
        return Flow::Unchanged;
    };

    match timer.tick() {
        TimerState::Idle => Flow::Unchanged,
        TimerState::Running => {
            let remaining = timer.remaining();
            if remaining % 10 == 0 || remaining <= 5 {
                Flow::Status(format!("Timer {}", timer.label()))
            } else {
                Flow::Unchanged
            }
        }
        TimerState::Finished => {
            log::info!("Timer finished for {}", session.progress_label());
            let text = timer_finished_prompt(session);
            if state.config.timer_chime {
                crate::audio_feedback::play_chime();
            }
            state.announce(text);
            Flow::Redraw
        }
    }
}

/// Open a recipe's detail page. `announce` reads the recipe details, which
/// happens once per visit from the home page.
pub fn enter_recipe_detail(state: &mut AppState, recipe: Arc<Recipe>, announce: bool) {
    log::info!("Showing recipe {}", recipe.name());
    if announce && state.config.speak_on_enter {
        state.speak(&recipe_details_prompt(&recipe));
    }
    state.screen = Screen::RecipeDetail(recipe);
}

fn enter_step(state: &mut AppState, session: CookingSession) {
    let timer = StepTimer::for_step(session.current());
    if state.config.speak_on_enter {
        state.speak(&step_prompt(&session));
    }
    state.screen = Screen::StepWalkthrough { session, timer };
}

fn go_home(state: &mut AppState) {
    log::info!("Back to home");
    state.screen = Screen::Home;
    if state.config.speak_on_enter {
        speak_help(state);
    }
}

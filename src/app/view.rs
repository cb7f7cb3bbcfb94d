use std::fmt;

use super::state::{AppState, Screen};
use crate::catalog::{Catalog, Recipe};
use crate::session::CookingSession;
use crate::timer::StepTimer;

/// Text rendering of the current screen.
pub fn render(state: &AppState) -> String {
    ScreenView(state).to_string()
}

/// One line per recipe: name, steps, difficulty and dietary badges.
pub fn render_catalog(catalog: &Catalog) -> String {
    CatalogView(catalog).to_string()
}

struct ScreenView<'a>(&'a AppState);

impl fmt::Display for ScreenView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        match &state.screen {
            Screen::Home => {
                writeln!(f, "== Recipes ==")?;
                write!(f, "{}", CatalogView(&state.catalog))?;
                writeln!(f)?;
                writeln!(f, "Say a recipe name to open it, or 'help'.")?;
            }
            Screen::RecipeDetail(recipe) => write_recipe(f, recipe)?,
            Screen::StepWalkthrough { session, timer } => write_step(f, session, timer.as_ref())?,
        }
        if let Some(ref notice) = state.notice {
            writeln!(f, "! {notice}")?;
        }
        Ok(())
    }
}

struct CatalogView<'a>(&'a Catalog);

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, recipe) in self.0.all().iter().enumerate() {
            write!(
                f,
                "{:>2}. {} ({}, {})",
                i + 1,
                recipe.name(),
                recipe.steps_label(),
                recipe.difficulty()
            )?;
            let labels = recipe.dietary_labels();
            if !labels.is_empty() {
                write!(f, " [{}]", labels.join("] ["))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_recipe(f: &mut fmt::Formatter<'_>, recipe: &Recipe) -> fmt::Result {
    writeln!(f, "== {} ==", recipe.name())?;
    write!(f, "{} · {}", recipe.steps_label(), recipe.difficulty())?;
    for label in recipe.dietary_labels() {
        write!(f, " · {label}")?;
    }
    writeln!(f)?;
    writeln!(f)?;
    writeln!(f, "TIME:      {} minutes", recipe.cook_time_minutes())?;
    writeln!(f, "CALORIES:  {} kcal", recipe.calories())?;
    writeln!(f, "SERVINGS:  {}", recipe.servings())?;
    writeln!(f)?;
    writeln!(f, "Ingredients")?;
    for item in recipe.ingredients() {
        writeln!(f, "  • {item}")?;
    }
    writeln!(f)?;
    writeln!(f, "[start] [read again] [ingredients] [back] [help]")
}

fn write_step(
    f: &mut fmt::Formatter<'_>,
    session: &CookingSession,
    timer: Option<&StepTimer>,
) -> fmt::Result {
    let step = session.current();
    writeln!(f, "== {} · {} ==", session.recipe().name(), session.progress_label())?;
    writeln!(f, "{}", step.title())?;
    writeln!(f)?;
    writeln!(f, "{}", step.description())?;
    if let Some(timer) = timer {
        let status = if timer.is_running() {
            "running"
        } else if timer.is_finished() {
            "done"
        } else {
            "say 'start'"
        };
        writeln!(f)?;
        writeln!(f, "Timer: {} ({status})", timer.label())?;
    }
    writeln!(f)?;
    writeln!(f, "[next] [previous] [read again] [back] [help]")
}

use std::sync::Arc;

use crate::catalog::{Catalog, Recipe, RecipeStep};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("recipe '{0}' has no steps to cook")]
    InvalidRecipe(String),
}

/// Returned when a move would leave the step range. The session is left
/// untouched; callers decide whether that means "nothing to do" or
/// "recipe complete".
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StepBoundary {
    #[error("already at the first step")]
    AtFirstStep,
    #[error("already at the last step")]
    AtLastStep,
}

/// Walkthrough state for one recipe: which step the cook is on.
///
/// Invariant: `current < recipe.steps().len()`.
#[derive(Debug, Clone)]
pub struct CookingSession {
    recipe: Arc<Recipe>,
    current: usize,
}

impl CookingSession {
    pub fn start(recipe: Arc<Recipe>) -> Result<Self, SessionError> {
        if recipe.steps().is_empty() {
            return Err(SessionError::InvalidRecipe(recipe.name().to_string()));
        }
        log::info!("Cooking session started for {}", recipe.name());
        Ok(Self { recipe, current: 0 })
    }

    /// Look `name` up in `catalog` and start cooking it.
    pub fn start_named(catalog: &Catalog, name: &str) -> crate::Result<Self> {
        let recipe = catalog.find(name)?;
        Ok(Self::start(recipe)?)
    }

    pub fn next(&mut self) -> Result<(), StepBoundary> {
        if self.current + 1 >= self.recipe.steps().len() {
            return Err(StepBoundary::AtLastStep);
        }
        self.current += 1;
        log::debug!("{}: moved to step {}", self.recipe.name(), self.step_number());
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), StepBoundary> {
        if self.current == 0 {
            return Err(StepBoundary::AtFirstStep);
        }
        self.current -= 1;
        log::debug!("{}: moved back to step {}", self.recipe.name(), self.step_number());
        Ok(())
    }

    pub fn current(&self) -> &RecipeStep {
        &self.recipe.steps()[self.current]
    }

    /// Zero-based index of the current step.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// One-based step number, as spoken to the user.
    pub fn step_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_steps(&self) -> usize {
        self.recipe.steps().len()
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.total_steps()
    }

    pub fn recipe(&self) -> &Arc<Recipe> {
        &self.recipe
    }

    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step_number(), self.total_steps())
    }
}

//! Canned sentences spoken to the user. Every function here is pure; the
//! caller hands the result to a [`crate::speech::SpeechOutput`].

use std::fmt;

use crate::catalog::{Catalog, Recipe};
use crate::session::CookingSession;
use crate::timer::format_duration;

/// Which screen the help prompt is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenContext {
    Home,
    RecipeDetail,
    StepWalkthrough,
}

impl fmt::Display for ScreenContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScreenContext::Home => "Home Page",
            ScreenContext::RecipeDetail => "Meal Page",
            ScreenContext::StepWalkthrough => "Step Page",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("the {context} prompt needs {missing}")]
    MissingContext {
        context: ScreenContext,
        missing: &'static str,
    },
    #[error("session is walking '{session}' but the prompt was asked for '{recipe}'")]
    ContextMismatch { recipe: String, session: String },
}

/// Help sentence for `context`, naming the commands available there.
pub fn build_prompt(
    context: ScreenContext,
    recipe: Option<&Recipe>,
    session: Option<&CookingSession>,
    catalog: &Catalog,
) -> Result<String, PromptError> {
    match context {
        ScreenContext::Home => Ok(home_prompt(catalog)),
        ScreenContext::RecipeDetail => {
            let recipe = recipe.ok_or(PromptError::MissingContext {
                context,
                missing: "a recipe",
            })?;
            Ok(format!(
                "You are currently in the '{context}' and you're viewing the recipe for {}. \
                 You can say 'Read again', to read the recipe again. \
                 You can say 'Start', to start cooking the recipe. \
                 You can say 'Back', to go back to the '{}'.",
                recipe.name(),
                ScreenContext::Home,
            ))
        }
        ScreenContext::StepWalkthrough => {
            let (recipe, session) = match (recipe, session) {
                (Some(recipe), Some(session)) => (recipe, session),
                (None, Some(_)) => {
                    return Err(PromptError::MissingContext {
                        context,
                        missing: "a recipe",
                    })
                }
                (Some(_), None) => {
                    return Err(PromptError::MissingContext {
                        context,
                        missing: "a cooking session",
                    })
                }
                (None, None) => {
                    return Err(PromptError::MissingContext {
                        context,
                        missing: "a recipe and a cooking session",
                    })
                }
            };
            if session.recipe().name() != recipe.name() {
                return Err(PromptError::ContextMismatch {
                    recipe: recipe.name().to_string(),
                    session: session.recipe().name().to_string(),
                });
            }
            Ok(format!(
                "You are currently in the '{context}' for {}. \
                 You are at Step {} out of {}. \
                 You can say 'Read again', to read the step again. \
                 You can say 'Next', to go to the next step. \
                 You can say 'Previous', to go on the previous step.",
                recipe.name(),
                session.step_number(),
                session.total_steps(),
            ))
        }
    }
}

fn home_prompt(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return format!(
            "You are currently in the '{}', there are no recipes available yet.",
            ScreenContext::Home
        );
    }
    let options = catalog
        .names()
        .iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are currently in the '{}', you can select an option between: {options}, \
         to have more details on the Recipe.",
        ScreenContext::Home
    )
}

/// Spoken once when a recipe's detail page opens.
pub fn recipe_details_prompt(recipe: &Recipe) -> String {
    let vegetarian = if recipe.vegetarian() {
        "This meal is vegetarian."
    } else {
        "This meal is not vegetarian."
    };
    format!(
        "{vegetarian}\n\
         Here are the details for {}:\n\
         Difficulty: {},\n\
         Time: {} minutes,\n\
         Calories: {} kcal,\n\
         Servings: {}.\n\
         Ingredients: {}.\n\
         If you wish to hear the ingredients again, just say \"repeat the ingredients.\"",
        recipe.name(),
        recipe.difficulty(),
        recipe.cook_time_minutes(),
        recipe.calories(),
        recipe.servings(),
        recipe.ingredients_text(),
    )
}

pub fn ingredients_prompt(recipe: &Recipe) -> String {
    let items = recipe.ingredients();
    if items.is_empty() {
        return format!("{} has no ingredients listed.", recipe.name());
    }
    format!("The ingredients for {} are: {}.", recipe.name(), items.join(", "))
}

/// Reads the current step aloud.
pub fn step_prompt(session: &CookingSession) -> String {
    let step = session.current();
    let mut text = format!(
        "{}. {}. {}",
        session.progress_label(),
        step.title(),
        step.description()
    );
    if step.uses_timer() {
        if let Ok(length) = format_duration(i64::from(step.timer_seconds())) {
            text.push_str(&format!(" This step has a timer of {length}. Say 'Start' to begin it."));
        }
    }
    text
}

pub fn timer_finished_prompt(session: &CookingSession) -> String {
    format!(
        "Time is up for step {} of {}. Say 'Next' when you're ready to continue.",
        session.step_number(),
        session.recipe().name()
    )
}

pub fn recipe_complete_prompt(recipe: &Recipe) -> String {
    format!(
        "That was the last step. Your {} is ready, enjoy your meal! Say 'Back' to return to the recipe.",
        recipe.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn home_prompt_lists_catalog_names() {
        let catalog = catalog();
        let prompt = build_prompt(ScreenContext::Home, None, None, &catalog).unwrap();
        assert_eq!(
            prompt,
            "You are currently in the 'Home Page', you can select an option between: \
             'Tomato Pasta', 'Pizza Salsiccia e Friarielli', to have more details on the Recipe."
        );
    }

    #[test]
    fn home_prompt_with_empty_catalog() {
        let prompt = build_prompt(ScreenContext::Home, None, None, &Catalog::default()).unwrap();
        assert!(prompt.contains("no recipes available"));
    }

    #[test]
    fn detail_prompt_needs_recipe() {
        let err = build_prompt(ScreenContext::RecipeDetail, None, None, &catalog()).unwrap_err();
        assert!(matches!(
            err,
            PromptError::MissingContext {
                context: ScreenContext::RecipeDetail,
                ..
            }
        ));
    }

    #[test]
    fn detail_prompt_names_recipe_and_commands() {
        let catalog = catalog();
        let pizza = catalog.find("Pizza Salsiccia e Friarielli").unwrap();
        let prompt =
            build_prompt(ScreenContext::RecipeDetail, Some(&*pizza), None, &catalog).unwrap();
        assert!(prompt.contains("viewing the recipe for Pizza Salsiccia e Friarielli"));
        for command in ["'Read again'", "'Start'", "'Back'"] {
            assert!(prompt.contains(command), "missing {command}");
        }
    }

    #[test]
    fn step_prompt_needs_recipe_even_with_session() {
        let catalog = catalog();
        let session = CookingSession::start(catalog.find("Tomato Pasta").unwrap()).unwrap();
        let err = build_prompt(ScreenContext::StepWalkthrough, None, Some(&session), &catalog)
            .unwrap_err();
        assert_eq!(
            err,
            PromptError::MissingContext {
                context: ScreenContext::StepWalkthrough,
                missing: "a recipe",
            }
        );
    }

    #[test]
    fn step_prompt_needs_session() {
        let catalog = catalog();
        let pasta = catalog.find("Tomato Pasta").unwrap();
        let err = build_prompt(ScreenContext::StepWalkthrough, Some(&*pasta), None, &catalog)
            .unwrap_err();
        assert!(matches!(err, PromptError::MissingContext { missing: "a cooking session", .. }));
    }

    #[test]
    fn step_prompt_reports_position() {
        let catalog = catalog();
        let pasta = catalog.find("Tomato Pasta").unwrap();
        let mut session = CookingSession::start(pasta.clone()).unwrap();
        session.next().unwrap();
        let prompt =
            build_prompt(ScreenContext::StepWalkthrough, Some(&*pasta), Some(&session), &catalog)
                .unwrap();
        assert!(prompt.contains("'Step Page' for Tomato Pasta"));
        assert!(prompt.contains("You are at Step 2 out of 4."));
        for command in ["'Read again'", "'Next'", "'Previous'"] {
            assert!(prompt.contains(command), "missing {command}");
        }
    }

    #[test]
    fn step_prompt_rejects_other_recipe() {
        let catalog = catalog();
        let pizza = catalog.find("Pizza Salsiccia e Friarielli").unwrap();
        let session = CookingSession::start(catalog.find("Tomato Pasta").unwrap()).unwrap();
        let err =
            build_prompt(ScreenContext::StepWalkthrough, Some(&*pizza), Some(&session), &catalog)
                .unwrap_err();
        assert!(matches!(err, PromptError::ContextMismatch { .. }));
    }

    #[test]
    fn details_prompt_mentions_diet_and_numbers() {
        let catalog = catalog();
        let pasta = catalog.find("Tomato Pasta").unwrap();
        let text = recipe_details_prompt(&pasta);
        assert!(text.starts_with("This meal is vegetarian."));
        assert!(text.contains("Difficulty: Easy,"));
        assert!(text.contains("Time: 20 minutes,"));
        assert!(text.contains("Calories: 500 kcal,"));
        assert!(text.contains("Servings: 1."));

        let pizza = catalog.find("Pizza Salsiccia e Friarielli").unwrap();
        assert!(recipe_details_prompt(&pizza).starts_with("This meal is not vegetarian."));
    }

    #[test]
    fn timed_step_mentions_timer() {
        let catalog = catalog();
        let mut session = CookingSession::start(catalog.find("Tomato Pasta").unwrap()).unwrap();
        assert!(!step_prompt(&session).contains("timer of"));
        session.next().unwrap();
        session.next().unwrap();
        let text = step_prompt(&session);
        assert!(text.starts_with("Step 3 of 4. 3. Cuocere la pasta."));
        assert!(text.contains("This step has a timer of 00:30."));
    }

    #[test]
    fn ingredients_listed() {
        let catalog = catalog();
        let pizza = catalog.find("Pizza Salsiccia e Friarielli").unwrap();
        assert_eq!(
            ingredients_prompt(&pizza),
            "The ingredients for Pizza Salsiccia e Friarielli are: salsiccia, friarielli."
        );
    }
}

use std::sync::Arc;

use voice_chef::app::{handle_event, AppEvent, AppState};
use voice_chef::config::Config;
use voice_chef::prompt::{build_prompt, PromptError, ScreenContext};
use voice_chef::speech::MemorySpeech;
use voice_chef::{format_duration, Catalog, CookingSession, StepBoundary};

#[test]
fn tomato_pasta_walkthrough() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.find("Tomato Pasta").unwrap().number_of_steps(), 4);
    assert_eq!(
        catalog.find("Pizza Salsiccia e Friarielli").unwrap().number_of_steps(),
        4
    );

    let mut session = CookingSession::start(catalog.find("Tomato Pasta").unwrap()).unwrap();
    assert_eq!(session.current().title(), "1. Preparare la pasta");

    for _ in 0..3 {
        session.next().unwrap();
    }
    assert_eq!(session.progress_label(), "Step 4 of 4");

    assert_eq!(session.next(), Err(StepBoundary::AtLastStep));
    assert_eq!(session.progress_label(), "Step 4 of 4");
}

#[test]
fn every_builtin_recipe_can_be_walked() {
    let catalog = Catalog::builtin().unwrap();
    for recipe in catalog.all() {
        assert_eq!(recipe.steps().len(), recipe.number_of_steps());
        let mut session = CookingSession::start(Arc::clone(recipe)).unwrap();
        let mut moves = 0;
        while session.next().is_ok() {
            moves += 1;
        }
        assert_eq!(moves, recipe.number_of_steps() - 1);
        assert_eq!(session.previous(), Ok(()));
    }
}

#[test]
fn step_prompt_without_recipe_is_missing_context() {
    let catalog = Catalog::builtin().unwrap();
    let session = CookingSession::start(catalog.find("Tomato Pasta").unwrap()).unwrap();
    let result = build_prompt(ScreenContext::StepWalkthrough, None, Some(&session), &catalog);
    assert!(matches!(result, Err(PromptError::MissingContext { .. })));
}

#[test]
fn durations() {
    assert_eq!(format_duration(0).unwrap(), "00:00");
    assert_eq!(format_duration(90).unwrap(), "01:30");
    assert_eq!(format_duration(3661).unwrap(), "61:01");
    assert!(format_duration(-5).is_err());
}

#[test]
fn spoken_session_from_home_to_last_step() {
    let speech = Arc::new(MemorySpeech::new());
    let mut state = AppState::new(
        Catalog::builtin().unwrap(),
        Config::default(),
        Box::new(Arc::clone(&speech)),
    );

    for line in ["help", "Pizza", "repeat the ingredients", "start", "next", "next", "next", "next"] {
        handle_event(&mut state, AppEvent::Input(line.to_string()));
    }

    let spoken = speech.spoken();
    assert!(spoken[0].starts_with("You are currently in the 'Home Page'"));
    assert!(spoken[1].starts_with("This meal is not vegetarian."));
    assert_eq!(
        spoken[2],
        "The ingredients for Pizza Salsiccia e Friarielli are: salsiccia, friarielli."
    );
    assert!(spoken[3].starts_with("Step 1 of 4."));
    assert!(spoken[6].starts_with("Step 4 of 4."));
    assert!(spoken[7].contains("enjoy your meal"));
    assert_eq!(
        state.screen.session().map(|s| s.progress_label()).as_deref(),
        Some("Step 4 of 4")
    );
}

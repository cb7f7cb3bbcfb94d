use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::BufReader;

use voice_chef::app::{self, AppEvent, AppState, Flow};
use voice_chef::config::Config;
use voice_chef::speech::{MutedSpeech, SpeechOutput, SystemSpeech};
use voice_chef::Catalog;

/// Hands-free cooking companion. Type what you would say: a recipe name,
/// "start", "next", "previous", "read again", "back", "help".
#[derive(Debug, Parser)]
#[command(name = "voice-chef", version, about)]
struct Args {
    /// Don't speak, only print
    #[arg(long)]
    mute: bool,

    /// Open this recipe's page right away
    #[arg(long, value_name = "NAME")]
    recipe: Option<String>,

    /// Print the recipe catalog and exit
    #[arg(long)]
    list: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Voice Chef starting");

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path);

    if args.write_config {
        config.save(&config_path)?;
        println!("Wrote {}", config_path.display());
        return Ok(());
    }

    let catalog = Catalog::builtin()?;

    if args.list {
        print!("{}", app::render_catalog(&catalog));
        return Ok(());
    }

    let speech: Box<dyn SpeechOutput> = if args.mute || !config.speech.enabled {
        Box::new(MutedSpeech)
    } else {
        Box::new(SystemSpeech::new(&config.speech))
    };

    let mut state = AppState::new(catalog, config, speech);

    match args.recipe {
        Some(ref name) => {
            let recipe = state.catalog.lookup(name)?;
            app::enter_recipe_detail(&mut state, recipe, true);
        }
        None => {
            if state.config.speak_on_enter {
                app::handle_event(&mut state, AppEvent::Input("help".into()));
            }
        }
    }

    let (event_tx, event_rx) = async_channel::unbounded::<AppEvent>();

    // Forward stdin lines as utterances
    {
        let sender = event_tx.clone();
        tokio::spawn(async move {
            let mut stdin = BufReader::new(tokio::io::stdin());
            loop {
                match app::read_utterance(&mut stdin).await {
                    Ok(Some(line)) => {
                        if sender.send(AppEvent::Input(line)).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => {
                        let _ = sender.send(AppEvent::InputClosed).await;
                        break;
                    }
                    Err(e) => {
                        log::error!("Failed to read input: {e}");
                        let _ = sender.send(AppEvent::InputClosed).await;
                        break;
                    }
                }
            }
        });
    }

    // One tick per second for step timers
    {
        let sender = event_tx;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.tick().await;
            loop {
                interval.tick().await;
                if sender.send(AppEvent::TimerTick).await.is_err() {
                    break;
                }
            }
        });
    }

    redraw(&state);
    while let Ok(event) = event_rx.recv().await {
        let typed = matches!(event, AppEvent::Input(_));
        let result = match app::handle_event(&mut state, event) {
            Flow::Redraw => draw(&state),
            Flow::Status(line) => status(&line),
            // The user's Enter already moved past the marker
            Flow::Unchanged if typed => prompt(),
            Flow::Unchanged => Ok(()),
            Flow::Quit => break,
        };
        if let Err(e) = result {
            log::warn!("Failed to write to the terminal: {e}");
        }
    }

    log::info!("Voice Chef exiting");
    Ok(())
}

fn redraw(state: &AppState) {
    if let Err(e) = draw(state) {
        log::warn!("Failed to write to the terminal: {e}");
    }
}

fn draw(state: &AppState) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\n{}> ", app::render(state))?;
    stdout.flush()
}

/// Replace the input marker with a status line, then show the marker again.
fn status(line: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\r{line}\n> ")?;
    stdout.flush()
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}

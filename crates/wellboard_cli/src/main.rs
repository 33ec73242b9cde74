use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wellboard_core::{Command, WellboardConfig, WorkflowStep};
use wellboard_memory::{FileStore, Persistence};
use wellboard_reasoning::{create_client, TipGenerator, WellnessSession};

mod commands;
mod render;

use commands::{build_profile, parse_input, Input, ResetScope, HELP};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "wellboard.toml")]
    config: PathBuf,

    /// Directory for saved profile and favorites
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Text generation provider: gemini, openai or mock
    #[arg(long)]
    provider: Option<String>,
}

fn storage_dir(config: &WellboardConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.storage.dir {
        return Ok(dir.clone());
    }
    let base = dirs::data_dir().context("Could not determine a data directory, pass --storage-dir")?;
    Ok(base.join("wellboard"))
}

struct App {
    session: WellnessSession,
    max_favorites: usize,
}

impl App {
    /// Block until any outstanding generation has been applied.
    async fn settle(&mut self) {
        self.session.poll();
        if self.session.is_generating() {
            println!("Generating your personalized tips...");
            self.session.wait_for_generation().await;
        }
    }

    fn dispatch(&mut self, command: Command) {
        if let Err(e) = self.session.dispatch(command) {
            println!("Invalid profile: {e}");
        }
    }

    fn tip_at(&self, n: usize) -> Option<wellboard_core::Tip> {
        render::visible_tips(self.session.state()).get(n - 1).cloned()
    }

    /// Run one input. Returns false when the REPL should exit.
    async fn run(&mut self, input: Input) -> bool {
        match input {
            Input::Quit => return false,
            Input::Help => {
                println!("{HELP}");
                return true;
            }
            Input::Goals => {
                println!("{}", render::render_goals());
                return true;
            }
            Input::Profile { age, gender, goals } => {
                let existing = self.session.state().user_profile.as_ref();
                match build_profile(existing, age, &gender, &goals) {
                    Ok(profile) => self.dispatch(Command::SubmitProfile(profile)),
                    Err(e) => {
                        println!("Invalid profile: {e}");
                        return true;
                    }
                }
            }
            Input::Board => self.dispatch(Command::RequestBoardView),
            Input::Show(n) => match self.tip_at(n) {
                Some(tip) => self.dispatch(Command::SelectTip(tip)),
                None => {
                    println!("There is no tip #{n} here.");
                    return true;
                }
            },
            Input::Details => {
                if self.session.state().current_step != WorkflowStep::TipDetails {
                    println!("Open a tip first with `show <n>`.");
                    return true;
                }
                println!("Loading the full guide...");
                if let Err(e) = self.session.load_details().await {
                    error!("Failed to load tip details: {}", e);
                    println!("Could not load details: {e}");
                }
            }
            Input::Back => self.dispatch(Command::BackFromDetails),
            Input::Fav(n) => match self.tip_at(n) {
                Some(tip) => {
                    let favorites = self.session.state().favorite_tips.len();
                    if !tip.is_favorite && favorites >= self.max_favorites {
                        println!("You already have {favorites} favorites. Remove one first.");
                        return true;
                    }
                    self.dispatch(Command::ToggleFavorite(tip));
                }
                None => {
                    println!("There is no tip #{n} here.");
                    return true;
                }
            },
            Input::Favorites => self.dispatch(Command::RequestFavoritesView),
            Input::Regenerate => self.dispatch(Command::ResetTips),
            Input::Retry => self.dispatch(Command::RetryGeneration),
            Input::Reset(scope) => self.dispatch(match scope {
                ResetScope::Tips => Command::ResetTips,
                ResetScope::Profile => Command::ResetProfile,
                ResetScope::All => Command::ResetAll,
            }),
        }

        self.settle().await;
        println!("{}", render::render_state(self.session.state()));
        true
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = WellboardConfig::load_or_default(&args.config);
    if let Some(provider) = args.provider {
        config.llm.provider = provider;
    }
    if let Some(dir) = args.storage_dir {
        config.storage.dir = Some(dir);
    }

    let dir = storage_dir(&config)?;
    info!("Storing data in {}", dir.display());
    let store = FileStore::open(&dir)
        .with_context(|| format!("Failed to open storage at {}", dir.display()))?;
    let store = Arc::new(Persistence::with_namespace(store, &config.storage.namespace));

    let client = create_client(&config.llm)?;
    let generator = Arc::new(TipGenerator::from_config(client, &config.llm, config.app.max_tips));

    let mut app = App {
        session: WellnessSession::new(store, generator),
        max_favorites: config.app.max_favorites,
    };
    app.session.start();

    println!("{}. Type `help` for commands.", config.app.name);
    app.settle().await;
    println!("{}", render::render_state(app.session.state()));

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("wellboard> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match parse_input(line) {
                    Ok(input) => {
                        if !app.run(input).await {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    Ok(())
}

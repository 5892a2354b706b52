use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use services::{PreferenceService, SessionController, TriviaApiClient};
use storage::repository::Storage;
use trivia_core::model::Category;
use trivia_core::session::Phase;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct Args {
    db_url: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:trivia.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_DB_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("TRIVIA_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://trivia.sqlite3".into(), normalize_sqlite_url);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = args.next().ok_or(ArgsError::MissingValue { flag: "--db" })?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(input.trim().to_string()))
}

fn print_menu(controller: &SessionController) {
    println!();
    println!("=== Quizzical ===");
    println!("Pick a category:");
    for category in Category::ALL {
        println!("  {}", category.label());
    }
    let next_mode = controller.display_mode().toggled();
    println!("Commands: dark (switch to {} mode), quit", next_mode.as_str());
}

fn play_round(controller: &SessionController) -> io::Result<Option<u32>> {
    let mut score = 0_u32;
    for question in controller.questions() {
        println!();
        println!("{}. {}", question.index() + 1, question.text());
        for (slot, answer) in question.displayed_answers().iter().enumerate() {
            println!("   {}) {answer}", slot + 1);
        }
        let choice = loop {
            let Some(input) = read_line("answer [1-4]: ")? else {
                return Ok(None);
            };
            match input.parse::<usize>() {
                Ok(n) if (1..=question.displayed_answers().len()).contains(&n) => break n,
                _ => println!("enter a number between 1 and 4"),
            }
        };
        let picked = &question.displayed_answers()[choice - 1];
        if question.is_correct(picked) {
            score += 1;
            println!("correct!");
        } else {
            println!("wrong — the answer was {}", question.correct_answer());
        }
    }
    println!();
    println!("You scored {score}/{}", controller.questions().len());
    Ok(Some(score))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;

    let preferences = PreferenceService::new(Arc::clone(&storage.preferences));
    let source = Arc::new(TriviaApiClient::new());
    let mut controller = SessionController::start(source, preferences).await?;

    loop {
        match controller.phase() {
            Phase::Menu => {
                print_menu(&controller);
                let Some(input) = read_line("> ")? else {
                    return Ok(());
                };
                match input.as_str() {
                    "quit" | "exit" => return Ok(()),
                    "dark" => {
                        let mode = controller.toggle_dark_mode().await?;
                        println!("display mode: {}", mode.as_str());
                    }
                    "" => {}
                    label => {
                        // Unknown labels are ignored by the controller; only a
                        // failed fetch needs reporting here.
                        if let Err(err) = controller.select_category(label).await {
                            eprintln!("failed to load questions: {err}");
                        } else if controller.phase() == Phase::Menu {
                            println!("unknown category: {label}");
                        }
                    }
                }
            }
            Phase::Playing => {
                if play_round(&controller)?.is_none() {
                    return Ok(());
                }
                let Some(input) = read_line("play again? [replay/menu/quit]: ")? else {
                    return Ok(());
                };
                match input.as_str() {
                    "replay" => {
                        if let Err(err) = controller.replay().await {
                            eprintln!("failed to load questions: {err}");
                        }
                    }
                    "quit" | "exit" => return Ok(()),
                    _ => {
                        if let Err(err) = controller.return_to_menu().await {
                            // Background refresh only; the menu is already up.
                            eprintln!("could not pre-load the next round: {err}");
                        }
                    }
                }
            }
            Phase::Error => {
                let Some(input) = read_line("failed to load, retry? [retry/menu/quit]: ")? else {
                    return Ok(());
                };
                match input.as_str() {
                    "retry" => {
                        if let Err(err) = controller.replay().await {
                            eprintln!("failed to load questions: {err}");
                        }
                    }
                    "quit" | "exit" => return Ok(()),
                    _ => {
                        if let Err(err) = controller.return_to_menu().await {
                            eprintln!("could not pre-load the next round: {err}");
                        }
                    }
                }
            }
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

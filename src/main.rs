use chrono::Utc;
use clap::Parser;

use lockquiz::cli::Cli;
use lockquiz::config::{self, Config};
use lockquiz::session::{Event, QuizSession};
use lockquiz::state::AppState;
use lockquiz::{logging, network, proctor, source, tui, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config file, then env, then flags
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(secret) = cli.secret {
        config.secret = secret;
    }
    if let Some(url) = cli.collector {
        config.collector_url = Some(url);
    }
    if cli.no_shuffle {
        config.shuffle = false;
    }
    config.validate()?;

    if let Some(dir) = config::default_log_dir() {
        if let Err(e) = logging::init(&dir) {
            eprintln!("Warning: {}", e);
        }
    }

    let passcodes = config.passcodes();

    // Proctor side
    if cli.code {
        if cli.watch {
            proctor::watch(&passcodes);
        } else {
            println!("{}", proctor::code_line(&passcodes, Utc::now()));
        }
        return Ok(());
    }

    let quiz_path = source::resolve_quiz_path(&cli.path)?;
    let mut quiz = source::load_quiz(&quiz_path)?;
    tracing::info!(
        quiz = %quiz.quiz_file,
        questions = quiz.questions.len(),
        "quiz loaded"
    );

    if cli.status {
        println!("Quiz: {}", quiz.title);
        println!("Questions: {}", quiz.questions.len());
        println!("Shuffle: {}", if config.shuffle { "on" } else { "off" });
        match &config.collector_url {
            Some(url) => println!("Collector: {}", url),
            None => println!("Collector: not configured"),
        }
        return Ok(());
    }

    let questions = std::mem::take(&mut quiz.questions);
    let mut session = if config.shuffle {
        QuizSession::new(questions, passcodes)
    } else {
        QuizSession::in_order(questions, passcodes)
    };

    // First probe runs before the TUI so the ready screen starts accurate
    let online = network::probe(&config.probe_addr, network::PROBE_TIMEOUT);
    session.handle(Event::ConnectivityChanged(online));
    let net_rx = network::spawn_monitor(
        config.probe_addr.clone(),
        config.probe_interval(),
        online,
    );

    let state = AppState::new(quiz, session, config.collector_url.is_some());
    tui::run_tui(state, net_rx, config.collector_url.clone())
}

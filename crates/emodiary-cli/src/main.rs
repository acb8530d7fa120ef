use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "emodiary", version, about = "EmoDiary CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Burnout analysis of diary entries
    Analyze(commands::analyze::AnalyzeArgs),
    /// Burnout score with its component breakdown
    Score(commands::analyze::ScoreArgs),
    /// Classify a burnout score into a risk band
    Risk {
        /// Score (0-100)
        score: u8,
    },
    /// Self-report burnout questionnaire
    Quiz(commands::quiz::QuizArgs),
    /// Summarise a series of recorded scores
    History {
        /// Scores in the order they were recorded
        #[arg(required = true)]
        scores: Vec<u32>,
    },
    /// CBT reflection exercises
    Cbt {
        #[command(subcommand)]
        action: commands::cbt::CbtAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::run_analyze(args),
        Commands::Score(args) => commands::analyze::run_score(args),
        Commands::Risk { score } => commands::quiz::run_risk(score),
        Commands::Quiz(args) => commands::quiz::run_quiz(args),
        Commands::History { scores } => commands::quiz::run_history(scores),
        Commands::Cbt { action } => commands::cbt::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

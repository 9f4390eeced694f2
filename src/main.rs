use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use audit_quiz::report::TextReport;
use audit_quiz::{Audit, AuditError, DEFAULT_BEST_PRACTICES_PATH, DEFAULT_QUESTIONS_PATH};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, env = "AUDIT_QUESTIONS", default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// JSON file to load the best practices from
    #[arg(short, long, env = "AUDIT_BEST_PRACTICES", default_value = DEFAULT_BEST_PRACTICES_PATH)]
    best_practices: PathBuf,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Answer every question non-interactively (comma-separated option indices)
    /// and print the report instead of opening the terminal UI
    #[arg(short, long, value_delimiter = ',')]
    answers: Option<Vec<usize>>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running audit: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AuditError> {
    init_logging(args.log_file.as_deref(), args.answers.is_some())?;

    let audit = Audit::from_json(&args.questions, &args.best_practices)?;

    match args.answers {
        Some(answers) => {
            let summary = audit.run_scripted(&answers)?;
            print!("{}", TextReport(&summary));
        }
        None => audit.run()?,
    }

    Ok(())
}

/// The terminal UI owns stdout, so logs only go to a file or, in report
/// mode, to stderr.
fn init_logging(log_file: Option<&Path>, report_mode: bool) -> io::Result<()> {
    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(File::create(path)?)),
        ),
        None => None,
    };
    let stderr_layer = (log_file.is_none() && report_mode)
        .then(|| fmt::layer().with_target(false).with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "audit_quiz=info".into()))
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use configuration::{init_tracing, load_config, LogFormat};
use roster::{ClassReport, Gradebook, Ranked, StudentRecord};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

mod render;
mod seed;
mod shell;

/// The main entry point for the gradebook application.
fn main() -> Result<()> {
    // A missing .env file is fine; overrides can also come from the real environment.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    // Held until exit so buffered file logs are flushed.
    let _guard = init_tracing(&config.logging).context("Failed to initialise logging")?;

    let mut book = seed::build_gradebook(&config, !cli.no_seed)?;

    // Execute the appropriate command
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            shell::Shell::new(&mut book, stdin.lock(), stdout.lock())
                .run()
                .context("Terminal I/O failed")?;
        }
        Commands::Demo(args) => handle_demo(&book, args)?,
    }
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An in-memory gradebook for a small class.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults to ./gradebook.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Start with an empty gradebook instead of the configured sample class.
    #[arg(long, global = true)]
    no_seed: bool,

    /// Overrides the configured log format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default).
    Shell,
    /// Print every listing, ranking and statistic for the loaded gradebook and exit.
    Demo(DemoArgs),
}

#[derive(Parser)]
struct DemoArgs {
    /// Emit a JSON document instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Demo Handler
// ==============================================================================

#[derive(Serialize)]
struct SubjectRanking {
    subject: String,
    ranking: Vec<Ranked>,
}

#[derive(Serialize)]
struct DemoReport {
    subjects: Vec<String>,
    students: Vec<StudentRecord>,
    by_average: Vec<Ranked>,
    by_subject: Vec<SubjectRanking>,
    by_name: Vec<StudentRecord>,
    summary: ClassReport,
}

impl DemoReport {
    fn build(book: &Gradebook) -> Result<Self> {
        let by_subject = book
            .subjects()
            .iter()
            .map(|subject| {
                Ok(SubjectRanking {
                    subject: subject.to_string(),
                    ranking: book.rank_by_subject(subject)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            subjects: book.subjects().iter().map(str::to_string).collect(),
            students: book.list_all(),
            by_average: book.rank_by_average(),
            by_subject,
            by_name: book.rank_by_name(),
            summary: book.class_report(),
        })
    }
}

fn handle_demo(book: &Gradebook, args: DemoArgs) -> Result<()> {
    tracing::info!(students = book.len(), json = args.json, "Running demo report");
    let report = DemoReport::build(book)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
        return Ok(());
    }

    println!("ALL STUDENTS");
    println!("{}", render::students_table(book.subjects(), &report.students));

    println!("\nSTUDENTS SORTED BY AVERAGE (Highest to Lowest)");
    println!("{}", render::ranked_table("Average", &report.by_average));

    for entry in &report.by_subject {
        println!(
            "\nSTUDENTS SORTED BY {} (Highest to Lowest)",
            entry.subject.to_uppercase()
        );
        if entry.ranking.is_empty() {
            println!("No students have grades for {} yet.", entry.subject);
        } else {
            println!("{}", render::ranked_table(&entry.subject, &entry.ranking));
        }
    }

    println!("\nSTUDENTS SORTED BY NAME (A to Z)");
    println!("{}", render::names_table(&report.by_name));

    println!("\nCLASS SUMMARY");
    println!("{}", render::class_report_table(&report.summary));
    println!("{}", render::class_summary_line(&report.summary));
    Ok(())
}

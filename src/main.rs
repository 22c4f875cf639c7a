use clap::{Parser, Subcommand};
use risq_core::{config::Config, docs, feedback::FeedbackLog, search, Dataset};
use risq_mapper::render;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "risq", about = "RISQ inspection-item lookup")]
struct Cli {
    /// Path to the dataset JSON file (overrides config).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Write debug logs to /tmp/risq-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a single item by its exact RISQ number.
    Lookup { no: String },
    /// Case-insensitive keyword search across all text fields.
    Search { keyword: String },
    /// List the document attachments for an item.
    Docs { no: String },
    /// Append to or print the feedback log.
    Feedback {
        #[command(subcommand)]
        action: FeedbackAction,
    },
}

#[derive(Subcommand)]
enum FeedbackAction {
    /// Append a feedback entry.
    Add { text: String },
    /// Print the accumulated feedback log.
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/risq-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("risq debug log started — tail -f /tmp/risq-debug.log");
    }

    let Some(command) = cli.command else {
        return risq_tui::run(cli.data);
    };

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config load failed, using defaults");
        Config::defaults()
    });
    let data_path = cli.data.unwrap_or_else(|| config.data.file.clone());

    match command {
        Command::Lookup { no } => {
            let dataset = Dataset::from_path(&data_path)?;
            match dataset.get(&no) {
                Some(record) => {
                    print!("{}", render::record(record, "", config.ui.show_section_labels));
                }
                None => {
                    println!("no data for RISQ {no}");
                    std::process::exit(1);
                }
            }
        }
        Command::Search { keyword } => {
            let dataset = Dataset::from_path(&data_path)?;
            let hits = search::keyword_search(&dataset, &keyword);
            if hits.is_empty() {
                println!("no matching items");
                std::process::exit(1);
            }
            for hit in &hits {
                println!("{}", render::hit_line(hit, config.ui.show_section_labels));
            }
        }
        Command::Docs { no } => {
            let names: Vec<String> = docs::list_documents(&config.data.docs_dir, &no)
                .into_iter()
                .map(|d| d.name)
                .collect();
            print!("{}", render::documents(&no, &names));
        }
        Command::Feedback { action } => {
            let log = FeedbackLog::new(config.data.feedback_file.clone());
            match action {
                FeedbackAction::Add { text } => {
                    log.append(&text)?;
                    println!("feedback recorded");
                }
                FeedbackAction::Show => match log.read_all()? {
                    Some(contents) => print!("{contents}"),
                    None => println!("no feedback yet"),
                },
            }
        }
    }

    Ok(())
}

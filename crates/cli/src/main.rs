use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use topic_cli::input;
use topic_cli::render::{self, Format, TaxonomyChoice, WordListChoice};
use topic_core::batch;
use topic_core::config;
use topic_core::config::AppConfig;
use topic_core::lexicon::SAMPLE_TRANSCRIPT;
use topic_core::Lexicon;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(path) = cli.wordlist {
        cfg.wordlist.path = Some(path);
    }
    let lexicon = Lexicon::from_config(&cfg.wordlist)?;

    match cli.command {
        Commands::Classify {
            text,
            file,
            taxonomy,
        } => {
            let text = input::read_text(text, file.as_deref())?;
            print_json(&render::classification(&lexicon, &text, taxonomy)?)
        }
        Commands::Competition { text, file } => {
            let text = input::read_text(text, file.as_deref())?;
            print_json(&render::competition(&lexicon, &text)?)
        }
        Commands::Wordlists { list, format } => {
            render::word_lists(&lexicon, list, format, io::stdout().lock())
        }
        Commands::Batch {
            input,
            output,
            column,
        } => run_batch(&cfg, &lexicon, input, output, column),
        Commands::Demo => {
            for line in render::demo_lines(&lexicon, SAMPLE_TRANSCRIPT) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(name = "topic")]
#[command(about = "Lexicon-based strategy topic and competition classifier", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    /// Word list CSV for the loaded (mpr) taxonomy; overrides the config
    #[arg(long, global = true)]
    wordlist: Option<String>,

    /// Debug logging on stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flag the taxonomy domains present in a text
    Classify {
        /// Text to classify (otherwise --file or stdin)
        #[arg(long)]
        text: Option<String>,
        /// Read the text from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Which taxonomy to evaluate
        #[arg(long, value_enum, default_value_t = TaxonomyChoice::Kls)]
        taxonomy: TaxonomyChoice,
    },
    /// Detect the first competition mention and its negation context
    Competition {
        /// Text to inspect (otherwise --file or stdin)
        #[arg(long)]
        text: Option<String>,
        /// Read the text from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print a word list as a table
    Wordlists {
        #[arg(value_enum, default_value_t = WordListChoice::Kls)]
        list: WordListChoice,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Classify a text column of a CSV file and append result columns
    Batch {
        /// Input CSV with a header row
        #[arg(long)]
        input: PathBuf,
        /// Output CSV; stdout if omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// Text column name; defaults to batch.text_column
        #[arg(long)]
        column: Option<String>,
    },
    /// Run every classifier on the built-in earnings-call excerpt
    Demo,
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_batch(
    cfg: &AppConfig,
    lexicon: &Lexicon,
    input: PathBuf,
    output: Option<PathBuf>,
    column: Option<String>,
) -> Result<()> {
    let column = column.unwrap_or_else(|| cfg.batch.text_column.clone());
    let reader = BufReader::new(
        File::open(&input).with_context(|| format!("Failed to open batch input {:?}", input))?,
    );
    match output {
        Some(path) => {
            let writer = BufWriter::new(
                File::create(&path)
                    .with_context(|| format!("Failed to create batch output {:?}", path))?,
            );
            let summary = batch::run(lexicon, reader, writer, &column)?;
            println!(
                "batch: {} rows, {} competition mentions ({} excluded) -> {}",
                summary.rows,
                summary.competition_mentions,
                summary.excluded_mentions,
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            batch::run(lexicon, reader, &mut stdout, &column)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

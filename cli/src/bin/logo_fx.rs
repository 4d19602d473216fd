use clap::Parser;
use cli::{run_batch, run_single, DEFAULT_BATCH_DIR, DEFAULT_INPUT, DEFAULT_OUTPUT};
use color_eyre::eyre::Result;
use logo_fx::RuleSet;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Turn logos into transparent white/glowing variants", long_about = None)]
struct Cli {
    /// Process every image in --dir instead of the single default logo
    #[arg(long)]
    batch: bool,

    /// Input logo for single mode
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Base output path for single mode; each preset appends its name
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Directory scanned in batch mode
    #[arg(short, long, default_value = DEFAULT_BATCH_DIR)]
    dir: PathBuf,

    /// Filename rules for batch mode (.toml or .json); built-in rules if omitted
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Print the JSON schema of the rule file format and exit
    #[arg(long)]
    print_rules_schema: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    if cli.print_rules_schema {
        println!("{}", serde_json::to_string_pretty(&RuleSet::schema())?);
        return Ok(());
    }

    if cli.batch {
        let report = run_batch(&cli.dir, cli.rules.as_deref())?;
        info!("✅ {} of {} files processed", report.processed(), report.outcomes.len());
    } else {
        let outputs = run_single(&cli.input, &cli.output)?;
        info!("✅ {} variants written", outputs.len());
    }

    Ok(())
}

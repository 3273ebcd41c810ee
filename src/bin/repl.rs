use clap::Parser;
use dice_notation::{CopyFormat, History, RollContext, RollOutcome, Roller, Settings};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Roll dice notation read from stdin, one expression per line.
#[derive(Parser, Debug)]
#[command(name = "repl", version)]
struct Args {
    /// TOML file with saved preferences
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read d10s as 0-9
    #[arg(long)]
    zero_based_d10: bool,

    /// Read d100s as 0-99
    #[arg(long)]
    zero_based_d100: bool,

    /// Seed the dice for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// What to print for each roll
    #[arg(long, value_enum)]
    format: Option<CopyFormat>,

    /// Don't keep a roll history
    #[arg(long)]
    no_history: bool,
}

impl Args {
    fn settings(&self) -> Result<Settings, Box<dyn std::error::Error>> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        settings.zero_based_d10 |= self.zero_based_d10;
        settings.zero_based_d100 |= self.zero_based_d100;
        settings.history_enabled &= !self.no_history;
        if let Some(format) = self.format {
            settings.copy_format = format;
        }
        Ok(settings)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.settings()?;
    info!(?settings, seed = ?args.seed, "starting");

    match args.seed {
        Some(seed) => run(RollContext::new(settings.roll_options(), StdRng::seed_from_u64(seed)), &settings),
        None => run(RollContext::new(settings.roll_options(), rand::thread_rng()), &settings),
    }
}

fn run<R: Roller>(mut ctx: RollContext<R>, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut history = History::default();
    history.set_enabled(settings.history_enabled);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            ":history" => {
                for outcome in history.iter() {
                    println!("{}  {}", outcome.created_at().format("%H:%M:%S"), outcome.input());
                    println!("    {}", settings.copy_format.render(outcome));
                }
            }
            ":clear" => history.clear(),
            input => {
                let outcome = ctx.eval(input);
                report(&outcome, settings.copy_format);
                history.record(outcome);
            }
        }
        print!("> ");
        stdout.flush()?;
    }
    Ok(())
}

fn report(outcome: &RollOutcome, format: CopyFormat) {
    println!("{}", format.render(outcome));
    for invalid in outcome.invalid_terms() {
        eprintln!("error: {:?}: {}", invalid.raw(), invalid.error());
    }
}

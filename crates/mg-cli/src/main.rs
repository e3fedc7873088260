//! CLI frontend for the mausgen character generator.

mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use mg_character::{Generator, GeneratorConfig, Profile};
use mg_mechanics::Attribute;
use mg_tables::TableSet;

use error::CliError;
use output::Format;

#[derive(Parser)]
#[command(
    name = "mausgen",
    about = "Roll up a Mausritter mouse, rerolling until it meets your minimums",
    version
)]
struct Cli {
    /// Minimum STR (at most 12)
    #[arg(long = "minSTR", value_name = "N", allow_negative_numbers = true)]
    min_str: Option<i64>,

    /// Minimum DEX (at most 12)
    #[arg(long = "minDEX", value_name = "N", allow_negative_numbers = true)]
    min_dex: Option<i64>,

    /// Minimum WIL (at most 12)
    #[arg(long = "minWIL", value_name = "N", allow_negative_numbers = true)]
    min_wil: Option<i64>,

    /// Minimum HP (at most 6)
    #[arg(long = "minHP", value_name = "N", allow_negative_numbers = true)]
    min_hp: Option<i64>,

    /// Minimum Pips (at most 6)
    #[arg(long = "minPIPS", value_name = "N", allow_negative_numbers = true)]
    min_pips: Option<i64>,

    /// Threshold preset; the --min* flags override single values
    #[arg(short, long, value_enum, default_value_t = ProfileArg::Standard)]
    profile: ProfileArg,

    /// Directory holding birthsigns.json, coat.json, detail.json and background.json
    /// (default: built-in tables)
    #[arg(short, long, value_name = "DIR")]
    tables: Option<PathBuf>,

    /// RNG seed for a reproducible mouse
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// STR/DEX/WIL >= 2, HP/Pips >= 1
    Standard,
    /// STR/DEX/WIL >= 9, HP/Pips >= 3
    Hardy,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Standard => Profile::Standard,
            ProfileArg::Hardy => Profile::Hardy,
        }
    }
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let overrides = [
            (Attribute::Str, self.min_str),
            (Attribute::Dex, self.min_dex),
            (Attribute::Wil, self.min_wil),
            (Attribute::Hp, self.min_hp),
            (Attribute::Pips, self.min_pips),
        ];
        overrides.into_iter().fold(
            GeneratorConfig::default().with_profile(self.profile.into()),
            |config, (attribute, minimum)| match minimum {
                Some(minimum) => config.with_minimum(attribute, clamp_minimum(minimum)),
                None => config,
            },
        )
    }
}

/// Negative minimums always hold, so they become 0. Values past `u32` can
/// never be rolled and saturate so validation still rejects them.
fn clamp_minimum(minimum: i64) -> u32 {
    u32::try_from(minimum.max(0)).unwrap_or(u32::MAX)
}

/// Parse the command line. Usage errors exit with 1; exit code 2 is
/// reserved for unreachable HP/Pips minimums.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // clap renders its own `error:` line.
            let _ = e.print();
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.config();
    // Reject unreachable minimums before touching the tables or the dice.
    config.validate()?;
    tracing::debug!(thresholds = ?config.thresholds, "validated thresholds");

    let tables = match &cli.tables {
        Some(dir) => TableSet::load_dir(dir)?,
        None => TableSet::builtin()?,
    };
    let generator = Generator::new(config, tables)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mouse = generator.generate(&mut rng)?;
    output::print(&mouse, cli.format)
}

fn main() {
    let cli = parse_args();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(e.exit_code());
    }
}

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use schoolmeal_client::{ClientConfig, FetchOutcome, MealClient, normalize_response};
use schoolmeal_core::{OutputFormat, format_menus};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "schoolmeal")]
#[command(about = "Fetch and parse school lunch menus from the NEIS open-data API")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// YAML config file with api_key, office_code, school_code.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// API key (overrides the config file).
    #[arg(long, env = "SCHOOLMEAL_API_KEY", hide_env_values = true, global = true)]
    key: Option<String>,
    /// Education office code, e.g. B10.
    #[arg(long, global = true)]
    office: Option<String>,
    /// School code, e.g. 7010536.
    #[arg(long, global = true)]
    school: Option<String>,
    /// Output format.
    #[arg(long, default_value = "json", global = true)]
    format: OutputFormat,
    /// Log requests and skipped records to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Menu for a single date.
    Day(DateArgs),
    /// Today's menu.
    Today,
    /// Menu for the day after --date (default: today).
    Tomorrow(BaseDateArgs),
    /// Menu for the day before --date (default: today).
    Yesterday(BaseDateArgs),
    /// Monday to Friday of the week containing --date (default: today).
    Week(BaseDateArgs),
    /// Whole month containing --date (default: today).
    Month(BaseDateArgs),
    /// Every menu between two dates, inclusive.
    Range(RangeArgs),
    /// Parse a saved API response without any network access.
    ParseFile(ParseFileArgs),
}

#[derive(Debug, Args)]
struct DateArgs {
    /// Date as YYYY-MM-DD.
    #[arg(long)]
    date: NaiveDate,
}

#[derive(Debug, Args)]
struct BaseDateArgs {
    /// Base date as YYYY-MM-DD.
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Args)]
struct RangeArgs {
    /// First date as YYYY-MM-DD.
    #[arg(long)]
    from: NaiveDate,
    /// Last date as YYYY-MM-DD.
    #[arg(long)]
    to: NaiveDate,
}

#[derive(Debug, Args)]
struct ParseFileArgs {
    /// Path to a JSON response body, or `-` for stdin.
    #[arg(long)]
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Command::Day(args) => run_fetch(global, |client| client.fetch_day(args.date)),
        Command::Today => run_fetch(global, |client| client.today()),
        Command::Tomorrow(args) => run_fetch(global, |client| client.tomorrow(args.date)),
        Command::Yesterday(args) => run_fetch(global, |client| client.yesterday(args.date)),
        Command::Week(args) => run_fetch(global, |client| client.week(args.date)),
        Command::Month(args) => run_fetch(global, |client| client.month(args.date)),
        Command::Range(args) => run_fetch(global, |client| client.fetch_range(args.from, args.to)),
        Command::ParseFile(args) => run_parse_file(global, args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(global: &GlobalArgs) -> Result<ClientConfig, String> {
    let mut config = match &global.config {
        Some(path) => ClientConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(key) = &global.key {
        config.api_key = key.clone();
    }
    if let Some(office) = &global.office {
        config.office_code = office.clone();
    }
    if let Some(school) = &global.school {
        config.school_code = school.clone();
    }
    Ok(config)
}

fn run_fetch<F>(global: &GlobalArgs, fetch: F) -> Result<(), String>
where
    F: FnOnce(&MealClient) -> schoolmeal_client::Result<FetchOutcome>,
{
    let config = load_config(global)?;
    debug!(office = %config.office_code, school = %config.school_code, "resolved config");
    let client = MealClient::new(config).map_err(|e| e.to_string())?;
    let outcome = fetch(&client).map_err(|e| e.to_string())?;

    print_outcome(&outcome, global.format)
}

fn run_parse_file(global: &GlobalArgs, args: ParseFileArgs) -> Result<(), String> {
    let body = if args.input.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|err| format!("Failed to read stdin: {err}"))?;
        body
    } else {
        fs::read_to_string(&args.input)
            .map_err(|err| format!("Failed to read '{}': {err}", args.input.display()))?
    };

    let outcome = normalize_response(&body).map_err(|e| e.to_string())?;
    print_outcome(&outcome, global.format)
}

fn print_outcome(outcome: &FetchOutcome, format: OutputFormat) -> Result<(), String> {
    if let FetchOutcome::NotFound { code, message } = outcome {
        eprintln!("No meal data ({code}): {message}");
    }

    let menus = outcome.menus();
    let skipped = outcome.records().len() - menus.len();
    if skipped > 0 {
        eprintln!("Skipped {skipped} record(s) with a missing or malformed date.");
    }

    let raw = format_menus(&menus, format)?;
    print!("{raw}");
    if !raw.ends_with('\n') {
        println!();
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use manat_format::cli::{month_table, render_operations_file};
use manat_format::config::{FormatPaths, Settings};
use manat_format::models::{next_month, previous_month, Locale, MonthId};

#[derive(Parser)]
#[command(
    name = "manat",
    version,
    about = "Locale-aware currency and date formatting",
    long_about = "Formats minor-unit amounts, backend timestamps and YYYY-MM months \
                  the way the finance tracker displays them."
)]
struct Cli {
    /// Display locale (ru, az, en); overrides settings
    #[arg(long, global = true, env = "MANAT_LOCALE")]
    locale: Option<String>,

    /// Offset from UTC in minutes; overrides settings (default: system zone)
    #[arg(long, global = true, allow_negative_numbers = true)]
    utc_offset: Option<i32>,

    /// Currency symbol; overrides settings
    #[arg(long, global = true)]
    symbol: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an amount given in minor units
    Currency {
        /// Amount in minor units (150 = 1.50)
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Print the decomposed parts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format a date as a long localized date
    Date { input: String },

    /// Format a timestamp as DD.MM.YY [- HH:MM]
    #[command(alias = "dt")]
    Datetime { input: String },

    /// Format a YYYY-MM month as a localized label
    Month { month: String },

    /// Print the current month
    Current,

    /// Print the month before the given one
    Prev { month: String },

    /// Print the month after the given one
    Next { month: String },

    /// Show a table of consecutive months
    Months {
        /// First month (defaults to the current month)
        #[arg(short, long)]
        from: Option<String>,
        /// Number of months
        #[arg(short, long, default_value = "12")]
        count: usize,
    },

    /// Render an operations CSV export (date,amount_minor[,description])
    Render { file: PathBuf },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    // RUST_LOG=debug shows cache fills and degraded inputs
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let paths = FormatPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(tag) = &cli.locale {
        settings.locale = Locale::parse(tag)?;
    }
    if let Some(minutes) = cli.utc_offset {
        settings.utc_offset_minutes = Some(minutes);
    }
    if let Some(symbol) = &cli.symbol {
        settings.currency_symbol = symbol.clone();
    }

    let ctx = settings.context()?;
    let formatter = settings.formatter();

    match cli.command {
        Some(Commands::Currency { amount, json }) => {
            if json {
                let parts = formatter.currency_parts(amount, &ctx);
                println!("{}", serde_json::to_string_pretty(&parts)?);
            } else {
                println!("{}", formatter.currency(amount, &ctx));
            }
        }
        Some(Commands::Date { input }) => println!("{}", formatter.date(&input, &ctx)),
        Some(Commands::Datetime { input }) => println!("{}", formatter.date_time(&input, &ctx)),
        Some(Commands::Month { month }) => println!("{}", formatter.month(&month, &ctx)),
        Some(Commands::Current) => println!("{}", formatter.current_month(&ctx)),
        Some(Commands::Prev { month }) => println!("{}", previous_month(&month)?),
        Some(Commands::Next { month }) => println!("{}", next_month(&month)?),
        Some(Commands::Months { from, count }) => {
            let start = match from {
                Some(month) => MonthId::parse(&month)?,
                None => formatter.current_month(&ctx),
            };
            println!("{}", month_table(start, count, &ctx));
        }
        Some(Commands::Render { file }) => {
            let table = render_operations_file(&file, &formatter, &ctx)
                .with_context(|| format!("Failed to render {}", file.display()))?;
            println!("{}", table);
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("manat-format configuration");
            println!("==========================");
            println!("Config directory: {}", paths.base_dir().display());
            let written = if paths.is_initialized() { "" } else { " (not written, run 'manat init')" };
            println!("Settings file:    {}{}", paths.settings_file().display(), written);
            println!();
            println!("Settings:");
            println!("  Locale:          {}", settings.locale);
            println!("  Currency symbol: {}", settings.currency_symbol);
            let source = if settings.utc_offset_minutes.is_some() { "" } else { " (system)" };
            println!("  UTC offset:      {}{}", ctx.timezone, source);
        }
        None => {
            println!("manat - currency and date display formatting");
            println!();
            println!("Run 'manat --help' for usage information.");
        }
    }

    Ok(())
}

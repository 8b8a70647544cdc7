use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromatemp::models::{
    parse_color, sample_table, AppConfig, ColorEntry, OutputFormat, TemperatureReport,
};
use chromatemp::TemperatureCache;

#[derive(Parser)]
#[command(name = "chromatemp")]
#[command(about = "Warm/cool color temperature, analogous and complementary colors in HCT")]
struct Cli {
    /// Config file (defaults to $CHROMATEMP_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Coldest, warmest, complement and analogous colors of a color
    Analyze {
        /// Color as #RRGGBB, #RGB or hct(H, C, T)
        color: String,
    },
    /// Colors next to the input, evenly spaced by temperature
    Analogous {
        /// Color as #RRGGBB, #RGB or hct(H, C, T)
        color: String,

        /// Number of colors, input included (config default: 5)
        #[arg(short, long)]
        count: Option<usize>,

        /// Number of sections of the color wheel (config default: 12)
        #[arg(short, long)]
        divisions: Option<usize>,
    },
    /// Temperature-balanced complement of a color
    Complement {
        /// Color as #RRGGBB, #RGB or hct(H, C, T)
        color: String,
    },
    /// Hue/temperature table at the color's chroma and tone
    Samples {
        /// Color as #RRGGBB, #RGB or hct(H, C, T)
        color: String,

        /// Hue step in degrees
        #[arg(short, long, default_value_t = 15)]
        step: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromatemp=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let Some(command) = cli.command else {
        println!("chromatemp - color temperature in HCT");
        println!();
        println!("Usage: chromatemp [--config FILE] [--json] <COMMAND> <COLOR>");
        println!("Commands: analyze, analogous, complement, samples");
        println!("Run 'chromatemp --help' for details.");
        return Ok(());
    };

    let config = AppConfig::load(cli.config.as_deref());
    let output = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    match command {
        Commands::Analyze { color } => {
            let cache = cache_for(&color)?;
            let report = TemperatureReport::build(
                &cache,
                config.analogous.count,
                config.analogous.divisions,
            )
            .context("Failed to build report")?;
            match output {
                OutputFormat::Json => println!("{}", report.to_json()?),
                OutputFormat::Text => print!("{report}"),
            }
        }
        Commands::Analogous {
            color,
            count,
            divisions,
        } => {
            let cache = cache_for(&color)?;
            let count = count.unwrap_or(config.analogous.count);
            let divisions = divisions.unwrap_or(config.analogous.divisions);
            let entries: Vec<ColorEntry> = cache
                .analogous(count, divisions)?
                .iter()
                .map(|hct| ColorEntry::new(&cache, hct))
                .collect();
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
                OutputFormat::Text => entries.iter().for_each(|entry| println!("{entry}")),
            }
        }
        Commands::Complement { color } => {
            let cache = cache_for(&color)?;
            let entry = ColorEntry::new(&cache, &cache.complement());
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entry)?),
                OutputFormat::Text => println!("{entry}"),
            }
        }
        Commands::Samples { color, step } => {
            let cache = cache_for(&color)?;
            let rows = sample_table(&cache, step)?;
            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
                OutputFormat::Text => rows.iter().for_each(|row| println!("{row}")),
            }
        }
    }

    Ok(())
}

fn cache_for(color: &str) -> anyhow::Result<TemperatureCache> {
    let hct = parse_color(color).with_context(|| format!("Invalid color {color:?}"))?;
    tracing::debug!(
        hex = %hct.to_argb(),
        hue = hct.hue(),
        chroma = hct.chroma(),
        tone = hct.tone(),
        "Parsed input color"
    );
    Ok(TemperatureCache::new(hct))
}

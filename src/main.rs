//! CLI entry point for the FARS explorer.
//!
//! Provides subcommands for naming yearly accident files, summarizing
//! accidents per month across years, plotting a state's accidents, and
//! listing the states present in a year.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fars_explorer::config::AppConfig;
use fars_explorer::output::{SummaryFormat, print_pretty, render, write_summary_file};
use fars_explorer::plot::{PlotOutcome, SvgRenderer};
use fars_explorer::states::{state_abbr, state_label};
use fars_explorer::{Dataset, format_filename};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fars_explorer")]
#[command(about = "Summarize and map FARS fatal accident records", long_about = None)]
struct Cli {
    /// Directory holding the accident_<year>.csv.bz2 files
    #[arg(long, global = true, env = "FARS_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the file name used for a year
    Filename {
        #[arg(value_name = "YEAR")]
        year: i32,
    },
    /// Count accidents per month for one or more years
    Summarize {
        #[arg(value_name = "YEAR", required = true)]
        years: Vec<i32>,

        /// Output format, for stdout and for --output alike
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Table)]
        format: SummaryFormat,

        /// Write the summary to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a state's accidents for a year as an SVG map
    Plot {
        /// Numeric STATE code, e.g. 1 for Alabama
        #[arg(value_name = "STATE")]
        state: u32,

        #[arg(value_name = "YEAR")]
        year: i32,

        /// SVG file to write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the state codes present in a year with their accident counts
    States {
        #[arg(value_name = "YEAR")]
        year: i32,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.data_dir.clone())?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = config
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("fars_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let dataset = Dataset::new(&config.data_dir);

    match cli.command {
        Commands::Filename { year } => {
            println!("{}", format_filename(year));
        }
        Commands::Summarize {
            years,
            format,
            output,
        } => {
            summarize(&dataset, &years, format, output.as_deref())?;
        }
        Commands::Plot {
            state,
            year,
            output,
        } => {
            let output =
                output.unwrap_or_else(|| PathBuf::from(format!("accidents_{state}_{year}.svg")));
            plot(&dataset, &config, state, year, output)?;
        }
        Commands::States { year } => {
            let table = dataset.load_year(year).with_context(|| {
                format!(
                    "loading accidents for {year} from {}",
                    dataset.data_dir().display()
                )
            })?;

            for (code, count) in table.state_counts() {
                println!(
                    "{code:>3}  {:<2}  {:<22} {count}",
                    state_abbr(code).unwrap_or("--"),
                    state_label(code)
                );
            }
        }
    }

    Ok(())
}

/// Builds the month × year table and prints or saves it.
#[tracing::instrument(skip(dataset, format, output))]
fn summarize(
    dataset: &Dataset,
    years: &[i32],
    format: SummaryFormat,
    output: Option<&Path>,
) -> Result<()> {
    let summary = dataset
        .summarize_years(years.iter().copied())
        .with_context(|| {
            format!(
                "summarizing years {years:?} in {}",
                dataset.data_dir().display()
            )
        })?;
    print_pretty(&summary);

    if let Some(path) = output {
        write_summary_file(path, &summary, format)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), ?format, "Summary written");
        return Ok(());
    }

    print!("{}", render(&summary, format)?);
    Ok(())
}

/// Renders one state's accidents to an SVG file.
#[tracing::instrument(skip(dataset, config, output), fields(output = %output.display()))]
fn plot(
    dataset: &Dataset,
    config: &AppConfig,
    state: u32,
    year: i32,
    output: PathBuf,
) -> Result<()> {
    let mut renderer = SvgRenderer::new(output, config.plot_width, config.plot_height);

    let outcome = dataset
        .plot_state(state, year, &mut renderer)
        .with_context(|| format!("plotting state {state} for {year}"))?;

    match outcome {
        PlotOutcome::Rendered { points, skipped, .. } => {
            println!(
                "wrote {} ({points} accidents, {skipped} without location)",
                renderer.output().display()
            );
        }
        PlotOutcome::NoAccidents => println!("no accidents to plot"),
        PlotOutcome::NoLocations { records } => {
            println!("no accidents to plot ({records} without location)");
        }
    }
    Ok(())
}

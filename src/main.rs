mod cli;

use clap::Parser;
use pkd_calc::calc::compare::compare_splits;
use pkd_calc::calc::ranking::BoostFilter;
use pkd_calc::calc::rank_sequence;
use pkd_calc::calc::sequence::StageSequence;
use pkd_calc::config;
use pkd_calc::error::CalcError;
use pkd_calc::report::{self, ComparisonReport, OutputFormat, SeedReport};
use pkd_calc::table::splits::{load_splits, table_from_splits, Splits};
use pkd_calc::table::TimingTable;
use pkd_calc::types::config::{BoostsSetting, FormatSetting, PkdConfig};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(flag: Option<cli::ReportFormat>, configured: FormatSetting) -> OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => match configured {
            FormatSetting::Json => OutputFormat::Json,
            FormatSetting::Md => OutputFormat::Md,
        },
    }
}

fn boost_filter(flag: Option<cli::Boosts>, configured: BoostsSetting) -> BoostFilter {
    match flag {
        Some(cli::Boosts::Any) => BoostFilter::Any,
        Some(cli::Boosts::Two) => BoostFilter::Two,
        Some(cli::Boosts::Three) => BoostFilter::Three,
        None => match configured {
            BoostsSetting::Any => BoostFilter::Any,
            BoostsSetting::Two => BoostFilter::Two,
            BoostsSetting::Three => BoostFilter::Three,
        },
    }
}

/// Personal table from a splits file and/or inline config rooms. `None` when
/// neither is present.
fn personal_table(
    config_dir: &Path,
    flag: Option<&Path>,
    cfg: &PkdConfig,
) -> Result<Option<TimingTable>, CalcError> {
    let from_file = match flag {
        Some(path) => Some(load_splits(path)?),
        None => match cfg.splits_path() {
            Some(path) => Some(load_splits(&config::resolve_config_path(config_dir, path))?),
            None => None,
        },
    };
    let layers = from_file
        .iter()
        .chain(cfg.inline_splits())
        .collect::<Vec<&Splits>>();
    if layers.is_empty() {
        return Ok(None);
    }
    debug!(layers = layers.len(), "building personal timing table");
    Ok(Some(table_from_splits(layers)?))
}

fn run() -> Result<i32, CalcError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Calc(cmd) => {
            let cfg = config::load_config(&cmd.config_dir)?.unwrap_or_default();
            let settings = cfg.output_settings();
            let custom = personal_table(&cmd.config_dir, cmd.splits.as_deref(), &cfg)?;
            let table = custom.as_ref().unwrap_or(TimingTable::builtin());

            let sequence = StageSequence::resolve(&cmd.rooms, table)?;
            let ranked = rank_sequence(&sequence)?;
            let mut results = boost_filter(cmd.boosts, settings.boosts).apply(ranked);
            let limit = cmd
                .limit
                .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
                .unwrap_or(settings.limit);
            results.truncate(limit);
            info!(shown = results.len(), "rendering seed report");

            let seed_report = SeedReport {
                sequence,
                results,
                detail: cmd.detail || settings.detail,
            };
            let rendered =
                report::render(&seed_report, output_format(cmd.format, settings.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Compare(cmd) => {
            let cfg = config::load_config(&cmd.config_dir)?.unwrap_or_default();
            let settings = cfg.output_settings();
            let personal = personal_table(&cmd.config_dir, Some(cmd.splits.as_path()), &cfg)?
                .ok_or_else(|| CalcError::InvalidTimingTable("no personal splits".to_string()))?;

            let reference = TimingTable::builtin();
            let comparison = compare_splits(&cmd.rooms, reference, &personal)?;
            let comparison_report = ComparisonReport {
                sequence: StageSequence::resolve(&cmd.rooms, reference)?,
                personal_sequence: StageSequence::resolve(&cmd.rooms, &personal)?,
                comparison,
            };
            let rendered = report::render_comparison(
                &comparison_report,
                output_format(cmd.format, settings.format),
            )?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rooms => {
            for name in TimingTable::builtin().room_names() {
                println!("{name}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

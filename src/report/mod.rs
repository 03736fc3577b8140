pub mod json;
pub mod md;

use crate::calc::compare::SplitComparison;
use crate::calc::sequence::StageSequence;
use crate::error::CalcError;
use crate::types::result::{BoostPlacement, SeedResult};
use crate::types::room::BoostStrat;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// Ranked routes for one seed, ready to render.
#[derive(Debug, Clone)]
pub struct SeedReport<'t> {
    pub sequence: StageSequence<'t>,
    pub results: Vec<SeedResult>,
    /// Include the per-room breakdown of every shown route.
    pub detail: bool,
}

/// `sequence` is resolved against the reference table and names the best
/// route; `personal_sequence` is resolved against the player's table.
#[derive(Debug, Clone)]
pub struct ComparisonReport<'t> {
    pub sequence: StageSequence<'t>,
    pub personal_sequence: StageSequence<'t>,
    pub comparison: SplitComparison,
}

pub fn render(report: &SeedReport<'_>, format: OutputFormat) -> Result<String, CalcError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CalcError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_comparison(
    report: &ComparisonReport<'_>,
    format: OutputFormat,
) -> Result<String, CalcError> {
    match format {
        OutputFormat::Json => json::comparison_to_json(report).map_err(CalcError::Json),
        OutputFormat::Md => Ok(md::comparison_to_markdown(report)),
    }
}

/// `m:ss.s` from a minute up, `s.s` below.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds as i64) / 60;
    let remaining = seconds - (minutes * 60) as f64;
    if minutes > 0 {
        format!("{minutes}:{remaining:04.1}")
    } else {
        format!("{remaining:.1}")
    }
}

pub(crate) fn rounded_pacelock(pacelock: f64) -> f64 {
    (pacelock * 10.0).round() / 10.0
}

pub(crate) fn placed_strat<'t>(
    sequence: &StageSequence<'t>,
    placement: &BoostPlacement,
) -> Option<&'t BoostStrat> {
    sequence
        .room(placement.index)
        .boost_strats
        .get(placement.strat_index)
}

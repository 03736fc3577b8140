use crate::calc::compute_ranked_custom;
use crate::error::{CalcError, Result};
use crate::table::TimingTable;
use crate::types::result::SeedResult;

/// Best route under the reference splits next to the best under a player's own.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitComparison {
    pub best: SeedResult,
    pub personal: SeedResult,
}

impl SplitComparison {
    /// The personal boosted time, or `None` when boosting does not beat the
    /// player's own boostless time.
    pub fn personal_boost_time(&self) -> Option<f64> {
        (self.personal.boost_time < self.personal.boostless_time)
            .then_some(self.personal.boost_time)
    }
}

fn top(results: Vec<SeedResult>, phase: &'static str) -> Result<SeedResult> {
    results
        .into_iter()
        .next()
        .ok_or(CalcError::EmptySearchResult(phase))
}

pub fn compare_splits<S: AsRef<str>>(
    rooms: &[S],
    reference: &TimingTable,
    personal: &TimingTable,
) -> Result<SplitComparison> {
    let best = top(compute_ranked_custom(rooms, reference)?, "reference")?;
    let personal = top(compute_ranked_custom(rooms, personal)?, "personal")?;
    Ok(SplitComparison { best, personal })
}

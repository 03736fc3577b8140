use crate::types::result::{Candidate, SeedResult};
use std::cmp::Ordering;

fn by_boost_time(left: &Candidate, right: &Candidate) -> Ordering {
    left.boost_time.total_cmp(&right.boost_time)
}

/// Stable ascending sort by boosted time; equal times keep enumeration order.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(by_boost_time);
}

/// Merge two ascending lists into one. On equal times the entry from `left`
/// comes first. Inputs that are not sorted give an unspecified order.
pub fn merge_sorted(left: Vec<Candidate>, right: Vec<Candidate>) -> Vec<Candidate> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => by_boost_time(l, r).is_le(),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoostFilter {
    #[default]
    Any,
    Two,
    Three,
}

impl BoostFilter {
    pub fn matches(self, boost_count: usize) -> bool {
        match self {
            Self::Any => true,
            Self::Two => boost_count == 2,
            Self::Three => boost_count == 3,
        }
    }

    pub fn apply(self, results: Vec<SeedResult>) -> Vec<SeedResult> {
        results
            .into_iter()
            .filter(|result| self.matches(result.boost_count()))
            .collect()
    }
}

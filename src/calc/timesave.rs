//! Flat corrections on top of the split sums.
//!
//! Each rule names the room that has to precede a position and what else must
//! hold. Adding a correction means adding a rule; the evaluator stays the same.

use crate::calc::sequence::StageSequence;
use crate::table::normalize_room_name;
use crate::types::result::BoostPlacement;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Once per seed, on the first room.
    FirstRoom,
    /// Whenever `room` is the previous room.
    After { room: &'static str },
    /// When `room` is the previous room and it was boosted with `strat_index`.
    AfterBoost {
        room: &'static str,
        strat_index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimesaveRule {
    pub label: &'static str,
    pub trigger: Trigger,
    pub amount: f64,
}

pub const RULES: [TimesaveRule; 6] = [
    TimesaveRule {
        label: "accounting for r1",
        trigger: Trigger::FirstRoom,
        amount: 0.3,
    },
    TimesaveRule {
        label: "four towers timesave",
        trigger: Trigger::After {
            room: "Four Towers",
        },
        amount: 0.2,
    },
    TimesaveRule {
        label: "ib hh",
        trigger: Trigger::After { room: "Sandpit" },
        amount: 0.1,
    },
    TimesaveRule {
        label: "ib hh",
        trigger: Trigger::After {
            room: "Castle Wall",
        },
        amount: 0.1,
    },
    TimesaveRule {
        label: "early 3+1 boost timesave",
        trigger: Trigger::AfterBoost {
            room: "Early 3+1",
            strat_index: 1,
        },
        amount: 0.5,
    },
    TimesaveRule {
        label: "underbridge boost timesave",
        trigger: Trigger::AfterBoost {
            room: "Underbridge",
            strat_index: 1,
        },
        amount: 0.2,
    },
];

/// A rule that fired at `index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedTimesave {
    pub index: usize,
    pub label: &'static str,
    pub amount: f64,
    /// Only counts toward the boosted time.
    pub boost_only: bool,
}

/// Whether `room` directly precedes `index`, compared by normalized name.
fn follows(sequence: &StageSequence<'_>, index: usize, room: &str) -> bool {
    index > 0
        && normalize_room_name(&sequence.room(index - 1).name) == normalize_room_name(room)
}

fn fires(
    trigger: Trigger,
    index: usize,
    sequence: &StageSequence<'_>,
    boost_rooms: &[BoostPlacement],
) -> bool {
    match trigger {
        Trigger::FirstRoom => index == 0,
        Trigger::After { room } => follows(sequence, index, room),
        Trigger::AfterBoost { room, strat_index } => {
            follows(sequence, index, room)
                && boost_rooms.iter().any(|placement| {
                    placement.index == index - 1 && placement.strat_index == strat_index
                })
        }
    }
}

pub fn applied_timesaves(
    sequence: &StageSequence<'_>,
    boost_rooms: &[BoostPlacement],
) -> Vec<AppliedTimesave> {
    let mut applied = Vec::new();
    for index in 0..sequence.len() {
        for rule in &RULES {
            if fires(rule.trigger, index, sequence, boost_rooms) {
                applied.push(AppliedTimesave {
                    index,
                    label: rule.label,
                    amount: rule.amount,
                    boost_only: matches!(rule.trigger, Trigger::AfterBoost { .. }),
                });
            }
        }
    }
    applied
}

/// Total deduction for a route. Pass no placements for the boostless time.
pub fn timesave(sequence: &StageSequence<'_>, boost_rooms: &[BoostPlacement]) -> f64 {
    applied_timesaves(sequence, boost_rooms)
        .iter()
        .map(|applied| applied.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TimingTable;
    use crate::types::room::Room;

    fn sequence(names: &[&str]) -> StageSequence<'static> {
        StageSequence::resolve(names, TimingTable::builtin()).expect("seed should resolve")
    }

    #[test]
    fn first_room_deduction_always_applies_once() {
        let seq = sequence(&[
            "Around Pillars",
            "Fortress",
            "Blocks",
            "Ice",
            "Tightrope",
            "Fences",
            "Tower Tightrope",
            "Scatter",
        ]);
        let applied = applied_timesaves(&seq, &[]);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].index, 0);
        assert!((timesave(&seq, &[]) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn room_after_four_towers_and_sandpit_get_fixed_deductions() {
        let seq = sequence(&[
            "Four Towers",
            "Fortress",
            "Blocks",
            "Sandpit",
            "Tightrope",
            "Ice",
            "Tower Tightrope",
            "Castle Wall",
        ]);
        let applied = applied_timesaves(&seq, &[]);
        let indices = applied.iter().map(|a| a.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 4, 8]);
        // 0.3 + 0.2 + 0.1 + 0.1
        assert!((timesave(&seq, &[]) - 0.7).abs() < 1e-9);
        assert!(applied.iter().all(|a| !a.boost_only));
    }

    #[test]
    fn boost_timesave_needs_second_strat_in_previous_room() {
        let seq = sequence(&[
            "Fortress",
            "Early 3+1",
            "Blocks",
            "Ice",
            "Underbridge",
            "Fences",
            "Tightrope",
            "Scatter",
        ]);
        let first_strat = [BoostPlacement::first(1, 0)];
        assert!((timesave(&seq, &first_strat) - 0.3).abs() < 1e-9);

        let second_strat = [
            BoostPlacement::first(1, 1),
            BoostPlacement {
                index: 4,
                strat_index: 1,
                pacelock: 0.0,
            },
        ];
        let applied = applied_timesaves(&seq, &second_strat);
        assert!(applied
            .iter()
            .any(|a| a.index == 2 && a.label == "early 3+1 boost timesave" && a.boost_only));
        assert!(applied
            .iter()
            .any(|a| a.index == 5 && a.label == "underbridge boost timesave"));
        // 0.3 + 0.5 + 0.2
        assert!((timesave(&seq, &second_strat) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn boost_in_a_different_room_does_not_trigger() {
        let seq = sequence(&[
            "Fortress",
            "Early 3+1",
            "Blocks",
            "Ice",
            "Tightrope",
            "Fences",
            "Scatter",
            "Sandpit",
        ]);
        let placements = [BoostPlacement::first(2, 1)];
        // r1 plus the sandpit deduction on the finish room
        assert!((timesave(&seq, &placements) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn alias_keyed_personal_rooms_still_trigger_rules() {
        let builtin = TimingTable::builtin();
        let mut table = builtin.clone();
        let early = builtin.get("Early 3+1").expect("early 3+1 is built in");
        let sandpit = builtin.get("Sandpit").expect("sandpit is built in");
        table.insert(Room::new("Early 3-1", early.boostless_time, early.boost_strats.clone()));
        table.insert(Room::new(" sandpit ", sandpit.boostless_time, sandpit.boost_strats.clone()));

        let names = [
            "Early 3+1",
            "Fortress",
            "Blocks",
            "Sandpit",
            "Ice",
            "Tightrope",
            "Fences",
            "Scatter",
        ];
        let aliased = StageSequence::resolve(&names, &table).expect("seed should resolve");
        assert_eq!(aliased.room(0).name, "Early 3-1");
        let canonical = StageSequence::resolve(&names, builtin).expect("seed should resolve");

        let placements = [BoostPlacement::first(0, 1)];
        // 0.3 r1 + 0.5 early 3+1 boost + 0.1 after sandpit
        assert!((timesave(&aliased, &placements) - 0.9).abs() < 1e-9);
        assert_eq!(
            timesave(&aliased, &placements),
            timesave(&canonical, &placements)
        );
    }
}

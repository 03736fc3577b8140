// Library-level properties of the seed ranking, checked through the public API.

use pkd_calc::calc::pacelock::BOOST_COOLDOWN;
use pkd_calc::calc::ranking::BoostFilter;
use pkd_calc::types::result::SeedResult;
use pkd_calc::{compute_ranked, compute_ranked_custom, CalcError, TimingTable};

const PILLARS_SEED: [&str; 8] = [
    "Around Pillars",
    "Fortress",
    "Blocks",
    "Ice",
    "Tightrope",
    "Sandpit",
    "Tower Tightrope",
    "Fences",
];

const CASTLE_SEED: [&str; 8] = [
    "Castle Wall",
    "Four Towers",
    "Early 3+1",
    "Underbridge",
    "Ice",
    "Sandpit",
    "Fences",
    "Blocks",
];

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

fn assert_ranked(results: &[SeedResult]) {
    assert!(!results.is_empty());
    assert!(results
        .windows(2)
        .all(|pair| pair[0].boost_time <= pair[1].boost_time));
    let boostless = results[0].boostless_time;
    assert!(results.iter().all(|result| result.boostless_time == boostless));
    assert!(results
        .iter()
        .all(|result| matches!(result.boost_count(), 2 | 3)));
}

#[test]
fn pillars_seed_ranks_every_route() {
    let results = compute_ranked(&PILLARS_SEED).expect("seed should rank");
    assert_ranked(&results);
    // 159 two-boost and 769 three-boost routes
    assert_eq!(results.len(), 928);
    assert_eq!(BoostFilter::Two.apply(results.clone()).len(), 159);
    assert_eq!(BoostFilter::Three.apply(results.clone()).len(), 769);
    assert!(approx(results[0].boost_time, 151.85));
    assert!(approx(results[0].boostless_time, 174.6));
}

#[test]
fn castle_seed_prefers_three_boosts() {
    let results = compute_ranked(&CASTLE_SEED).expect("seed should rank");
    assert_ranked(&results);
    assert_eq!(results[0].boost_count(), 3);
    assert!(approx(results[0].boost_time, 151.85));
    let best_two = BoostFilter::Two.apply(results);
    assert!(approx(best_two[0].boost_time, 156.6));
}

#[test]
fn placements_are_ordered_and_pacelocks_bounded() {
    let results = compute_ranked(&PILLARS_SEED).expect("seed should rank");
    for result in &results {
        assert!(result
            .boost_rooms
            .windows(2)
            .all(|pair| pair[0].index < pair[1].index));
        assert_eq!(result.boost_rooms[0].pacelock, 0.0);
        assert!(result
            .boost_rooms
            .iter()
            .all(|placement| placement.pacelock >= 0.0 && placement.pacelock <= BOOST_COOLDOWN));
        assert!(result.boost_rooms.iter().all(|placement| placement.index < 9));
    }
}

#[test]
fn ranking_is_deterministic() {
    let first = compute_ranked(&PILLARS_SEED).expect("seed should rank");
    let second = compute_ranked(&PILLARS_SEED).expect("seed should rank");
    assert_eq!(first, second);
}

#[test]
fn explicit_finish_room_matches_implicit() {
    let mut with_finish = PILLARS_SEED.to_vec();
    with_finish.push("Finish Room");
    assert_eq!(
        compute_ranked(&with_finish).expect("seed should rank"),
        compute_ranked(&PILLARS_SEED).expect("seed should rank")
    );
}

#[test]
fn cloned_builtin_table_gives_same_ranking() {
    let table = TimingTable::builtin().clone();
    assert_eq!(
        compute_ranked_custom(&CASTLE_SEED, &table).expect("seed should rank"),
        compute_ranked(&CASTLE_SEED).expect("seed should rank")
    );
}

#[test]
fn custom_table_does_not_touch_builtin() {
    let before = compute_ranked(&PILLARS_SEED).expect("seed should rank");
    let mut table = TimingTable::builtin().clone();
    let mut blocks = table.get("Blocks").expect("blocks is built in").clone();
    blocks.boostless_time += 10.0;
    table.insert(blocks);
    let custom = compute_ranked_custom(&PILLARS_SEED, &table).expect("seed should rank");
    assert!(approx(custom[0].boostless_time, 184.6));
    assert_eq!(compute_ranked(&PILLARS_SEED).expect("seed should rank"), before);
}

#[test]
fn nine_rooms_without_finish_are_rejected() {
    let mut rooms = PILLARS_SEED.to_vec();
    rooms.push("Scatter");
    assert!(matches!(
        compute_ranked(&rooms),
        Err(CalcError::InvalidSequenceLength {
            expected: 8,
            found: 9
        })
    ));
}

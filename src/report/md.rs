use crate::calc::sequence::StageSequence;
use crate::calc::timesave::applied_timesaves;
use crate::report::{format_time, placed_strat, rounded_pacelock, ComparisonReport, SeedReport};
use crate::types::result::SeedResult;

pub fn to_markdown(report: &SeedReport<'_>) -> String {
    let sequence = &report.sequence;
    let mut output = String::new();
    output.push_str("# Seed Strategies\n\n");
    output.push_str(&format!("Rooms: {}\n\n", sequence.names().join(", ")));

    let Some(first) = report.results.first() else {
        output.push_str("- no routes match the boost filter\n");
        return output;
    };
    output.push_str(&format!(
        "Boostless: {} ({:.2}s)\n\n",
        format_time(first.boostless_time),
        first.boostless_time
    ));

    for (rank, result) in report.results.iter().enumerate() {
        output.push_str(&format!(
            "## {}. {} ({} boosts, saves {:.2}s)\n\n",
            rank + 1,
            format_time(result.boost_time),
            result.boost_count(),
            result.time_saved()
        ));
        push_boost_rooms(&mut output, sequence, result);
        if report.detail {
            output.push('\n');
            output.push_str(&breakdown(sequence, result));
        }
        output.push('\n');
    }

    output
}

pub fn comparison_to_markdown(report: &ComparisonReport<'_>) -> String {
    let sequence = &report.sequence;
    let comparison = &report.comparison;
    let mut output = String::new();
    output.push_str("# Split Comparison\n\n");
    output.push_str(&format!("Rooms: {}\n\n", sequence.names().join(", ")));

    output.push_str("## Best\n\n");
    output.push_str(&format!(
        "Boost: {}\nBoostless: {}\n\n",
        format_time(comparison.best.boost_time),
        format_time(comparison.best.boostless_time)
    ));
    push_boost_rooms(&mut output, sequence, &comparison.best);

    output.push_str("\n## Personal\n\n");
    let boost = comparison
        .personal_boost_time()
        .map(format_time)
        .unwrap_or_else(|| "-".to_string());
    output.push_str(&format!(
        "Boost: {}\nBoostless: {}\n\n",
        boost,
        format_time(comparison.personal.boostless_time)
    ));
    push_boost_rooms(&mut output, &report.personal_sequence, &comparison.personal);

    output
}

fn push_boost_rooms(output: &mut String, sequence: &StageSequence<'_>, result: &SeedResult) {
    for placement in &result.boost_rooms {
        let room = sequence.room(placement.index);
        let strat = placed_strat(sequence, placement)
            .map(|strat| format!("{}, {}", strat.name, strat.quality.label()))
            .unwrap_or_else(|| "?".to_string());
        if placement.pacelock > 0.0 {
            output.push_str(&format!(
                "- {} ({}), pacelock {:.1}s\n",
                room.name,
                strat,
                rounded_pacelock(placement.pacelock)
            ));
        } else {
            output.push_str(&format!("- {} ({})\n", room.name, strat));
        }
    }
}

/// Room-by-room arithmetic behind one route, boosted and boostless side by side.
fn breakdown(sequence: &StageSequence<'_>, result: &SeedResult) -> String {
    let width = sequence
        .rooms()
        .iter()
        .map(|room| room.name.len())
        .max()
        .unwrap_or(0)
        + 1;
    let applied = applied_timesaves(sequence, &result.boost_rooms);

    let mut boosted = String::from("Boost time calculation:\n```\n");
    let mut boostless = String::from("Boostless time calculation:\n```\n");

    for (index, room) in sequence.rooms().iter().enumerate() {
        boostless.push_str(&format!(
            "{:<width$}: {:6.2}",
            room.name, room.boostless_time
        ));

        let placement = result
            .boost_rooms
            .iter()
            .find(|placement| placement.index == index);
        match placement.and_then(|p| room.boost_strats.get(p.strat_index).map(|s| (p, s))) {
            Some((placement, strat)) => {
                boosted.push_str(&format!(
                    "{:<width$}: {:6.2} (before boost) + {:5.2}",
                    room.name,
                    strat.boost_time,
                    strat.after_boost()
                ));
                if placement.pacelock > 0.0 {
                    boosted.push_str(&format!(" + {:5.2} (pacelock)", placement.pacelock));
                }
            }
            None => {
                boosted.push_str(&format!(
                    "{:<width$}: {:6.2}",
                    room.name, room.boostless_time
                ));
            }
        }

        for timesave in applied.iter().filter(|timesave| timesave.index == index) {
            let line = format!(" - {:5.2} ({})", timesave.amount, timesave.label);
            boosted.push_str(&line);
            if !timesave.boost_only {
                boostless.push_str(&line);
            }
        }

        boosted.push('\n');
        boostless.push('\n');
    }

    let separator = "-".repeat(width + 20);
    boosted.push_str(&format!(
        "{separator}\nTotal: {:6.2} seconds = {}\n```\n",
        result.boost_time,
        format_time(result.boost_time)
    ));
    boostless.push_str(&format!(
        "{separator}\nTotal: {:6.2} seconds = {}\n```\n",
        result.boostless_time,
        format_time(result.boostless_time)
    ));

    let saved = result.time_saved();
    let verdict = if saved > 0.0 {
        format!("Time saved with boosts: {saved:.2} seconds\n")
    } else {
        format!("Warning: boosts are slower than boostless by {:.2} seconds\n", -saved)
    };

    format!("{boosted}\n{boostless}\n{verdict}")
}

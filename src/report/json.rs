use crate::calc::sequence::StageSequence;
use crate::report::{format_time, placed_strat, ComparisonReport, SeedReport};
use crate::types::result::SeedResult;
use crate::types::room::MoveQuality;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct BoostRoomView<'a> {
    name: &'a str,
    index: usize,
    strategy: &'a str,
    quality: Option<MoveQuality>,
    pacelock: f64,
}

#[derive(Debug, Serialize)]
struct ResultView<'a> {
    boost_time: f64,
    boost_time_formatted: String,
    boostless_time: f64,
    boostless_time_formatted: String,
    boost_rooms: Vec<BoostRoomView<'a>>,
}

#[derive(Debug, Serialize)]
struct SeedView<'a> {
    rooms: Vec<&'a str>,
    results: Vec<ResultView<'a>>,
}

#[derive(Debug, Serialize)]
struct ComparisonView<'a> {
    rooms: Vec<&'a str>,
    best: ResultView<'a>,
    personal: ResultView<'a>,
    personal_boost_time: Option<f64>,
}

fn room_names<'a>(sequence: &'a StageSequence<'_>) -> Vec<&'a str> {
    sequence
        .rooms()
        .iter()
        .map(|room| room.name.as_str())
        .collect()
}

fn result_view<'a>(sequence: &StageSequence<'a>, result: &SeedResult) -> ResultView<'a> {
    ResultView {
        boost_time: result.boost_time,
        boost_time_formatted: format_time(result.boost_time),
        boostless_time: result.boostless_time,
        boostless_time_formatted: format_time(result.boostless_time),
        boost_rooms: result
            .boost_rooms
            .iter()
            .map(|placement| {
                let strat = placed_strat(sequence, placement);
                BoostRoomView {
                    name: sequence.room(placement.index).name.as_str(),
                    index: placement.index,
                    strategy: strat.map_or("?", |strat| strat.name.as_str()),
                    quality: strat.map(|strat| strat.quality),
                    pacelock: placement.pacelock,
                }
            })
            .collect(),
    }
}

pub fn to_json(report: &SeedReport<'_>) -> Result<String, serde_json::Error> {
    let view = SeedView {
        rooms: room_names(&report.sequence),
        results: report
            .results
            .iter()
            .map(|result| result_view(&report.sequence, result))
            .collect(),
    };
    serde_json::to_string_pretty(&view)
}

pub fn comparison_to_json(report: &ComparisonReport<'_>) -> Result<String, serde_json::Error> {
    let view = ComparisonView {
        rooms: room_names(&report.sequence),
        best: result_view(&report.sequence, &report.comparison.best),
        personal: result_view(&report.personal_sequence, &report.comparison.personal),
        personal_boost_time: report.comparison.personal_boost_time(),
    };
    serde_json::to_string_pretty(&view)
}

use crate::types::room::{BoostStrat, MoveQuality, Room};

fn strat(name: &str, time: f64, boost_time: f64, quality: MoveQuality) -> BoostStrat {
    BoostStrat::new(name, time, boost_time, quality)
}

/// Reference splits for every room in the pool, plus the finish room.
pub fn rooms() -> Vec<Room> {
    use MoveQuality::{Best, Brilliant, Great};

    vec![
        Room::new(
            "Around Pillars",
            17.25,
            vec![
                strat("cp 0-1", 11.0, 1.0, Best),
                strat("cp 1-2", 13.0, 10.0, Best),
            ],
        ),
        Room::new(
            "Blocks",
            22.25,
            vec![
                strat("cp 0-1", 12.25, 3.0, Best),
                strat("cp 1-2", 18.5, 16.0, Best),
            ],
        ),
        Room::new(
            "Castle Wall",
            16.0,
            vec![strat("cp 0-1", 11.25, 5.0, Best)],
        ),
        Room::new(
            "Tightrope",
            27.75,
            vec![
                strat("cp 0-1", 20.0, 7.5, Best),
                strat("cp 1-2", 17.5, 15.5, Best),
            ],
        ),
        Room::new(
            "Early 3+1",
            25.25,
            vec![
                strat("cp 0-1", 21.0, 8.0, Brilliant),
                strat("cp 1-2", 13.75, 11.75, Best),
            ],
        ),
        Room::new(
            "Fence Squeeze",
            19.75,
            vec![
                strat("cp 0-1", 12.25, 2.5, Best),
                strat("cp 1-2", 15.0, 13.0, Best),
            ],
        ),
        Room::new(
            "Fences",
            13.5,
            vec![
                strat("cp 0-1", 9.5, 4.0, Best),
                strat("cp 1-2", 10.5, 8.5, Best),
            ],
        ),
        Room::new(
            "Fortress",
            15.25,
            vec![
                strat("cp 0-1", 10.5, 3.0, Best),
                strat("cp 1-2", 11.0, 8.0, Best),
            ],
        ),
        Room::new(
            "Four Towers",
            23.75,
            vec![
                strat("cp 0-1 + riley", 14.0, 1.5, Best),
                strat("cp 1-2", 21.5, 12.5, Brilliant),
                strat("cp 2-3 + riley", 21.0, 18.5, Great),
            ],
        ),
        Room::new(
            "Ice",
            17.0,
            vec![
                strat("cp 0-1", 14.5, 2.5, Brilliant),
                strat("cp 1-2", 10.75, 4.5, Best),
                strat("cp 2-3", 15.0, 13.0, Great),
            ],
        ),
        Room::new(
            "Ladder Slide",
            22.75,
            vec![
                strat("cp 0-1", 15.5, 4.0, Best),
                strat("cp 1-2", 13.5, 11.0, Best),
            ],
        ),
        Room::new(
            "Ladder Tower",
            25.25,
            vec![
                strat("cp 0-1", 13.0, 1.0, Best),
                strat("cp 1-2", 21.0, 18.5, Brilliant),
            ],
        ),
        Room::new(
            "Overhead 4b",
            23.75,
            vec![
                strat("cp 0-1", 18.5, 2.0, Best),
                strat("cp 1-2", 16.5, 7.0, Best),
                strat("cp 2-3", 21.5, 19.0, Brilliant),
            ],
        ),
        Room::new(
            "Quartz Climb",
            19.75,
            vec![
                strat("cp 0-1", 1.5, 14.5, Best),
                strat("cp 1-2", 11.5, 13.5, Best),
            ],
        ),
        Room::new(
            "Quartz Temple",
            16.25,
            vec![
                strat("cp 0-1", 8.5, 1.0, Best),
                strat("cp 1-2", 14.0, 10.0, Best),
            ],
        ),
        Room::new(
            "Rng Skip",
            11.75,
            vec![
                strat("cp 0-1", 9.5, 2.0, Great),
                strat("cp 1-2", 8.75, 6.0, Best),
            ],
        ),
        Room::new(
            "Sandpit",
            34.75,
            vec![
                strat("cp 0-1", 24.5, 3.5, Best),
                strat("cp 1-2", 22.5, 13.5, Best),
                strat("cp 2-3", 31.0, 29.0, Brilliant),
            ],
        ),
        Room::new(
            "Scatter",
            18.75,
            vec![
                strat("cp 0-1", 13.0, 3.5, Best),
                strat("cp 1-2", 12.5, 10.0, Best),
            ],
        ),
        Room::new(
            "Slime Scatter",
            20.75,
            vec![
                strat("cp 0-1", 15.25, 1.5, Best),
                strat("cp 2-3", 16.5, 13.5, Brilliant),
            ],
        ),
        Room::new(
            "Slime Skip",
            15.75,
            vec![
                strat("cp 0-1", 11.25, 1.0, Best),
                strat("cp 1-2", 12.5, 10.0, Best),
            ],
        ),
        Room::new(
            "Tower Tightrope",
            22.75,
            vec![
                strat("cp 0-1", 10.0, 2.0, Best),
                strat("cp 1-2", 20.0, 17.5, Best),
            ],
        ),
        Room::new(
            "Triple Platform",
            18.75,
            vec![
                strat("cp 0-1", 9.5, 2.0, Best),
                strat("cp 1-2", 17.0, 14.0, Brilliant),
            ],
        ),
        Room::new(
            "Triple Trapdoors",
            17.75,
            vec![
                strat("cp 0-1", 12.5, 3.0, Best),
                strat("cp 1-2", 12.5, 10.0, Best),
            ],
        ),
        Room::new(
            "Underbridge",
            23.75,
            vec![
                strat("cp 0-1", 20.5, 5.5, Brilliant),
                strat("cp 1-2", 10.5, 8.5, Best),
            ],
        ),
        Room::new(
            "Finish Room",
            4.5,
            vec![strat("cp 0-1", 3.0, 0.5, Best)],
        ),
    ]
}

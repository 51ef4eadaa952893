use std::fmt;

use serde::Serialize;

/// Eight-point compass direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// Clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a bearing (degrees clockwise from north) to the nearest of the eight
/// compass points.
///
/// Each direction owns a 45° sector centred on it, so N covers
/// [337.5, 360) and [0, 22.5). Ties round half away from zero: 22.5° is NE.
/// Bearings outside [0, 360) are wrapped first.
pub fn bearing_to_compass(bearing: f64) -> Direction {
    let bearing = bearing.rem_euclid(360.0);
    let sector = (bearing / 45.0).round() as usize % 8;
    Direction::ALL[sector]
}

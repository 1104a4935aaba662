//! Integer cell codes.

use gn_core::CellKind;

pub const ROAD:         u8 = 0;
pub const WALL:         u8 = 1;
pub const WATER:        u8 = 2;
pub const START:        u8 = 3;
pub const GOAL:         u8 = 4;
pub const INTERSECTION: u8 = 5;
pub const SIGNAL_POST:  u8 = 6;
pub const CROSSWALK:    u8 = 7;

/// The kind a code stands for, or `None` for codes outside `0..=7`.
///
/// Walls and water are both impassable and map to `Blocked`.
pub fn kind_from_code(code: u8) -> Option<CellKind> {
    let kind = match code {
        ROAD          => CellKind::Open,
        WALL | WATER  => CellKind::Blocked,
        START         => CellKind::Start,
        GOAL          => CellKind::Goal,
        INTERSECTION  => CellKind::Intersection,
        SIGNAL_POST   => CellKind::SignalPost,
        CROSSWALK     => CellKind::Crosswalk,
        _             => return None,
    };
    Some(kind)
}

/// Canonical code for `kind`.  `Blocked` encodes as a wall.
pub fn code_of(kind: CellKind) -> u8 {
    match kind {
        CellKind::Open         => ROAD,
        CellKind::Blocked      => WALL,
        CellKind::Start        => START,
        CellKind::Goal         => GOAL,
        CellKind::Intersection => INTERSECTION,
        CellKind::SignalPost   => SIGNAL_POST,
        CellKind::Crosswalk    => CROSSWALK,
    }
}

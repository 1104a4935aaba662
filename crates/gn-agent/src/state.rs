//! Motion state and heading.

use std::fmt;

/// What the agent did on its most recent tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionState {
    /// No path, or the path has been fully walked.
    #[default]
    Idle,
    Following,
    /// Standing on a RED signal cell.
    HaltedAtSignal,
    /// The next path cell is blocked; waiting for a new path.
    HaltedAtObstacle,
}

impl MotionState {
    pub fn as_str(self) -> &'static str {
        match self {
            MotionState::Idle             => "idle",
            MotionState::Following        => "following",
            MotionState::HaltedAtSignal   => "halted_at_signal",
            MotionState::HaltedAtObstacle => "halted_at_obstacle",
        }
    }

    pub fn is_halted(self) -> bool {
        matches!(self, MotionState::HaltedAtSignal | MotionState::HaltedAtObstacle)
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facing direction, from the dominant axis of the last move.
///
/// Rows grow downward, so `Down` means increasing `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heading {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Heading for a move of `(dx, dy)`.  Ties go to the vertical axis.
    pub fn from_delta(dx: f64, dy: f64) -> Heading {
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Heading::Right } else { Heading::Left }
        } else if dy > 0.0 {
            Heading::Down
        } else {
            Heading::Up
        }
    }

    /// Sprite rotation in degrees, counter-clockwise from `Up`.
    pub fn angle_degrees(self) -> f64 {
        match self {
            Heading::Up    => 0.0,
            Heading::Down  => 180.0,
            Heading::Left  => 90.0,
            Heading::Right => -90.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Heading::Up    => "up",
            Heading::Down  => "down",
            Heading::Left  => "left",
            Heading::Right => "right",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

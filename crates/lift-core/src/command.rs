//! Travel directions and the cabin command vocabulary.
//!
//! Both types have a stable upper-snake-case text form (`UP`, `OPEN_DOWN`,
//! …) used by transport collaborators: commands are returned one per line
//! per tick, directions arrive as call parameters.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Direction of travel of a cabin, or the direction a caller wants to go.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Direction a rider at `from` must travel to reach `to`.
    ///
    /// Equal floors resolve to `Down`, matching how boarding events infer the
    /// intended direction.
    #[inline]
    pub fn toward(from: i32, to: i32) -> Direction {
        if to > from { Direction::Up } else { Direction::Down }
    }

    /// `true` if `floor` lies strictly beyond `from` when travelling in `self`.
    #[inline]
    pub fn is_beyond(self, from: i32, floor: i32) -> bool {
        match self {
            Direction::Up => floor > from,
            Direction::Down => floor < from,
        }
    }

    /// The movement command that travels in this direction.
    #[inline]
    pub fn move_command(self) -> CabinCommand {
        match self {
            Direction::Up => CabinCommand::Up,
            Direction::Down => CabinCommand::Down,
        }
    }

    /// The door-opening command that announces this direction.
    #[inline]
    pub fn open_command(self) -> CabinCommand {
        match self {
            Direction::Up => CabinCommand::OpenUp,
            Direction::Down => CabinCommand::OpenDown,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        })
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UP" => Ok(Direction::Up),
            "DOWN" => Ok(Direction::Down),
            other => Err(CoreError::Parse(format!("unknown direction {other:?}"))),
        }
    }
}

// ── CabinCommand ──────────────────────────────────────────────────────────────

/// The single physical action a cabin executes during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CabinCommand {
    /// Open the door, announcing upward travel.
    OpenUp,
    /// Open the door, announcing downward travel.
    OpenDown,
    Close,
    Up,
    Down,
    Nothing,
}

impl CabinCommand {
    /// All commands, in protocol order.
    pub const ALL: [CabinCommand; 6] = [
        CabinCommand::OpenUp,
        CabinCommand::OpenDown,
        CabinCommand::Close,
        CabinCommand::Up,
        CabinCommand::Down,
        CabinCommand::Nothing,
    ];

    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, CabinCommand::OpenUp | CabinCommand::OpenDown)
    }

    #[inline]
    pub fn is_move(self) -> bool {
        matches!(self, CabinCommand::Up | CabinCommand::Down)
    }

    /// Protocol text for this command.
    pub fn as_str(self) -> &'static str {
        match self {
            CabinCommand::OpenUp => "OPEN_UP",
            CabinCommand::OpenDown => "OPEN_DOWN",
            CabinCommand::Close => "CLOSE",
            CabinCommand::Up => "UP",
            CabinCommand::Down => "DOWN",
            CabinCommand::Nothing => "NOTHING",
        }
    }
}

impl fmt::Display for CabinCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CabinCommand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        CabinCommand::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| CoreError::Parse(format!("unknown cabin command {s:?}")))
    }
}

/// Render one tick's commands in fleet order, one per line, each line
/// newline-terminated.
pub fn render_commands(commands: &[CabinCommand]) -> String {
    let mut out = String::with_capacity(commands.len() * 8);
    for command in commands {
        out.push_str(command.as_str());
        out.push('\n');
    }
    out
}

//! Fantasy baseball position tags and eligibility sets.

use crate::error::{DraftError, Result};
use std::fmt;
use std::str::FromStr;

/// Fantasy baseball roster positions.
///
/// A closed set: the 8 non-pitching position groups a batter may fill, plus
/// the two pitching roles. Pitching tags are never combined with batting
/// tags in player data.
///
/// # Examples
///
/// ```rust
/// use fbb_draft::Position;
///
/// let first = Position::FirstBase;
/// assert_eq!(first.to_string(), "1B");
/// assert!(!first.is_pitcher());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    LeftField,
    CenterField,
    RightField,
    StartingPitcher,
    ReliefPitcher,
}

impl Position {
    /// All positions, in bit order.
    pub const ALL: [Position; 10] = [
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::ShortStop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
        Position::StartingPitcher,
        Position::ReliefPitcher,
    ];

    /// Whether this is one of the two pitching roles.
    pub fn is_pitcher(&self) -> bool {
        matches!(self, Position::StartingPitcher | Position::ReliefPitcher)
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::StartingPitcher => "SP",
            Position::ReliefPitcher => "RP",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "C" => Ok(Position::Catcher),
            "1B" => Ok(Position::FirstBase),
            "2B" => Ok(Position::SecondBase),
            "3B" => Ok(Position::ThirdBase),
            "SS" => Ok(Position::ShortStop),
            "LF" => Ok(Position::LeftField),
            "CF" => Ok(Position::CenterField),
            "RF" => Ok(Position::RightField),
            "SP" => Ok(Position::StartingPitcher),
            "RP" => Ok(Position::ReliefPitcher),
            _ => Err(DraftError::UnknownPosition { tag: s.to_string() }),
        }
    }
}

/// A set of positions a player is eligible to fill.
///
/// Backed by a bitmask over [`Position`], so it is `Copy` and set operations
/// are constant time. Parsed from comma-joined tag lists (`"1B,3B"`) and
/// displayed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u16);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: PositionSet = PositionSet(0);

    /// A set containing exactly one position.
    pub fn only(pos: Position) -> Self {
        PositionSet(pos.bit())
    }

    /// This set with `pos` added.
    pub fn with(self, pos: Position) -> Self {
        PositionSet(self.0 | pos.bit())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.0 & pos.bit() != 0
    }

    /// Number of positions in the set.
    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Positions in this set that are not in `other`.
    pub fn difference(self, other: PositionSet) -> PositionSet {
        PositionSet(self.0 & !other.0)
    }

    /// Iterate positions in bit order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.iter().copied().filter(|p| self.contains(*p))
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        iter.into_iter().fold(PositionSet::EMPTY, PositionSet::with)
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<String> = self.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", tags.join(","))
    }
}

impl FromStr for PositionSet {
    type Err = DraftError;

    /// Parse a comma-joined tag list, e.g. `"1B,3B"`.
    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(Position::from_str)
            .collect()
    }
}

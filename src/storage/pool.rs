//! Ranked player-pool CSV loading.
//!
//! Expected columns: `player_id,Name,pos,ERA,BA,OBP`. Row order is the
//! draft preference order and is preserved exactly.

use serde::Deserialize;
use std::path::Path;

use crate::draft::{Player, PlayerId, PositionSet};
use crate::error::{DraftError, Result};

/// Raw CSV row. Stats are optional because batting numbers are absent for
/// pure pitchers and vice versa.
#[derive(Debug, Deserialize)]
struct PoolRow {
    player_id: u64,
    #[serde(rename = "Name")]
    name: String,
    pos: Option<String>,
    #[serde(rename = "ERA")]
    era: Option<f64>,
    #[serde(rename = "BA")]
    avg: Option<f64>,
    #[serde(rename = "OBP")]
    obp: Option<f64>,
}

/// Position tag applied when the pool leaves the column blank.
const DEFAULT_POS: &str = "1B";

/// Load a ranked pool, preserving row order.
pub fn load_pool(path: &Path) -> Result<Vec<Player>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut players = Vec::new();

    for row in reader.deserialize() {
        let row: PoolRow = row?;
        let tags = row
            .pos
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_POS);
        let positions: PositionSet = tags.parse()?;
        if positions.is_empty() {
            return Err(DraftError::EmptyPositions { name: row.name });
        }

        players.push(Player {
            id: PlayerId::new(row.player_id),
            name: row.name,
            positions,
            avg: row.avg,
            obp: row.obp,
            era: row.era,
        });
    }

    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::Position;
    use crate::error::DraftError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_pool(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_pool(
            "player_id,Name,pos,ERA,BA,OBP\n\
             101,Ace Starter,SP,2.95,,\n\
             205,Corner Bat,\"1B,3B\",,0.288,0.355\n",
        );
        let pool = load_pool(file.path()).unwrap();
        assert_eq!(pool.len(), 2);

        assert_eq!(pool[0].id, PlayerId::new(101));
        assert_eq!(pool[0].name, "Ace Starter");
        assert!(pool[0].positions.contains(Position::StartingPitcher));
        assert_eq!(pool[0].era, Some(2.95));
        assert_eq!(pool[0].avg, None);

        assert_eq!(pool[1].positions.len(), 2);
        assert_eq!(pool[1].avg, Some(0.288));
        assert_eq!(pool[1].obp, Some(0.355));
        assert_eq!(pool[1].era, None);
    }

    #[test]
    fn blank_position_defaults_to_first_base() {
        let file = write_pool(
            "player_id,Name,pos,ERA,BA,OBP\n\
             7,No Tag,,,0.250,\n",
        );
        let pool = load_pool(file.path()).unwrap();
        assert!(pool[0].positions.contains(Position::FirstBase));
        assert_eq!(pool[0].positions.len(), 1);
    }

    #[test]
    fn unknown_tag_fails_the_load() {
        let file = write_pool(
            "player_id,Name,pos,ERA,BA,OBP\n\
             7,Weird Tag,DH,,0.250,\n",
        );
        let err = load_pool(file.path()).unwrap_err();
        assert!(matches!(err, DraftError::UnknownPosition { .. }));
    }

    #[test]
    fn tags_without_a_position_fail_the_load() {
        let file = write_pool(
            "player_id,Name,pos,ERA,BA,OBP\n\
             7,Comma Only,\",\",,0.250,\n",
        );
        assert!(matches!(
            load_pool(file.path()).unwrap_err(),
            DraftError::EmptyPositions { .. }
        ));
    }

    #[test]
    fn malformed_stat_fails_the_load() {
        let file = write_pool(
            "player_id,Name,pos,ERA,BA,OBP\n\
             7,Bad Avg,1B,,not-a-number,\n",
        );
        assert!(matches!(
            load_pool(file.path()).unwrap_err(),
            DraftError::Csv(_)
        ));
    }

    #[test]
    fn empty_pool_loads_as_empty() {
        let file = write_pool("player_id,Name,pos,ERA,BA,OBP\n");
        assert!(load_pool(file.path()).unwrap().is_empty());
    }
}

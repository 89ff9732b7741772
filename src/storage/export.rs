//! Draft result export: per-team roster CSVs, the free-agent CSV, and the
//! draft-order file.

use std::path::Path;

use crate::draft::Player;
use crate::error::Result;

/// Write players as a CSV table: `player_id,Name,BA,OBP,ERA,pos`, position
/// tags comma-joined inside one field.
pub fn write_players(path: &Path, players: &[Player]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["player_id", "Name", "BA", "OBP", "ERA", "pos"])?;

    for player in players {
        writer.write_record([
            player.id.to_string(),
            player.name.clone(),
            format_stat(player.avg),
            format_stat(player.obp),
            format_stat(player.era),
            player.positions.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the randomized pick order, one team per line.
pub fn write_draft_order(path: &Path, order: &[String]) -> Result<()> {
    std::fs::write(path, order.join(",\n"))?;
    Ok(())
}

fn format_stat(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.3}")).unwrap_or_default()
}

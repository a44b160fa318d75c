//! CSV export of the derived views

use crate::data::{HALFTIME_SHOWS, SUPER_BOWLS};
use crate::error::Result;
use crate::stats::{
    blowouts, closest_games, decade_averages, genre_breakdown, team_wins, TOP_MARGINS,
};
use crate::types::Margin;
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

fn write_rows<I, R>(path: &Path, header: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut writer = Writer::from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), "wrote csv");
    Ok(())
}

fn margin_row(m: &Margin) -> Vec<String> {
    vec![
        m.game.id.to_string(),
        m.game.year.to_string(),
        m.game.winner.to_string(),
        m.game.loser.to_string(),
        m.score(),
        m.margin.to_string(),
    ]
}

/// Write every derived view into `dir`, creating it if needed.
/// Returns the files written.
pub fn export_views(dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join("team_wins.csv");
    write_rows(
        &path,
        &["team", "wins"],
        team_wins(SUPER_BOWLS)
            .into_iter()
            .map(|(team, wins)| vec![team.to_string(), wins.to_string()]),
    )?;
    written.push(path);

    let path = dir.join("decade_averages.csv");
    write_rows(
        &path,
        &["decade", "avg_points"],
        decade_averages(SUPER_BOWLS)
            .into_iter()
            .map(|(decade, avg)| vec![decade, format!("{:.1}", avg)]),
    )?;
    written.push(path);

    let margin_header = ["game", "year", "winner", "loser", "score", "margin"];
    let path = dir.join("blowouts.csv");
    write_rows(
        &path,
        &margin_header,
        blowouts(SUPER_BOWLS, TOP_MARGINS).iter().map(margin_row),
    )?;
    written.push(path);

    let path = dir.join("closest_games.csv");
    write_rows(
        &path,
        &margin_header,
        closest_games(SUPER_BOWLS, TOP_MARGINS).iter().map(margin_row),
    )?;
    written.push(path);

    let path = dir.join("halftime_genres.csv");
    write_rows(
        &path,
        &["genre", "shows"],
        genre_breakdown(HALFTIME_SHOWS)
            .into_iter()
            .map(|(genre, n)| vec![genre.to_string(), n.to_string()]),
    )?;
    written.push(path);

    Ok(written)
}

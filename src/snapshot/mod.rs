//! Loading data snapshots from disk.
//!
//! The dashboard fetches team rosters and player pools from the points API;
//! here the same JSON documents are read from files instead.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{PlayerPoolSnapshot, TeamSnapshot};

/// Errors that can occur while loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot not found: {0}")]
    NotFound(PathBuf),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    debug!("Read {} bytes from {:?}", contents.len(), path);
    Ok(serde_json::from_str(&contents)?)
}

/// Load team rosters for every region.
pub fn load_team_snapshot(path: &Path) -> Result<TeamSnapshot, SnapshotError> {
    let snapshot: TeamSnapshot = read_json(path)?;
    info!(
        "Loaded team snapshot from {:?}: {} NA teams, {} EMEA teams",
        path,
        snapshot.na.team_count(),
        snapshot.emea.team_count()
    );
    Ok(snapshot)
}

/// Load player pools for every region.
pub fn load_player_pool(path: &Path) -> Result<PlayerPoolSnapshot, SnapshotError> {
    let snapshot: PlayerPoolSnapshot = read_json(path)?;
    info!(
        "Loaded player pool from {:?}: {} NA players, {} EMEA players",
        path,
        snapshot.na.len(),
        snapshot.emea.len()
    );
    Ok(snapshot)
}

//! Station and connection file loading.
//!
//! Station rows are `id,name`. The name is everything after the first
//! comma and may be wrapped in double quotes. Connection rows are `id,id`.
//! Blank lines are skipped; any other malformed row is fatal.

use herdcats_types::{Network, NetworkError, StationId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Errors that can occur while loading the map.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: malformed row {row:?}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        row: String,
    },

    #[error("{}:{line}: invalid station id {value:?}", .path.display())]
    InvalidId {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{}: no stations", .path.display())]
    NoStations { path: PathBuf },

    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}

/// Load the network from a station file and a connection file.
pub fn load_network(stations_path: &Path, connections_path: &Path) -> Result<Network, LoadError> {
    let stations = parse_stations(stations_path, &read(stations_path)?)?;
    let connections = parse_connections(connections_path, &read(connections_path)?)?;
    let network = Network::new(stations, connections)?;
    if network.is_empty() {
        return Err(LoadError::NoStations {
            path: stations_path.to_path_buf(),
        });
    }

    debug!(
        stations = network.len(),
        connections = network.connection_count(),
        "Loaded network"
    );
    Ok(network)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse `id,name` rows. `path` is only used in errors.
pub fn parse_stations(path: &Path, text: &str) -> Result<Vec<(StationId, String)>, LoadError> {
    rows(text)
        .map(|(line, row)| {
            let (id, name) = row.split_once(',').ok_or_else(|| malformed(path, line, row))?;
            let name = unquote(name.trim());
            if name.is_empty() {
                return Err(malformed(path, line, row));
            }
            Ok((parse_id(path, line, id)?, name))
        })
        .collect()
}

/// Parse `id,id` rows. `path` is only used in errors.
pub fn parse_connections(
    path: &Path,
    text: &str,
) -> Result<Vec<(StationId, StationId)>, LoadError> {
    rows(text)
        .map(|(line, row)| {
            let mut fields = row.split(',');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(a), Some(b), None) => Ok((parse_id(path, line, a)?, parse_id(path, line, b)?)),
                _ => Err(malformed(path, line, row)),
            }
        })
        .collect()
}

/// Non-blank rows with their 1-based line numbers.
fn rows(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.lines()
        .enumerate()
        .map(|(index, row)| (index + 1, row.trim_end_matches('\r')))
        .filter(|(_, row)| !row.trim().is_empty())
}

fn parse_id(path: &Path, line: usize, value: &str) -> Result<StationId, LoadError> {
    value
        .trim()
        .parse()
        .map(StationId)
        .map_err(|_| LoadError::InvalidId {
            path: path.to_path_buf(),
            line,
            value: value.to_string(),
        })
}

fn malformed(path: &Path, line: usize, row: &str) -> LoadError {
    LoadError::MalformedRow {
        path: path.to_path_buf(),
        line,
        row: row.to_string(),
    }
}

/// Strip one pair of surrounding double quotes, undoubling inner quotes.
fn unquote(field: &str) -> String {
    match field.strip_prefix('"').and_then(|f| f.strip_suffix('"')) {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.to_string(),
    }
}

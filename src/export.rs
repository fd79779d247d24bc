use crate::data::Track;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("MessagePack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),
    #[error("MessagePack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),
    #[error("Unknown track format: {0}")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    Json,
    Yaml,
    MsgPack,
}

impl FromStr for TrackFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(TrackFormat::Json),
            "yaml" | "yml" => Ok(TrackFormat::Yaml),
            "msgpack" | "mpk" | "rmp" => Ok(TrackFormat::MsgPack),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl TrackFormat {
    /// Infer the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

pub fn to_bytes(track: &Track, format: TrackFormat) -> Result<Vec<u8>, ExportError> {
    let bytes = match format {
        TrackFormat::Json => serde_json::to_vec_pretty(track)?,
        TrackFormat::Yaml => serde_yaml::to_string(track)?.into_bytes(),
        // Named fields keep the wire layout identical to the JSON object
        TrackFormat::MsgPack => rmp_serde::to_vec_named(track)?,
    };
    Ok(bytes)
}

pub fn from_bytes(bytes: &[u8], format: TrackFormat) -> Result<Track, ExportError> {
    let track = match format {
        TrackFormat::Json => serde_json::from_slice(bytes)?,
        TrackFormat::Yaml => serde_yaml::from_slice(bytes)?,
        TrackFormat::MsgPack => rmp_serde::from_slice(bytes)?,
    };
    Ok(track)
}

pub fn save<P: AsRef<Path>>(track: &Track, path: P, format: TrackFormat) -> Result<(), ExportError> {
    let bytes = to_bytes(track, format)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Load a track, picking the format from the extension. Files without a
/// known extension are read as JSON when they start with `{`, YAML otherwise.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Track, ExportError> {
    let bytes = fs::read(path.as_ref())?;
    let format = TrackFormat::from_path(path.as_ref()).unwrap_or_else(|| {
        let text = String::from_utf8_lossy(&bytes);
        if text.trim_start().starts_with('{') {
            TrackFormat::Json
        } else {
            TrackFormat::Yaml
        }
    });
    from_bytes(&bytes, format)
}

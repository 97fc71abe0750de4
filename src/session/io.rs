use std::fs;
use std::path::Path;

use crate::store::SessionState;

use super::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Format {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if matches!(extension.as_str(), "yaml" | "yml") {
        Format::Yaml
    } else {
        Format::Json
    }
}

pub fn load_session(path: impl AsRef<Path>) -> Result<SessionState> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let session = parse_session(&raw, format_of(path) == Format::Yaml)?;
    log::info!(
        "loaded session {} ({} labels, {} selected frames)",
        path.display(),
        session.labels.len(),
        session.selected_frames.len()
    );
    Ok(session)
}

pub fn parse_session(raw: &str, yaml: bool) -> Result<SessionState> {
    let session = if yaml {
        serde_yaml::from_str::<SessionState>(raw)?
    } else {
        serde_json::from_str::<SessionState>(raw)?
    };
    session.validate()?;
    Ok(session)
}

pub fn save_session(path: impl AsRef<Path>, session: &SessionState) -> Result<()> {
    let path = path.as_ref();
    session.validate()?;
    let serialized = match format_of(path) {
        Format::Yaml => serde_yaml::to_string(session)?,
        Format::Json => serde_json::to_string_pretty(session)?,
    };
    fs::write(path, serialized)?;
    Ok(())
}

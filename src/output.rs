//! Rendering and writing synthesized documents.

use crate::document::Document;
use anyhow::Context;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Serialization format for a document on disk or stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    /// Guess from a file extension; anything but `.yaml`/`.yml` is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => OutputFormat::Yaml,
            _ => OutputFormat::Json,
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{other}' (expected json or yaml)")),
        }
    }
}

/// JSON with 4-space indentation.
pub fn to_json(document: &Document) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .context("Failed to serialize document as JSON")?;
    String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")
}

pub fn to_yaml(document: &Document) -> anyhow::Result<String> {
    serde_yaml::to_string(document).context("Failed to serialize document as YAML")
}

pub fn render(document: &Document, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(document),
        OutputFormat::Yaml => to_yaml(document),
    }
}

/// Write `document` to `path`, creating parent directories as needed.
pub fn write_document(document: &Document, path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(document, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    }
    std::fs::write(path, rendered)
        .with_context(|| format!("Failed to write document: {}", path.display()))?;
    info!(
        path = %path.display(),
        format = %format,
        paths = document.paths.len(),
        "wrote OpenAPI document"
    );
    Ok(())
}

/// Read a previously written document (YAML or JSON by extension).
pub fn read_document(path: &Path) -> anyhow::Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let document = match OutputFormat::from_path(path) {
        OutputFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse document: {}", path.display()))?,
        OutputFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse document: {}", path.display()))?,
    };
    Ok(document)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{ApiRegistry, SpecOptions};

    fn sample() -> Document {
        let mut api = ApiRegistry::new();
        api.get("/users");
        api.generate_spec(&SpecOptions::default())
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let json = to_json(&sample()).unwrap();
        assert!(json.starts_with("{\n    \"openapi\": \"3.1.0\""));
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_yaml_render() {
        let yaml = render(&sample(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("openapi:"));
        assert!(yaml.contains("3.1.0"));
        assert!(yaml.contains("operationId: getUsers"));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(OutputFormat::from_path(Path::new("a.yml")), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from_path(Path::new("a.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("a")), OutputFormat::Json);
        assert_eq!("YAML".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("openapi.json");
        write_document(&sample(), &path, OutputFormat::Json).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("getUsers"));
    }

    #[test]
    fn test_read_back_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        write_document(&sample(), &path, OutputFormat::from_path(&path)).unwrap();
        assert_eq!(read_document(&path).unwrap(), sample());
    }

    #[test]
    fn test_read_missing_document() {
        let err = read_document(Path::new("/nope/openapi.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read document"));
    }
}

use super::types::{License, Server, ServerVariable};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_TITLE: &str = "Example API";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_SERVER_URL: &str = "https://example.one/api";
pub const DEFAULT_SERVER_DESCRIPTION: &str = "Example server";

/// Global settings for one synthesis run.
///
/// Deserializes from the `options` block of a manifest; every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecOptions {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseChoice>,
    /// `None` produces the single default server; `Some(vec![])` produces none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<ServerOverride>>,
}

impl Default for SpecOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            license: None,
            servers: None,
        }
    }
}

impl SpecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_license(mut self, license: impl Into<LicenseChoice>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Append a server; the first call replaces the implicit default server.
    pub fn with_server(mut self, server: ServerOverride) -> Self {
        self.servers.get_or_insert_with(Vec::new).push(server);
        self
    }

    /// The `info.license` value.
    #[must_use]
    pub fn resolved_license(&self) -> Option<License> {
        self.license.as_ref().map(LicenseChoice::resolve)
    }

    /// Each override laid over the default server record.
    #[must_use]
    pub fn resolved_servers(&self) -> Vec<Server> {
        match &self.servers {
            None => vec![ServerOverride::default().resolve()],
            Some(servers) => servers.iter().map(ServerOverride::resolve).collect(),
        }
    }
}

/// Licenses with a built-in `info.license` record.
///
/// Parsing is case-insensitive and the same for manifests and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KnownLicense {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
}

impl KnownLicense {
    #[must_use]
    pub fn identifier(&self) -> &'static str {
        match self {
            KnownLicense::Mit => "MIT",
            KnownLicense::Apache2 => "Apache-2.0",
        }
    }

    #[must_use]
    pub fn to_license(&self) -> License {
        match self {
            KnownLicense::Mit => License::new("MIT License")
                .with_identifier("MIT")
                .with_url("https://opensource.org/licenses/MIT"),
            KnownLicense::Apache2 => License::new("Apache License 2.0")
                .with_identifier("Apache-2.0")
                .with_url("https://www.apache.org/licenses/LICENSE-2.0"),
        }
    }
}

impl Display for KnownLicense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for KnownLicense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mit" => Ok(KnownLicense::Mit),
            "apache-2.0" | "apache2" => Ok(KnownLicense::Apache2),
            other => Err(format!(
                "unknown license '{other}' (expected MIT or Apache-2.0)"
            )),
        }
    }
}

impl<'de> Deserialize<'de> for KnownLicense {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Either a known license shorthand or a full license object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LicenseChoice {
    Known(KnownLicense),
    Custom(License),
}

impl LicenseChoice {
    #[must_use]
    pub fn resolve(&self) -> License {
        match self {
            LicenseChoice::Known(known) => known.to_license(),
            LicenseChoice::Custom(license) => license.clone(),
        }
    }
}

impl From<KnownLicense> for LicenseChoice {
    fn from(value: KnownLicense) -> Self {
        LicenseChoice::Known(value)
    }
}

impl From<License> for LicenseChoice {
    fn from(value: License) -> Self {
        LicenseChoice::Custom(value)
    }
}

/// Partial server record; unset fields keep the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<BTreeMap<String, ServerVariable>>,
}

impl ServerOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, variable: ServerVariable) -> Self {
        self.variables
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), variable);
        self
    }

    #[must_use]
    pub fn resolve(&self) -> Server {
        Server {
            url: self
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            description: Some(
                self.description
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SERVER_DESCRIPTION.to_string()),
            ),
            variables: self.variables.clone().unwrap_or_default(),
        }
    }
}

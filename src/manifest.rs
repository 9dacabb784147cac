//! # Route Manifest Module
//!
//! A declarative file that fills an [`ApiRegistry`] without writing Rust:
//! routes per method, operation overrides and component schemas, plus the
//! [`SpecOptions`] for the run.
//!
//! ```yaml
//! options:
//!   title: Chat API
//!   license: MIT
//! routes:
//!   get: ["/users", "/users/:userId", "/users/@me"]
//!   delete: ["/guilds/:guildId"]
//! operations:
//!   /users/@me:
//!     summary: The signed-in user
//!     security: [ { jwtAuth: [] } ]
//! methodOperations:
//!   delete:
//!     /guilds/:guildId: { summary: Delete a guild }
//! components:
//!   User: { type: object }
//! ```
//!
//! The parser is chosen from the file extension: `.yaml`/`.yml`, `.toml`,
//! anything else is read as JSON.

use crate::document::{OperationOverride, SpecOptions};
use crate::method::HttpMethod;
use crate::registry::ApiRegistry;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Parsed manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Manifest {
    pub options: SpecOptions,
    /// Method name (`get`, `put`, ...) → templates.
    pub routes: BTreeMap<String, Vec<String>>,
    /// Overrides shared by every method on a template.
    pub operations: BTreeMap<String, OperationOverride>,
    /// Overrides for a single method.
    pub method_operations: BTreeMap<String, BTreeMap<String, OperationOverride>>,
    pub components: BTreeMap<String, Value>,
}

impl Manifest {
    /// Register everything into `registry`.
    ///
    /// Fails on a method name outside get/put/post/delete/patch; nothing is
    /// registered in that case.
    pub fn apply(&self, registry: &mut ApiRegistry) -> anyhow::Result<()> {
        let routes = parse_method_keys(&self.routes, "routes")?;
        let method_operations = parse_method_keys(&self.method_operations, "methodOperations")?;

        for (method, templates) in routes {
            for template in templates {
                registry.route(method, template.as_str());
            }
        }
        for (template, operation) in &self.operations {
            registry.describe(template.as_str(), operation.clone());
        }
        for (method, operations) in method_operations {
            for (template, operation) in operations {
                registry.describe_for(method, template.as_str(), operation.clone());
            }
        }
        for (name, schema) in &self.components {
            registry.component(name.as_str(), schema.clone());
        }
        debug!(
            routes = registry.routes().total(),
            overrides = registry.metadata().len(),
            components = registry.components().len(),
            "manifest applied"
        );
        Ok(())
    }

    /// A fresh registry holding this manifest, with its options.
    pub fn into_registry(self) -> anyhow::Result<(ApiRegistry, SpecOptions)> {
        let mut registry = ApiRegistry::new();
        self.apply(&mut registry)?;
        Ok((registry, self.options))
    }
}

fn parse_method_keys<'a, T>(
    map: &'a BTreeMap<String, T>,
    section: &str,
) -> anyhow::Result<Vec<(HttpMethod, &'a T)>> {
    map.iter()
        .map(|(key, value)| {
            let method = key
                .parse::<HttpMethod>()
                .with_context(|| format!("Invalid method key '{key}' in {section}"))?;
            Ok((method, value))
        })
        .collect()
}

/// Parse manifest text in the format implied by `path`'s extension.
pub fn parse_manifest(content: &str, path: &Path) -> anyhow::Result<Manifest> {
    let manifest = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(content)?,
        Some("toml") => toml::from_str(content)?,
        _ => serde_json::from_str(content)?,
    };
    Ok(manifest)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    parse_manifest(&content, path)
        .with_context(|| format!("Failed to parse manifest: {}", path.display()))
}

use crate::method::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// One entry of an operation's `security` list: scheme name → scopes.
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// The synthesized OpenAPI 3.1 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub components: Components,
    /// Keyed by template text; `BTreeMap` keeps the canonical sorted order.
    pub paths: BTreeMap<String, PathItem>,
}

impl Document {
    /// Every (method, template) pair present in `paths`.
    #[must_use]
    pub fn routes(&self) -> BTreeSet<(HttpMethod, String)> {
        self.paths
            .iter()
            .flat_map(|(path, item)| item.methods().into_iter().map(move |m| (m, path.clone())))
            .collect()
    }

    /// Look up a single operation.
    #[must_use]
    pub fn operation(&self, method: HttpMethod, template: &str) -> Option<&Operation> {
        self.paths.get(template).and_then(|item| item.operation(method))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// License object. `identifier` is the SPDX id OpenAPI 3.1 added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            identifier: None,
            name: name.into(),
            url: None,
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, ServerVariable>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVariable {
    pub default: String,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub schemas: BTreeMap<String, Value>,
    pub security_schemes: BTreeMap<String, SecurityScheme>,
}

/// HTTP authentication scheme (`type: http`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub kind: String,
    pub scheme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
}

impl SecurityScheme {
    /// `Authorization: Bearer <JWT>`
    #[must_use]
    pub fn bearer_jwt() -> Self {
        Self {
            kind: "http".to_string(),
            scheme: "bearer".to_string(),
            bearer_format: Some("JWT".to_string()),
        }
    }
}

/// Operations declared for one template. Only registered methods are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
}

impl PathItem {
    #[must_use]
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
        }
    }

    pub fn set(&mut self, method: HttpMethod, operation: Operation) {
        let slot = match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Patch => &mut self.patch,
        };
        *slot = Some(operation);
    }

    /// Methods present, in canonical order.
    #[must_use]
    pub fn methods(&self) -> Vec<HttpMethod> {
        HttpMethod::ALL
            .into_iter()
            .filter(|m| self.operation(*m).is_some())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods().is_empty()
    }
}

/// A fully materialized operation object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(default)]
    pub responses: BTreeMap<String, Value>,
    #[serde(default)]
    pub security: Vec<SecurityRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    /// Vendor extensions and any other top-level fields passed through.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl Operation {
    /// The default operation: derived id, no responses, no security.
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            summary: None,
            description: None,
            tags: None,
            parameters: None,
            request_body: None,
            responses: BTreeMap::new(),
            security: Vec::new(),
            deprecated: None,
            extensions: BTreeMap::new(),
        }
    }
}

/// Caller-supplied partial operation.
///
/// Every field that is set replaces the corresponding top-level field of the
/// default operation. Nested values are replaced, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<BTreeMap<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl OperationOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_parameter(mut self, parameter: Value) -> Self {
        self.parameters.get_or_insert_with(Vec::new).push(parameter);
        self
    }

    pub fn with_request_body(mut self, body: Value) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Adds one response; the resulting map replaces the default `{}`.
    pub fn with_response(mut self, status: impl Into<String>, response: Value) -> Self {
        self.responses
            .get_or_insert_with(BTreeMap::new)
            .insert(status.into(), response);
        self
    }

    /// Requires `scheme` with the given scopes (e.g. `jwtAuth`, `[]`).
    pub fn with_security(
        mut self,
        scheme: impl Into<String>,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut requirement = SecurityRequirement::new();
        requirement.insert(scheme.into(), scopes.into_iter().map(Into::into).collect());
        self.security.get_or_insert_with(Vec::new).push(requirement);
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = Some(true);
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(key.into(), value);
        self
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn overlay(&self, other: &OperationOverride) -> OperationOverride {
        let mut extensions = self.extensions.clone();
        extensions.extend(other.extensions.clone());
        OperationOverride {
            operation_id: other.operation_id.clone().or_else(|| self.operation_id.clone()),
            summary: other.summary.clone().or_else(|| self.summary.clone()),
            description: other.description.clone().or_else(|| self.description.clone()),
            tags: other.tags.clone().or_else(|| self.tags.clone()),
            parameters: other.parameters.clone().or_else(|| self.parameters.clone()),
            request_body: other.request_body.clone().or_else(|| self.request_body.clone()),
            responses: other.responses.clone().or_else(|| self.responses.clone()),
            security: other.security.clone().or_else(|| self.security.clone()),
            deprecated: other.deprecated.or(self.deprecated),
            extensions,
        }
    }

    /// Overwrite the fields of `operation` that this override sets.
    ///
    /// An empty `operationId` is ignored so the derived id stays in place.
    pub fn apply_to(&self, operation: &mut Operation) {
        if let Some(id) = self.operation_id.as_ref().filter(|id| !id.is_empty()) {
            operation.operation_id = id.clone();
        }
        if let Some(summary) = &self.summary {
            operation.summary = Some(summary.clone());
        }
        if let Some(description) = &self.description {
            operation.description = Some(description.clone());
        }
        if let Some(tags) = &self.tags {
            operation.tags = Some(tags.clone());
        }
        if let Some(parameters) = &self.parameters {
            operation.parameters = Some(parameters.clone());
        }
        if let Some(body) = &self.request_body {
            operation.request_body = Some(body.clone());
        }
        if let Some(responses) = &self.responses {
            operation.responses = responses.clone();
        }
        if let Some(security) = &self.security {
            operation.security = security.clone();
        }
        if let Some(deprecated) = self.deprecated {
            operation.deprecated = Some(deprecated);
        }
        for (key, value) in &self.extensions {
            operation.extensions.insert(key.clone(), value.clone());
        }
    }
}

//! # OpenAPI Linter Module
//!
//! Checks a synthesized (or hand-written) OpenAPI document for problems that
//! break generated clients or spec tooling downstream.
//!
//! ## Checks Performed
//!
//! 1. **missing_operation_id** - every operation needs an operationId
//! 2. **duplicate_operation_id** - two routes deriving the same id, e.g.
//!    `/users/:userId` and `/users/:user` both give `getUsersByUser`
//! 3. **operation_id_casing** - operationIds should be lowerCamelCase
//! 4. **missing_schema_ref** / **invalid_schema_ref** - `#/components/schemas/*`
//!    references must resolve; local refs outside `#/components/` are rejected
//! 5. **undefined_security_scheme** - `security` entries must name a scheme in
//!    `components.securitySchemes`
//! 6. **empty_responses** - operations without any declared response
//! 7. **invalid_path_parameter** - `:param` names must be identifiers
//! 8. **colon_path_parameter** - `:param` templating where OpenAPI uses `{param}`
//!
//! The document is reparsed with `oas3` first, so anything that does not
//! deserialize as OpenAPI 3.1 fails before linting.
//!
//! An external linter (Redocly by default) can be run on the same document
//! through [`run_external_linter`], or on a file exactly as stored through
//! [`run_external_linter_on`].
//!
//! ## Usage
//!
//! ```rust
//! use routedoc::linter::{lint_document, LintSeverity};
//! use routedoc::{ApiRegistry, SpecOptions};
//!
//! let mut api = ApiRegistry::new();
//! api.get("/users").get("/users/:userId");
//! let issues = lint_document(&api.generate_spec(&SpecOptions::default())).unwrap();
//! assert!(issues.iter().all(|i| i.severity != LintSeverity::Error));
//! ```

mod external;

pub use external::{run_external_linter, run_external_linter_on, ExternalLinter};

use crate::document::Document;
use crate::operation_id::split_words;
use crate::pattern::{is_valid_param_name, PathPattern};
use anyhow::Context;
use oas3::{spec::PathItem, OpenApiV3Spec};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LintSeverity {
    /// Error - the document will break consumers
    Error,
    /// Warning - likely a mistake
    Warning,
    /// Info - convention suggestion
    Info,
}

impl Display for LintSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in an OpenAPI document
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "/users/:userId GET", "schema:User")
    pub location: String,
    pub severity: LintSeverity,
    /// Check name (e.g., "duplicate_operation_id")
    pub kind: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a synthesized document.
pub fn lint_document(document: &Document) -> anyhow::Result<Vec<LintIssue>> {
    let value = serde_json::to_value(document).context("Failed to serialize document")?;
    let spec: OpenApiV3Spec = serde_json::from_value(value)
        .context("Synthesized document is not a valid OpenAPI 3.1 object")?;
    Ok(lint_openapi(&spec))
}

/// Lint an OpenAPI file (YAML or JSON).
pub fn lint_spec(spec_path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let content = std::fs::read_to_string(spec_path)
        .with_context(|| format!("Failed to read spec: {}", spec_path.display()))?;
    let spec: OpenApiV3Spec = if spec_path
        .extension()
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
    {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse spec: {}", spec_path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse spec: {}", spec_path.display()))?
    };
    Ok(lint_openapi(&spec))
}

/// Run every check on a parsed document.
#[must_use]
pub fn lint_openapi(spec: &OpenApiV3Spec) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    let mut defined_schemas = HashSet::new();
    let mut defined_schemes = HashSet::new();
    if let Some(components) = spec.components.as_ref() {
        defined_schemas.extend(components.schemas.keys().cloned());
        defined_schemes.extend(components.security_schemes.keys().cloned());
    }

    let mut ctx = LintContext {
        issues: &mut issues,
        defined_schemas: &defined_schemas,
        defined_schemes: &defined_schemes,
        seen_ids: HashMap::new(),
    };

    if let Some(paths) = spec.paths.as_ref() {
        for (path, path_item) in paths {
            lint_path_template(&mut ctx, path);
            lint_path_item(&mut ctx, path, path_item);
        }
    }

    if let Some(components) = spec.components.as_ref() {
        for (name, schema) in &components.schemas {
            if let Ok(value) = serde_json::to_value(schema) {
                let location = format!("schema:{} (components.schemas)", name);
                lint_refs(&mut ctx, &location, &value);
            }
        }
    }

    for issue in issues.iter().filter(|i| i.severity == LintSeverity::Error) {
        warn!(kind = %issue.kind, location = %issue.location, "{}", issue.message);
    }

    issues
}

struct LintContext<'a> {
    issues: &'a mut Vec<LintIssue>,
    defined_schemas: &'a HashSet<String>,
    defined_schemes: &'a HashSet<String>,
    /// operationId → location of first use
    seen_ids: HashMap<String, String>,
}

fn lint_path_template(ctx: &mut LintContext<'_>, path: &str) {
    let pattern = PathPattern::new(path);
    let params = pattern.param_names();

    for name in &params {
        if !is_valid_param_name(name) {
            ctx.issues.push(
                LintIssue::new(
                    path,
                    LintSeverity::Error,
                    "invalid_path_parameter",
                    format!("Path parameter ':{}' is not a valid identifier", name),
                )
                .with_suggestion("Use letters, digits and underscores, e.g. ':userId'"),
            );
        }
    }

    if !params.is_empty() {
        ctx.issues.push(
            LintIssue::new(
                path,
                LintSeverity::Info,
                "colon_path_parameter",
                "Path uses ':param' segments; OpenAPI path templating uses '{param}'",
            )
            .with_suggestion(format!("OpenAPI form: {}", pattern.to_openapi_path())),
        );
    }
}

fn lint_path_item(ctx: &mut LintContext<'_>, path: &str, path_item: &PathItem) {
    let operations = [
        ("GET", path_item.get.as_ref()),
        ("PUT", path_item.put.as_ref()),
        ("POST", path_item.post.as_ref()),
        ("DELETE", path_item.delete.as_ref()),
        ("PATCH", path_item.patch.as_ref()),
        ("HEAD", path_item.head.as_ref()),
        ("OPTIONS", path_item.options.as_ref()),
        ("TRACE", path_item.trace.as_ref()),
    ];

    for (method, operation) in operations {
        if let Some(operation) = operation {
            lint_operation(ctx, path, method, operation);
        }
    }
}

fn lint_operation(
    ctx: &mut LintContext<'_>,
    path: &str,
    method: &str,
    operation: &oas3::spec::Operation,
) {
    let location = format!("{} {}", path, method);

    match operation.operation_id.as_deref() {
        None | Some("") => {
            ctx.issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "missing_operation_id",
                    "Operation is missing operationId",
                )
                .with_suggestion("Add a lowerCamelCase operationId, e.g. 'getUsersByUser'"),
            );
        }
        Some(operation_id) => {
            if let Some(first) = ctx.seen_ids.get(operation_id) {
                ctx.issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Error,
                        "duplicate_operation_id",
                        format!("operationId '{}' is already used by {}", operation_id, first),
                    )
                    .with_suggestion("Set a distinct operationId override for one of the routes"),
                );
            } else {
                ctx.seen_ids
                    .insert(operation_id.to_string(), location.clone());
            }

            if !is_lower_camel_case(operation_id) {
                ctx.issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Warning,
                        "operation_id_casing",
                        format!("operationId '{}' should be lowerCamelCase", operation_id),
                    )
                    .with_suggestion(format!("Change to: {}", to_lower_camel_case(operation_id))),
                );
            }
        }
    }

    for requirement in &operation.security {
        for scheme in requirement.0.keys() {
            if !ctx.defined_schemes.contains(scheme) {
                ctx.issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Error,
                        "undefined_security_scheme",
                        format!(
                            "Security scheme '{}' not found in components.securitySchemes",
                            scheme
                        ),
                    )
                    .with_suggestion("Use 'jwtAuth' or declare the scheme"),
                );
            }
        }
    }

    if operation.responses.as_ref().map_or(true, |r| r.is_empty()) {
        ctx.issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Warning,
                "empty_responses",
                "Operation declares no responses",
            )
            .with_suggestion("Add at least one 2xx response through an operation override"),
        );
    }

    if let Ok(value) = serde_json::to_value(operation) {
        lint_refs(ctx, &location, &value);
    }
}

/// Report every `#/components/schemas/*` reference under `value` that does
/// not resolve.
fn lint_refs(ctx: &mut LintContext<'_>, location: &str, value: &Value) {
    match value {
        Value::Object(obj) => {
            if let Some(ref_path) = obj.get("$ref").and_then(|v| v.as_str()) {
                if let Some(name) = ref_path.strip_prefix("#/components/schemas/") {
                    if !ctx.defined_schemas.contains(name) {
                        ctx.issues.push(
                            LintIssue::new(
                                location,
                                LintSeverity::Error,
                                "missing_schema_ref",
                                format!(
                                    "Schema reference '{}' not found in components.schemas",
                                    name
                                ),
                            )
                            .with_suggestion(format!("Register component '{}'", name)),
                        );
                    }
                } else if ref_path.starts_with("#/") && !ref_path.starts_with("#/components/") {
                    ctx.issues.push(
                        LintIssue::new(
                            location,
                            LintSeverity::Error,
                            "invalid_schema_ref",
                            format!("Local reference '{}' does not point into components", ref_path),
                        )
                        .with_suggestion("OpenAPI 3 references look like '#/components/schemas/Name'"),
                    );
                }
            }
            for v in obj.values() {
                lint_refs(ctx, location, v);
            }
        }
        Value::Array(arr) => {
            for v in arr {
                lint_refs(ctx, location, v);
            }
        }
        _ => {}
    }
}

/// Check if a string is lowerCamelCase (`getUsersByUser`)
pub(crate) fn is_lower_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Convert a string to lowerCamelCase
pub(crate) fn to_lower_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in split_words(s).iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[must_use]
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues grouped by severity to stdout
pub fn print_lint_issues(issues: &[LintIssue]) {
    if let Err(e) = write_lint_issues(&mut std::io::stdout().lock(), issues) {
        warn!(error = %e, "failed to print lint issues");
    }
}

/// Write lint issues grouped by severity
pub fn write_lint_issues<W: Write>(out: &mut W, issues: &[LintIssue]) -> std::io::Result<()> {
    if issues.is_empty() {
        writeln!(out, "✅ No lint issues found!")?;
        return Ok(());
    }

    let count = |severity| issues.iter().filter(|i| i.severity == severity).count();
    writeln!(out, "\n📋 Lint Results:")?;
    writeln!(
        out,
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    )?;

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info (conventions):"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        writeln!(out, "{}", heading)?;
        for issue in group {
            writeln!(out, "   [{}] {}", issue.kind, issue.location)?;
            writeln!(out, "      {}", issue.message)?;
            if let Some(suggestion) = &issue.suggestion {
                writeln!(out, "      💡 Suggestion: {}", suggestion)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

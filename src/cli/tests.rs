#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Unit tests for CLI commands

use super::commands::apply_overrides;
use crate::cli::{execute, format_routes, Cli, Commands};
use crate::document::{KnownLicense, LicenseChoice, SpecOptions};
use crate::linter::ExternalLinter;
use crate::output::OutputFormat;
use crate::{ApiRegistry, Document, OperationOverride};
use clap::Parser;
use std::path::Path;

const MANIFEST: &str = r#"
options:
  title: Chat API
routes:
  get: ["/users/@me", "/users/:userId", "/guilds/:guildId"]
  delete: ["/guilds/:guildId"]
methodOperations:
  delete:
    /guilds/:guildId:
      operationId: removeGuild
"#;

fn write_manifest(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("routes.yaml");
    std::fs::write(&path, MANIFEST).unwrap();
    path
}

#[test]
fn test_generate_command_parse() {
    let cli = Cli::try_parse_from([
        "routedoc",
        "generate",
        "--manifest",
        "routes.yaml",
        "--format",
        "yaml",
        "--license",
        "apache-2.0",
        "--version",
        "2.0.0",
        "--lint",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            manifest,
            output,
            format,
            license,
            version,
            lint,
            fail_on_error,
            ..
        } => {
            assert_eq!(manifest.to_string_lossy(), "routes.yaml");
            assert!(output.is_none());
            assert_eq!(format, Some(OutputFormat::Yaml));
            assert_eq!(license, Some(KnownLicense::Apache2));
            assert_eq!(version.as_deref(), Some("2.0.0"));
            assert!(lint);
            assert!(!fail_on_error);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_rejects_unknown_license() {
    let result = Cli::try_parse_from([
        "routedoc",
        "generate",
        "--manifest",
        "routes.yaml",
        "--license",
        "GPL-3.0",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "routedoc",
        "lint",
        "--spec",
        "openapi.json",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
            external,
        } => {
            assert_eq!(spec.to_string_lossy(), "openapi.json");
            assert!(fail_on_error);
            assert!(errors_only);
            assert!(external.is_none());
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_lint_external_default_and_custom() {
    let cli = Cli::try_parse_from(["routedoc", "lint", "--spec", "a.json", "--external"]).unwrap();
    match cli.command {
        Commands::Lint { external, .. } => assert_eq!(external, Some(ExternalLinter::default())),
        _ => panic!("Expected Lint command"),
    }

    let cli = Cli::try_parse_from([
        "routedoc",
        "lint",
        "--spec",
        "a.json",
        "--external",
        "spectral lint -",
    ])
    .unwrap();
    match cli.command {
        Commands::Lint { external, .. } => {
            let linter = external.unwrap();
            assert_eq!(linter.program, "spectral");
            assert_eq!(linter.args, vec!["lint", "-"]);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_routes_command_requires_manifest() {
    assert!(Cli::try_parse_from(["routedoc", "routes"]).is_err());
}

#[test]
fn test_apply_overrides() {
    let mut options = SpecOptions::default().with_title("From manifest");
    apply_overrides(&mut options, None, Some("3.0.0"), Some(KnownLicense::Mit));
    assert_eq!(options.title, "From manifest");
    assert_eq!(options.version, "3.0.0");
    assert_eq!(options.license, Some(LicenseChoice::Known(KnownLicense::Mit)));
}

#[test]
fn test_format_routes_uses_effective_ids() {
    let mut api = ApiRegistry::new();
    api.get("/users/:userId")
        .get("/guilds/:guildId")
        .delete("/guilds/:guildId")
        .describe_for(
            crate::HttpMethod::Delete,
            "/guilds/:guildId",
            OperationOverride::new().with_operation_id("removeGuild"),
        );

    let table = format_routes(&api);
    let lines: Vec<Vec<&str>> = table
        .lines()
        .map(|l| l.split_whitespace().collect())
        .collect();
    assert_eq!(
        lines,
        vec![
            vec!["GET", "/guilds/:guildId", "getGuildsByGuild"],
            vec!["DELETE", "/guilds/:guildId", "removeGuild"],
            vec!["GET", "/users/:userId", "getUsersByUser"],
        ]
    );
}

#[test]
fn test_execute_generate_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path());
    let output = dir.path().join("out").join("openapi.yaml");

    let cli = Cli::try_parse_from([
        "routedoc",
        "generate",
        "--manifest",
        manifest.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--title",
        "Overridden",
    ])
    .unwrap();
    assert!(execute(&cli).unwrap());

    let written = std::fs::read_to_string(&output).unwrap();
    let document: Document = serde_yaml::from_str(&written).unwrap();
    assert_eq!(document.info.title, "Overridden");
    assert_eq!(document.paths.len(), 3);
    assert_eq!(
        document
            .operation(crate::HttpMethod::Delete, "/guilds/:guildId")
            .unwrap()
            .operation_id,
        "removeGuild"
    );
}

#[test]
fn test_execute_generate_fail_on_error_skips_output() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("dups.json");
    std::fs::write(
        &manifest,
        r#"{"routes": {"get": ["/users/:userId", "/users/:user"]}}"#,
    )
    .unwrap();
    let output = dir.path().join("openapi.json");

    let cli = Cli::try_parse_from([
        "routedoc",
        "generate",
        "--manifest",
        manifest.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--fail-on-error",
    ])
    .unwrap();
    assert!(!execute(&cli).unwrap());
    assert!(!output.exists());
}

#[test]
fn test_execute_missing_manifest_is_error() {
    let cli = Cli::try_parse_from(["routedoc", "routes", "--manifest", "/no/such/routes.yaml"])
        .unwrap();
    let err = execute(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read manifest"));
}

#[cfg(unix)]
#[test]
fn test_execute_lint_external_pipes_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let spec = dir.path().join("openapi.yaml");
    let content = "# kept as written\nopenapi: 3.1.0\ninfo:\n  title: Plain\n  version: '1'\n  description: no servers here\ntags:\n  - name: users\npaths:\n  /users:\n    head:\n      operationId: headUsers\n      responses:\n        '200':\n          description: OK\n";
    std::fs::write(&spec, content).unwrap();
    let captured = dir.path().join("captured.yaml");

    let cli = Cli::try_parse_from([
        "routedoc",
        "lint",
        "--spec",
        spec.to_str().unwrap(),
        "--external",
        &format!("tee {}", captured.display()),
    ])
    .unwrap();
    assert!(execute(&cli).unwrap());
    assert_eq!(std::fs::read_to_string(&captured).unwrap(), content);
}

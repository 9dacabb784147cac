use crate::document::{KnownLicense, SpecOptions};
use crate::linter::{
    has_errors, lint_document, lint_spec, print_lint_issues, run_external_linter_on,
    write_lint_issues, ExternalLinter, LintSeverity,
};
use crate::manifest::load_manifest;
use crate::output::{render, write_document, OutputFormat};
use anyhow::Context;
use crate::registry::ApiRegistry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "routedoc")]
#[command(about = "Build OpenAPI 3.1 documents from route manifests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Synthesize an OpenAPI document from a route manifest
    Generate {
        /// Route manifest (YAML, TOML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output file; the document goes to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format; defaults to the output file extension, else JSON
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Override `info.title`
        #[arg(long)]
        title: Option<String>,

        /// Override `info.version`
        #[arg(long)]
        version: Option<String>,

        /// Override `info.license` (MIT or Apache-2.0)
        #[arg(long)]
        license: Option<KnownLicense>,

        /// Lint the document and report issues on stderr
        #[arg(long, default_value_t = false)]
        lint: bool,

        /// Lint, and do not write the document if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,
    },
    /// Lint an OpenAPI document
    ///
    /// Checks operationId presence, uniqueness and casing, schema and
    /// security scheme references, empty responses and `:param` paths.
    Lint {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,

        /// Also pipe the document into an external linter command
        #[arg(long, num_args = 0..=1, default_missing_value = "npx @redocly/cli lint /dev/stdin")]
        external: Option<ExternalLinter>,
    },
    /// List the paths, methods and operation ids a manifest produces
    Routes {
        /// Route manifest (YAML, TOML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,
    },
}

/// Parse arguments and run; exits with status 1 when a command fails its checks.
///
/// # Errors
///
/// Returns an error if a manifest or document cannot be read or parsed, the
/// output cannot be written, or the external linter cannot be started.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if !execute(&cli)? {
        std::process::exit(1);
    }
    Ok(())
}

/// Run a parsed command. `Ok(false)` means the command ran but its checks
/// failed (lint errors with `--fail-on-error`, or a failing external linter).
pub fn execute(cli: &Cli) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Generate {
            manifest,
            output,
            format,
            title,
            version,
            license,
            lint,
            fail_on_error,
        } => {
            let (registry, mut options) = load_manifest(manifest)?.into_registry()?;
            apply_overrides(&mut options, title.as_deref(), version.as_deref(), *license);
            let document = registry.generate_spec(&options);

            if *lint || *fail_on_error {
                let issues = lint_document(&document)?;
                write_lint_issues(&mut std::io::stderr().lock(), &issues)?;
                if *fail_on_error && has_errors(&issues) {
                    error!(manifest = %manifest.display(), "lint errors, document not written");
                    return Ok(false);
                }
            }

            match output {
                Some(path) => {
                    let format = format.unwrap_or_else(|| OutputFormat::from_path(path));
                    write_document(&document, path, format)?;
                }
                None => println!("{}", render(&document, format.unwrap_or_default())?),
            }
            Ok(true)
        }
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
            external,
        } => {
            let mut issues = lint_spec(spec)?;
            if *errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            let mut ok = !(*fail_on_error && has_errors(&issues));

            if let Some(linter) = external {
                let content = std::fs::read(spec)
                    .with_context(|| format!("Failed to read spec: {}", spec.display()))?;
                let status = run_external_linter_on(&content, linter)?;
                info!(status = %status, "external linter finished");
                ok &= status.success();
            }
            Ok(ok)
        }
        Commands::Routes { manifest } => {
            let (registry, _) = load_manifest(manifest)?.into_registry()?;
            print!("{}", format_routes(&registry));
            Ok(true)
        }
    }
}

pub(super) fn apply_overrides(
    options: &mut SpecOptions,
    title: Option<&str>,
    version: Option<&str>,
    license: Option<KnownLicense>,
) {
    if let Some(title) = title {
        options.title = title.to_string();
    }
    if let Some(version) = version {
        options.version = version.to_string();
    }
    if let Some(license) = license {
        options.license = Some(license.into());
    }
}

/// One line per operation: method, path, effective operationId.
#[must_use]
pub fn format_routes(registry: &ApiRegistry) -> String {
    let document = registry.generate_spec(&SpecOptions::default());
    let mut out = String::new();
    for (path, item) in &document.paths {
        for method in item.methods() {
            if let Some(operation) = item.operation(method) {
                out.push_str(&format!(
                    "{:<7} {:<48} {}\n",
                    method.as_str(),
                    path,
                    operation.operation_id
                ));
            }
        }
    }
    out
}

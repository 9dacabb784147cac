//! # CLI Module
//!
//! Command-line front end for building and checking OpenAPI documents from a
//! route manifest.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Synthesize a document from a manifest:
//!
//! ```bash
//! routedoc generate --manifest routes.yaml --output openapi.json
//! ```
//!
//! Options:
//! - `--manifest <FILE>` - route manifest (YAML, TOML or JSON, required)
//! - `--output <FILE>` - write here instead of stdout
//! - `--format <json|yaml>` - defaults to the output extension, else JSON
//! - `--title`, `--version`, `--license` - override the manifest options
//! - `--lint` / `--fail-on-error` - lint the result before writing
//!
//! ### `lint`
//!
//! ```bash
//! routedoc lint --spec openapi.json --errors-only
//! routedoc lint --spec openapi.json --external
//! ```
//!
//! `--external` with no value pipes the document into
//! `npx @redocly/cli lint /dev/stdin`; pass a command to use another tool.
//!
//! ### `routes`
//!
//! ```bash
//! routedoc routes --manifest routes.yaml
//! ```
//!
//! Prints each path with its methods and derived operation ids, in document
//! order.

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, format_routes, run_cli, Cli, Commands};

//! # routedoc
//!
//! **routedoc** collects HTTP route templates grouped by method, together
//! with optional per-operation metadata and named component schemas, and
//! synthesizes an [OpenAPI 3.1.0](https://spec.openapis.org/oas/v3.1.0)
//! document from them.
//!
//! ## Overview
//!
//! Two things have to be stable across runs for generated clients and docs
//! to stay stable:
//!
//! - the order of `paths`: every distinct template once, sorted by code point
//! - the `operationId` of each route, derived from method and template
//!   (`GET /users/@me` → `getUsersByMe`)
//!
//! Everything else (summaries, security, responses) is layered on from
//! operation overrides without interpretation.
//!
//! ## Architecture
//!
//! - **[`pattern`]** - path templates with `:param` and `@sentinel` segments
//! - **[`method`]** - the five supported HTTP methods
//! - **[`registry`]** - route sets, operation overrides, component schemas
//! - **[`canonical`]** - the sorted, de-duplicated template list
//! - **[`operation_id`]** - operationId derivation
//! - **[`document`]** - the OpenAPI document model and [`generate_spec`]
//! - **[`output`]** - JSON/YAML rendering and file output
//! - **[`manifest`]** - declarative route files (YAML, TOML, JSON)
//! - **[`linter`]** - checks on the produced document, plus external linters
//! - **[`cli`]** - the `routedoc` command
//! - **[`logging`]** - tracing subscriber setup
//!
//! ### Synthesis Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Registry as ApiRegistry
//!     participant Canon as canonical
//!     participant Ids as operation_id
//!     participant Meta as MetadataStore
//!
//!     Caller->>Registry: get("/users/:userId"), describe(...)
//!     Caller->>Registry: generate_spec(&options)
//!     Registry->>Canon: unique_templates()
//!     loop each template, each method
//!         Registry->>Ids: derive_operation_id(method, template)
//!         Registry->>Meta: resolve(method, template)
//!     end
//!     Registry-->>Caller: Document
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use routedoc::{ApiRegistry, HttpMethod, OperationOverride, SpecOptions, KnownLicense};
//!
//! let mut api = ApiRegistry::new();
//! api.get("/users")
//!     .get("/users/@me")
//!     .get("/guilds/:guildId")
//!     .delete("/guilds/:guildId")
//!     .describe(
//!         "/users/@me",
//!         OperationOverride::new()
//!             .with_summary("The signed-in user")
//!             .with_security("jwtAuth", Vec::<String>::new()),
//!     );
//!
//! let doc = api.generate_spec(&SpecOptions::default().with_license(KnownLicense::Mit));
//!
//! let keys: Vec<_> = doc.paths.keys().cloned().collect();
//! assert_eq!(keys, vec!["/guilds/:guildId", "/users", "/users/@me"]);
//!
//! let me = doc.operation(HttpMethod::Get, "/users/@me").unwrap();
//! assert_eq!(me.operation_id, "getUsersByMe");
//! assert_eq!(me.summary.as_deref(), Some("The signed-in user"));
//!
//! let json = routedoc::output::to_json(&doc).unwrap();
//! assert!(json.contains("\"deleteGuildsByGuild\""));
//! ```
//!
//! ## Concurrency
//!
//! Registration takes `&mut self`; synthesis takes `&self` and only reads, so
//! any number of threads may synthesize from a shared registry. Callers that
//! register from several threads wrap the registry in a `Mutex` or `RwLock`.

pub mod canonical;
pub mod cli;
pub mod demo;
pub mod document;
pub mod linter;
pub mod logging;
pub mod manifest;
pub mod method;
pub mod operation_id;
pub mod output;
pub mod pattern;
pub mod registry;

pub use document::{
    generate_spec, Document, KnownLicense, License, LicenseChoice, Operation, OperationOverride,
    PathItem, ServerOverride, SpecOptions,
};
pub use manifest::{load_manifest, Manifest};
pub use method::HttpMethod;
pub use operation_id::derive_operation_id;
pub use output::OutputFormat;
pub use pattern::PathPattern;
pub use registry::ApiRegistry;

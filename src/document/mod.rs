//! # Document Module
//!
//! The OpenAPI 3.1 object model this crate emits, the options that shape a
//! synthesis run, and the synthesizer itself.
//!
//! ## Synthesis
//!
//! [`generate_spec`] walks the canonical template list (see
//! [`crate::canonical`]) and, for each method registered on a template,
//! emits
//!
//! ```json
//! { "operationId": "<derived>", "responses": {}, "security": [] }
//! ```
//!
//! with any stored [`OperationOverride`] laid over the top-level fields.
//! Components always carry the `jwtAuth` bearer scheme next to the
//! registered schemas.
//!
//! ## Options
//!
//! | Field | Default |
//! |-------|---------|
//! | `title` | `Example API` |
//! | `version` | `1.0.0` |
//! | `license` | omitted; `MIT` / `Apache-2.0` shorthands or a full object |
//! | `servers` | one server, `https://example.one/api` |

mod options;
mod synth;
mod types;

pub use options::{
    KnownLicense, LicenseChoice, ServerOverride, SpecOptions, DEFAULT_SERVER_DESCRIPTION,
    DEFAULT_SERVER_URL, DEFAULT_TITLE, DEFAULT_VERSION,
};
pub use synth::{generate_spec, JWT_SCHEME_NAME, OPENAPI_VERSION};
pub use types::{
    Components, Document, Info, License, Operation, OperationOverride, PathItem, SecurityRequirement,
    SecurityScheme, Server, ServerVariable,
};

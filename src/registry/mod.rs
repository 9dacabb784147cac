//! # Registry Module
//!
//! Everything a document is built from, collected before synthesis:
//!
//! - [`RouteRegistry`] - per-method sets of path templates
//! - [`MetadataStore`] - operation overrides (summary, security, responses, ...)
//! - [`ComponentStore`] - reusable schemas for `components.schemas`
//!
//! [`ApiRegistry`] bundles the three stores into one context object. It is
//! built once per document, filled through `&mut self` registration calls and
//! then read through `&self` by [`generate_spec`](crate::generate_spec), which
//! can run any number of times with different [`SpecOptions`].
//!
//! The registry has no interior locking. It is `Send + Sync`, so a host that
//! registers routes from several threads wraps it in a `Mutex` or `RwLock`;
//! synthesis only needs a shared reference.
//!
//! ## Example
//!
//! ```rust
//! use routedoc::{ApiRegistry, OperationOverride, SpecOptions};
//! use serde_json::json;
//!
//! let mut api = ApiRegistry::new();
//! api.get("/users")
//!     .get("/users/:userId")
//!     .delete("/users/:userId");
//! api.describe("/users/:userId", OperationOverride::new().with_summary("A single user"));
//! api.component("User", json!({ "type": "object" }));
//!
//! let doc = api.generate_spec(&SpecOptions::default());
//! assert_eq!(doc.paths.len(), 2);
//! ```

mod components;
mod metadata;
mod routes;

pub use components::ComponentStore;
pub use metadata::MetadataStore;
pub use routes::RouteRegistry;

use crate::document::{Document, OperationOverride, SpecOptions};
use crate::method::HttpMethod;
use crate::pattern::PathPattern;
use serde_json::Value;

/// Routes, operation metadata and component schemas for one document.
#[derive(Debug, Clone, Default)]
pub struct ApiRegistry {
    routes: RouteRegistry,
    metadata: MetadataStore,
    components: ComponentStore,
}

impl ApiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Repeat registrations are ignored.
    pub fn route(&mut self, method: HttpMethod, template: impl Into<PathPattern>) -> &mut Self {
        self.routes.add(method, template);
        self
    }

    pub fn get(&mut self, template: impl Into<PathPattern>) -> &mut Self {
        self.route(HttpMethod::Get, template)
    }

    pub fn put(&mut self, template: impl Into<PathPattern>) -> &mut Self {
        self.route(HttpMethod::Put, template)
    }

    pub fn post(&mut self, template: impl Into<PathPattern>) -> &mut Self {
        self.route(HttpMethod::Post, template)
    }

    pub fn delete(&mut self, template: impl Into<PathPattern>) -> &mut Self {
        self.route(HttpMethod::Delete, template)
    }

    pub fn patch(&mut self, template: impl Into<PathPattern>) -> &mut Self {
        self.route(HttpMethod::Patch, template)
    }

    /// Attach an override to every method registered on `template`.
    pub fn describe(&mut self, template: impl Into<String>, operation: OperationOverride) -> &mut Self {
        self.metadata.set(template, operation);
        self
    }

    /// Attach an override to one (method, template) operation.
    pub fn describe_for(
        &mut self,
        method: HttpMethod,
        template: impl Into<String>,
        operation: OperationOverride,
    ) -> &mut Self {
        self.metadata.set_for(method, template, operation);
        self
    }

    /// Add or replace a named component schema.
    pub fn component(&mut self, name: impl Into<String>, schema: Value) -> &mut Self {
        self.components.set(name, schema);
        self
    }

    #[must_use]
    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    #[must_use]
    pub fn metadata(&self) -> &MetadataStore {
        &self.metadata
    }

    #[must_use]
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    pub fn routes_mut(&mut self) -> &mut RouteRegistry {
        &mut self.routes
    }

    pub fn metadata_mut(&mut self) -> &mut MetadataStore {
        &mut self.metadata
    }

    pub fn components_mut(&mut self) -> &mut ComponentStore {
        &mut self.components
    }

    /// Build the document. Does not modify the registry.
    #[must_use]
    pub fn generate_spec(&self, options: &SpecOptions) -> Document {
        crate::document::generate_spec(self, options)
    }
}

use crate::method::HttpMethod;
use crate::pattern::PathPattern;
use indexmap::IndexSet;
use std::collections::HashMap;
use tracing::debug;

/// Per-method sets of registered path patterns.
///
/// Each set keeps registration order; registering the same template twice
/// under one method is a no-op.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: HashMap<HttpMethod, IndexSet<PathPattern>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `template` under `method`.
    ///
    /// Returns `true` if the route was new.
    pub fn add(&mut self, method: HttpMethod, template: impl Into<PathPattern>) -> bool {
        let pattern = template.into();
        let set = self.routes.entry(method).or_default();
        if set.contains(pattern.as_str()) {
            debug!(%method, template = %pattern, "route already registered");
            return false;
        }
        debug!(%method, template = %pattern, "route registered");
        set.insert(pattern)
    }

    /// The stored pattern equal to `template`, if `method` has one.
    #[must_use]
    pub fn has_route(&self, method: HttpMethod, template: &str) -> Option<&PathPattern> {
        self.routes.get(&method)?.get(template)
    }

    /// Patterns registered for `method`, in registration order.
    #[must_use]
    pub fn patterns(&self, method: HttpMethod) -> &[PathPattern] {
        self.routes
            .get(&method)
            .map(|set| &**set.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn len(&self, method: HttpMethod) -> usize {
        self.routes.get(&method).map_or(0, IndexSet::len)
    }

    /// Number of (method, template) pairs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.routes.values().map(IndexSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Methods that have `template` registered, in canonical order.
    #[must_use]
    pub fn methods_for(&self, template: &str) -> Vec<HttpMethod> {
        HttpMethod::ALL
            .into_iter()
            .filter(|m| self.has_route(*m, template).is_some())
            .collect()
    }
}

use crate::document::OperationOverride;
use crate::method::HttpMethod;
use std::collections::HashMap;

/// Operation overrides keyed by template text.
///
/// A template-wide override answers for every method registered on that
/// template. A method-scoped override, when present, is layered on top of
/// it field by field.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    shared: HashMap<String, OperationOverride>,
    scoped: HashMap<(HttpMethod, String), OperationOverride>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template-wide override, replacing any previous one.
    pub fn set(&mut self, template: impl Into<String>, operation: OperationOverride) {
        self.shared.insert(template.into(), operation);
    }

    /// Set the override for one method only.
    pub fn set_for(
        &mut self,
        method: HttpMethod,
        template: impl Into<String>,
        operation: OperationOverride,
    ) {
        self.scoped.insert((method, template.into()), operation);
    }

    #[must_use]
    pub fn get(&self, template: &str) -> Option<&OperationOverride> {
        self.shared.get(template)
    }

    #[must_use]
    pub fn get_for(&self, method: HttpMethod, template: &str) -> Option<&OperationOverride> {
        self.scoped.get(&(method, template.to_string()))
    }

    /// Effective override for one operation.
    #[must_use]
    pub fn resolve(&self, method: HttpMethod, template: &str) -> Option<OperationOverride> {
        match (self.get(template), self.get_for(method, template)) {
            (None, None) => None,
            (Some(shared), None) => Some(shared.clone()),
            (None, Some(scoped)) => Some(scoped.clone()),
            (Some(shared), Some(scoped)) => Some(shared.overlay(scoped)),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.len() + self.scoped.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.scoped.is_empty()
    }
}

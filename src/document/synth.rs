use super::options::SpecOptions;
use super::types::{Components, Document, Info, Operation, PathItem, SecurityScheme};
use crate::canonical::unique_templates;
use crate::method::HttpMethod;
use crate::operation_id::derive_operation_id;
use crate::registry::ApiRegistry;
use std::collections::BTreeMap;
use tracing::debug;

pub const OPENAPI_VERSION: &str = "3.1.0";

/// Name of the built-in bearer JWT scheme in `components.securitySchemes`.
pub const JWT_SCHEME_NAME: &str = "jwtAuth";

/// Synthesize the OpenAPI document for everything in `registry`.
///
/// Pure read of the registry: calling it again, with the same or different
/// options, never changes the stored routes, metadata or components.
#[must_use]
pub fn generate_spec(registry: &ApiRegistry, options: &SpecOptions) -> Document {
    let paths = build_paths(registry);

    debug!(
        paths = paths.len(),
        operations = registry.routes().total(),
        schemas = registry.components().len(),
        title = %options.title,
        "synthesized OpenAPI document"
    );

    Document {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: options.title.clone(),
            version: options.version.clone(),
            license: options.resolved_license(),
        },
        servers: options.resolved_servers(),
        components: build_components(registry),
        paths,
    }
}

fn build_components(registry: &ApiRegistry) -> Components {
    let mut security_schemes = BTreeMap::new();
    security_schemes.insert(JWT_SCHEME_NAME.to_string(), SecurityScheme::bearer_jwt());
    Components {
        schemas: registry.components().schemas().clone(),
        security_schemes,
    }
}

fn build_paths(registry: &ApiRegistry) -> BTreeMap<String, PathItem> {
    let routes = registry.routes();
    let mut paths = BTreeMap::new();

    for template in unique_templates(routes) {
        let mut item = PathItem::default();
        for method in HttpMethod::ALL {
            if routes.has_route(method, template).is_some() {
                item.set(method, build_operation(registry, method, template));
            }
        }
        paths.insert(template.to_string(), item);
    }

    paths
}

fn build_operation(registry: &ApiRegistry, method: HttpMethod, template: &str) -> Operation {
    let mut operation = Operation::new(derive_operation_id(method, template));
    if let Some(found) = registry.metadata().resolve(method, template) {
        found.apply_to(&mut operation);
    }
    operation
}

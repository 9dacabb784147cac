//! Path canonicalization: one sorted, duplicate-free list of templates
//! across all methods. This order is the order of `paths` in the document.

use crate::method::HttpMethod;
use crate::pattern::PathPattern;
use crate::registry::RouteRegistry;

/// Every registered (method, pattern) pair.
///
/// Methods come in canonical order, patterns in registration order.
#[must_use]
pub fn list_all_routes(routes: &RouteRegistry) -> Vec<(HttpMethod, &PathPattern)> {
    HttpMethod::ALL
        .into_iter()
        .flat_map(|method| routes.patterns(method).iter().map(move |p| (method, p)))
        .collect()
}

/// [`list_all_routes`] stably sorted by template text (code-point order).
#[must_use]
pub fn sorted_templates(routes: &RouteRegistry) -> Vec<(HttpMethod, &PathPattern)> {
    let mut all = list_all_routes(routes);
    all.sort_by(|(_, a), (_, b)| a.as_str().cmp(b.as_str()));
    all
}

/// Distinct templates in sorted order.
///
/// When several methods share a template only the first representative is
/// kept; callers look up methods again by template afterwards.
#[must_use]
pub fn unique_templates(routes: &RouteRegistry) -> Vec<&str> {
    let mut unique: Vec<&str> = sorted_templates(routes)
        .into_iter()
        .map(|(_, p)| p.as_str())
        .collect();
    unique.dedup();
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteRegistry {
        let mut routes = RouteRegistry::new();
        routes.add(HttpMethod::Get, "/users/:userId");
        routes.add(HttpMethod::Get, "/users");
        routes.add(HttpMethod::Delete, "/guilds/:guildId");
        routes.add(HttpMethod::Get, "/guilds/:guildId");
        routes.add(HttpMethod::Post, "/users");
        routes
    }

    #[test]
    fn test_list_all_routes_groups_by_method() {
        let routes = sample();
        let listed: Vec<_> = list_all_routes(&routes)
            .into_iter()
            .map(|(m, p)| (m, p.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (HttpMethod::Get, "/users/:userId"),
                (HttpMethod::Get, "/users"),
                (HttpMethod::Get, "/guilds/:guildId"),
                (HttpMethod::Post, "/users"),
                (HttpMethod::Delete, "/guilds/:guildId"),
            ]
        );
    }

    #[test]
    fn test_sorted_is_stable() {
        let routes = sample();
        let sorted: Vec<_> = sorted_templates(&routes)
            .into_iter()
            .map(|(m, p)| (m, p.as_str()))
            .collect();
        assert_eq!(
            sorted,
            vec![
                (HttpMethod::Get, "/guilds/:guildId"),
                (HttpMethod::Delete, "/guilds/:guildId"),
                (HttpMethod::Get, "/users"),
                (HttpMethod::Post, "/users"),
                (HttpMethod::Get, "/users/:userId"),
            ]
        );
    }

    #[test]
    fn test_unique_sorted_without_duplicates() {
        let routes = sample();
        assert_eq!(
            unique_templates(&routes),
            vec!["/guilds/:guildId", "/users", "/users/:userId"]
        );
    }

    #[test]
    fn test_code_point_ordering() {
        let mut routes = RouteRegistry::new();
        for t in ["/b", "/B", "/a/:id", "/a", "/@me", "/a/"] {
            routes.add(HttpMethod::Get, t);
        }
        assert_eq!(
            unique_templates(&routes),
            vec!["/@me", "/B", "/a", "/a/", "/a/:id", "/b"]
        );
    }

    #[test]
    fn test_empty_registry() {
        assert!(unique_templates(&RouteRegistry::new()).is_empty());
    }
}

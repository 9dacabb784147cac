#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end synthesis through the public API: path ordering, operation
//! ids, overrides, options, and recovering routes from the document.

use routedoc::demo::demo_registry;
use routedoc::document::{JWT_SCHEME_NAME, OPENAPI_VERSION};
use routedoc::{
    derive_operation_id, generate_spec, ApiRegistry, HttpMethod, KnownLicense, License,
    OperationOverride, ServerOverride, SpecOptions,
};
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn to_value(api: &ApiRegistry, options: &SpecOptions) -> Value {
    serde_json::to_value(api.generate_spec(options)).unwrap()
}

#[test]
fn test_empty_registry_produces_empty_paths() {
    let api = ApiRegistry::new();
    let doc = generate_spec(&api, &SpecOptions::default());
    assert!(doc.paths.is_empty());

    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value["openapi"], OPENAPI_VERSION);
    assert_eq!(value["paths"], json!({}));
    assert_eq!(value["info"], json!({"title": "Example API", "version": "1.0.0"}));
    assert_eq!(
        value["servers"],
        json!([{
            "url": "https://example.one/api",
            "description": "Example server",
            "variables": {}
        }])
    );
    assert_eq!(
        value["components"],
        json!({
            "schemas": {},
            "securitySchemes": {
                "jwtAuth": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}
            }
        })
    );
}

#[test]
fn test_derived_operation_ids() {
    let cases = [
        (HttpMethod::Get, "/users", "getUsers"),
        (HttpMethod::Get, "/users/:userId", "getUsersByUser"),
        (HttpMethod::Get, "/users/@me", "getUsersByMe"),
        (HttpMethod::Get, "/users/@me/extra", "getUsersByMe"),
        (
            HttpMethod::Get,
            "/guilds/:guildId/channels/:channelId/messages/:messageId",
            "getGuildsByGuildByChannelsByChannelByMessagesByMessage",
        ),
        (HttpMethod::Delete, "/guilds/:guildId", "deleteGuildsByGuild"),
        (HttpMethod::Patch, "/user-profiles/:profileId", "patchUserProfilesByProfile"),
    ];
    for (method, template, expected) in cases {
        assert_eq!(
            derive_operation_id(method, template),
            expected,
            "{method} {template}"
        );
    }
}

#[test]
fn test_operation_shape_without_override() {
    let mut api = ApiRegistry::new();
    api.get("/users/:userId");
    let value = to_value(&api, &SpecOptions::default());
    assert_eq!(
        value["paths"]["/users/:userId"],
        json!({"get": {"operationId": "getUsersByUser", "responses": {}, "security": []}})
    );
}

#[test]
fn test_custom_operation_id_override_wins() {
    let mut api = ApiRegistry::new();
    api.get("/users/@me")
        .describe("/users/@me", OperationOverride::new().with_operation_id("whoAmI"));
    let doc = api.generate_spec(&SpecOptions::default());
    assert_eq!(
        doc.operation(HttpMethod::Get, "/users/@me").unwrap().operation_id,
        "whoAmI"
    );
}

#[test]
fn test_override_replaces_top_level_fields_only() {
    let mut api = ApiRegistry::new();
    api.post("/guilds").describe(
        "/guilds",
        OperationOverride::new()
            .with_summary("Create a guild")
            .with_security(JWT_SCHEME_NAME, Vec::<String>::new())
            .with_response("201", json!({"description": "Created"}))
            .with_extension("x-rate-limit", json!(10)),
    );
    let value = to_value(&api, &SpecOptions::default());
    assert_eq!(
        value["paths"]["/guilds"]["post"],
        json!({
            "operationId": "postGuilds",
            "summary": "Create a guild",
            "responses": {"201": {"description": "Created"}},
            "security": [{"jwtAuth": []}],
            "x-rate-limit": 10
        })
    );
}

#[test]
fn test_shared_override_applies_to_every_method_on_template() {
    let mut api = ApiRegistry::new();
    api.get("/guilds/:guildId")
        .delete("/guilds/:guildId")
        .describe("/guilds/:guildId", OperationOverride::new().with_tags(["guilds"]))
        .describe_for(
            HttpMethod::Delete,
            "/guilds/:guildId",
            OperationOverride::new().with_summary("Delete a guild"),
        );
    let doc = api.generate_spec(&SpecOptions::default());

    let get = doc.operation(HttpMethod::Get, "/guilds/:guildId").unwrap();
    let delete = doc.operation(HttpMethod::Delete, "/guilds/:guildId").unwrap();
    assert_eq!(get.tags, Some(vec!["guilds".to_string()]));
    assert_eq!(delete.tags, Some(vec!["guilds".to_string()]));
    assert_eq!(get.summary, None);
    assert_eq!(delete.summary.as_deref(), Some("Delete a guild"));
}

#[test]
fn test_round_trip_route_set() {
    let api = demo_registry();
    let doc = api.generate_spec(&SpecOptions::default());

    let registered: BTreeSet<(HttpMethod, String)> = routedoc::canonical::list_all_routes(api.routes())
        .into_iter()
        .map(|(m, p)| (m, p.as_str().to_string()))
        .collect();
    assert_eq!(doc.routes(), registered);
    assert_eq!(registered.len(), 16);
}

#[test]
fn test_paths_sorted_and_unique() {
    let mut api = ApiRegistry::new();
    for template in ["/b", "/a/:id", "/a", "/B", "/a"] {
        api.get(template).put(template);
    }
    let json = routedoc::output::to_json(&api.generate_spec(&SpecOptions::default())).unwrap();
    // serde_json keeps the document's path order in the rendered text
    let positions: Vec<usize> = ["\"/B\"", "\"/a\"", "\"/a/:id\"", "\"/b\""]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert_eq!(json.matches("\"/a\":").count(), 1);
}

#[test]
fn test_duplicate_registration_keeps_count() {
    let mut api = ApiRegistry::new();
    api.get("/users").get("/users");
    assert_eq!(api.routes().len(HttpMethod::Get), 1);
    api.get("/users/");
    assert_eq!(api.routes().len(HttpMethod::Get), 2);
}

#[test]
fn test_options_license_and_servers() {
    let mut api = ApiRegistry::new();
    api.get("/users");

    let value = to_value(
        &api,
        &SpecOptions::default()
            .with_title("Chat")
            .with_version("2.1.0")
            .with_license(KnownLicense::Apache2)
            .with_server(ServerOverride::new().with_url("https://chat.example.com")),
    );
    assert_eq!(
        value["info"],
        json!({
            "title": "Chat",
            "version": "2.1.0",
            "license": {
                "identifier": "Apache-2.0",
                "name": "Apache License 2.0",
                "url": "https://www.apache.org/licenses/LICENSE-2.0"
            }
        })
    );
    assert_eq!(
        value["servers"],
        json!([{"url": "https://chat.example.com", "description": "Example server", "variables": {}}])
    );

    let custom = License::new("Proprietary").with_url("https://example.com/license");
    let value = to_value(&api, &SpecOptions::default().with_license(custom));
    assert_eq!(
        value["info"]["license"],
        json!({"name": "Proprietary", "url": "https://example.com/license"})
    );

    let mut no_servers = SpecOptions::default();
    no_servers.servers = Some(Vec::new());
    assert_eq!(to_value(&api, &no_servers)["servers"], json!([]));
}

#[test]
fn test_components_are_copied() {
    let mut api = ApiRegistry::new();
    api.component("User", json!({"type": "object"}))
        .component("User", json!({"type": "object", "required": ["id"]}))
        .component("Guild", json!({"type": "object"}));
    let value = to_value(&api, &SpecOptions::default());
    assert_eq!(
        value["components"]["schemas"],
        json!({
            "Guild": {"type": "object"},
            "User": {"type": "object", "required": ["id"]}
        })
    );
}

#[test]
fn test_concurrent_synthesis_from_shared_registry() {
    let api = demo_registry();
    let expected = api.generate_spec(&SpecOptions::default());

    let documents: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let api = &api;
                scope.spawn(move || {
                    api.generate_spec(&SpecOptions::default().with_version(format!("1.0.{i}")))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, doc) in documents.iter().enumerate() {
        assert_eq!(doc.info.version, format!("1.0.{i}"));
        assert_eq!(doc.paths, expected.paths);
    }
}

#[test]
fn test_demo_document_ids() {
    let doc = demo_registry().generate_spec(&SpecOptions::default());
    let ids: BTreeSet<String> = doc
        .paths
        .values()
        .flat_map(|item| {
            item.methods()
                .into_iter()
                .filter_map(|m| item.operation(m).map(|op| op.operation_id.clone()))
                .collect::<Vec<_>>()
        })
        .collect();

    assert_eq!(ids.len(), 16, "operation ids must be unique: {ids:?}");
    for id in [
        "getUsersByMe",
        "getUsersByUserByPostsByPostByCommentsByCommentByReactions",
        "deleteGuildsByGuild",
        "getGuildsByGuildByChannelsByChannelByMessagesByMessageByReactions",
    ] {
        assert!(ids.contains(id), "missing {id}");
    }
}

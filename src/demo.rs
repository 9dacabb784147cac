//! The sample Users/Guilds route set used by the `demo-spec` binary,
//! benches and tests.

use crate::registry::ApiRegistry;

/// Users, posts, comments and reactions, plus guilds with channels and
/// messages. Only `DELETE /guilds/:guildId` is not a GET.
#[must_use]
pub fn demo_registry() -> ApiRegistry {
    let mut api = ApiRegistry::new();
    api.get("/users")
        .get("/users/:userId/posts/:postId/comments")
        .get("/users/@me")
        .get("/users/:userId")
        .get("/users/:userId/posts/:postId")
        .get("/users/:userId/posts/:postId/comments/:commentId/reactions")
        .get("/users/:userId/posts")
        .get("/users/:userId/posts/:postId/comments/:commentId");

    api.get("/guilds")
        .get("/guilds/:guildId")
        .delete("/guilds/:guildId")
        .get("/guilds/:guildId/channels")
        .get("/guilds/:guildId/channels/:channelId")
        .get("/guilds/:guildId/channels/:channelId/messages")
        .get("/guilds/:guildId/channels/:channelId/messages/:messageId")
        .get("/guilds/:guildId/channels/:channelId/messages/:messageId/reactions");
    api
}

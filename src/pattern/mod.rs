//! # Path Pattern Module
//!
//! Route path templates as registered by callers, e.g. `/users/:userId/posts`
//! or `/users/@me`.
//!
//! ## Grammar
//!
//! A template is a `/`-separated list of segments. Each non-empty segment is
//! one of:
//!
//! - a **literal** (`users`)
//! - a **parameter** prefixed with `:` (`:userId`)
//! - a **sentinel** prefixed with `@` (`@me`), a literal that stands for the
//!   current authenticated subject rather than an identifier
//!
//! Two patterns are equal when their template text is equal. No trailing
//! slash or case normalization is applied.
//!
//! ## Example
//!
//! ```rust
//! use routedoc::pattern::{PathPattern, Segment};
//!
//! let pattern = PathPattern::new("/users/:userId/posts");
//! assert_eq!(pattern.param_names(), vec!["userId"]);
//! assert_eq!(pattern.to_openapi_path(), "/users/{userId}/posts");
//! assert_eq!(pattern.segments()[0], Segment::Literal("users".into()));
//! ```

mod template;

pub use template::{is_valid_param_name, PathPattern, Segment};

//! Route-template compiler and matcher.
//!
//! Compiles a URI path template with named placeholders into a reusable
//! [`RouteDescriptor`], then tests concrete request paths against it and
//! extracts the placeholder values.
//!
//! # Features
//!
//! - Named placeholders (`/users/{id}`), repeats allowed
//! - Prefix matching for hierarchical sub-routing
//! - Case-insensitive paths with the original string preserved
//! - Linear-time matching (no backtracking blow-up)
//!
//! # Quick Start
//!
//! ```rust
//! use route_match::{compile, match_route};
//!
//! // Compile once per template.
//! let route = compile("users/{username}/account/{id}");
//! assert_eq!(route.name(), "/users/{username}/account/{id}/");
//!
//! // Match per request.
//! let hit = match_route(Some("/users/nic/account/1/blabla"), &route).unwrap();
//! assert_eq!(hit.matched, "/users/nic/account/1/");
//! assert_eq!(hit.get_param("username"), Some("nic"));
//! assert_eq!(hit.get_param("id"), Some("1"));
//!
//! // Anything else is simply no match.
//! assert!(match_route(Some("/other/path"), &route).is_none());
//! ```
//!
//! This crate is a matching primitive: method dispatch, route tables, and
//! priority ordering between routes belong to the router built on top of it.

#![warn(unsafe_code)]

mod descriptor;
mod r#match;

pub use descriptor::{RouteDescriptor, compile};
pub use r#match::{RouteMatch, match_route};

//! REST API client plumbing.

pub(crate) mod client;
pub(crate) mod endpoints;

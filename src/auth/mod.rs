//! Authentication for GitHub
//!
//! The token is borrowed from the `gh` CLI; nothing is read from the
//! environment or stored.

mod github;

pub use github::{GitHubAuthConfig, get_github_auth, parse_token_output};

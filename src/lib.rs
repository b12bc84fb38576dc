//! gh-sweep: delete local branches whose GitHub pull requests are done
//!
//! A branch is deleted once every pull request opened from it has been
//! merged. With force mode, branches whose pull requests were all closed
//! without merging go too, as long as none is still open.
//!
//! The crate is split along its I/O boundaries:
//! - [`repo`] lists and deletes local branches through `git`
//! - [`auth`] and [`platform`] talk to GitHub through `gh` and GraphQL
//! - [`sweep`] holds the pure deletion rules and the per-branch loop

pub mod auth;
pub mod error;
pub mod platform;
pub mod repo;
pub mod sweep;
pub mod types;

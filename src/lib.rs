//! Library entry for newsboard: fetch client, refresh orchestration, filtering
//! and the dashboard controller, exposed for the binary and integration tests.

pub mod app;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
pub mod util;
pub mod view;

#[cfg(test)]
mod test_utils;

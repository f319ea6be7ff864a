#![allow(dead_code)]

pub mod harness;

use harness::TestRepo;
use rstest::fixture;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
pub fn repo() -> TestRepo {
    init_tracing();
    TestRepo::new()
}

/// Helper to collect commit messages, newest first
pub fn messages(commits: &[bitquery::prelude::Commit]) -> Vec<&str> {
    commits.iter().map(|commit| commit.message()).collect()
}

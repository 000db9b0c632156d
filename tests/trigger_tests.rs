// Host-side tests for the recoil trigger.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod trigger {
    include!("../src/core/trigger.rs");
}

use trigger::Trigger;

#[test]
fn trigger_is_idle_until_pulled() {
    let mut t = Trigger::new(100.0);
    assert!(!t.is_firing());
    t.tick(1_000.0);
    assert!(!t.is_firing());
}

#[test]
fn trigger_releases_after_duration() {
    let mut t = Trigger::new(100.0);
    t.pull(500.0);
    assert!(t.is_firing());
    t.tick(599.9);
    assert!(t.is_firing());
    t.tick(600.0);
    assert!(!t.is_firing());
}

#[test]
fn latest_pull_wins() {
    let mut t = Trigger::new(100.0);
    t.pull(0.0);
    t.pull(80.0);
    t.tick(150.0);
    assert!(t.is_firing());
    t.tick(180.0);
    assert!(!t.is_firing());
}

// Host-side tests for start-up sequencing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod startup {
    include!("../src/startup.rs");
}

use startup::*;

#[test]
fn failed_stage_does_not_block_later_stages() {
    let mut ran = Vec::new();
    let first = run_stage("particle field", || {
        ran.push("particle field");
        Err(anyhow::anyhow!("#particles is not a canvas"))
    });
    let second = run_stage("fade-in", || {
        ran.push("fade-in");
        Ok(())
    });
    assert!(!first);
    assert!(second);
    assert_eq!(ran, vec!["particle field", "fade-in"]);
}

#[test]
fn successful_stage_reports_true() {
    assert!(run_stage("header", || Ok(())));
}

// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use spring_core::{Controls, SpringParams};

#[test]
fn parse_accepts_plain_and_padded_numbers() {
    assert_eq!(parse_param("0.02"), Some(0.02));
    assert_eq!(parse_param(" 10 "), Some(10.0));
    assert_eq!(parse_param("-3.5"), Some(-3.5));
    assert_eq!(parse_param("1e2"), Some(100.0));
}

#[test]
fn parse_rejects_empty_garbage_and_non_finite() {
    assert_eq!(parse_param(""), None);
    assert_eq!(parse_param("abc"), None);
    assert_eq!(parse_param("NaN"), None);
    assert_eq!(parse_param("inf"), None);
}

#[test]
fn element_ids_match_page_inputs() {
    let ids: Vec<_> = ParamField::ALL.iter().map(|f| f.element_id()).collect();
    assert_eq!(ids, vec!["stiffness", "damping", "mass"]);
}

#[test]
fn apply_text_routes_to_the_right_param() {
    let controls = Controls::default();
    assert!(ParamField::Stiffness.apply_text(&controls, "0.5"));
    assert!(ParamField::Damping.apply_text(&controls, "0.7"));
    assert!(ParamField::Mass.apply_text(&controls, "3"));
    assert_eq!(
        controls.params(),
        SpringParams {
            stiffness: 0.5,
            damping: 0.7,
            mass: 3.0
        }
    );
}

#[test]
fn bad_text_keeps_previous_value() {
    let controls = Controls::default();
    let before = controls.params();
    assert!(!ParamField::Mass.apply_text(&controls, "0"));
    assert!(!ParamField::Mass.apply_text(&controls, ""));
    assert!(!ParamField::Stiffness.apply_text(&controls, "fast"));
    assert_eq!(controls.params(), before);
}

//! Protocol test suite

#[path = "../support/mod.rs"]
mod support;

mod command_tests;

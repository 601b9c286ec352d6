//! Shared test utilities for milktea integration tests

pub mod harness;

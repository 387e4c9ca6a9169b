//! Test modules for Lau Trie.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Model-based and property tests for the trie
//! - Script session runs
//! - Shared fixtures and proptest strategies

pub mod config_tests;

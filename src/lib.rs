//! Scam Honeypot — rule-based scam scoring and indicator extraction.

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;

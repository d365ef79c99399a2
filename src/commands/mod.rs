//! Command implementations for the underrated-mlb CLI

pub mod config;
pub mod show;

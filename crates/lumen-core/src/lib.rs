//! # lumen-core
//!
//! Core types, gram calculation, and error types for LumenDose.
//!
//! This crate provides the foundational types shared across all LumenDose crates:
//! - Drink entries and the unvalidated input they are built from
//! - The static six-region brain table with per-region sensitivity
//! - Per-region impact results produced by the analyzer
//! - Severity and drink-kind enums
//! - The volume × ABV → grams calculator
//! - Quick-add presets per market
//! - ID prefix constants and generation
//! - Cross-cutting error types

pub mod alcohol;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod presets;

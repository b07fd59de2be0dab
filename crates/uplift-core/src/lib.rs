//! # uplift-core
//!
//! Core types for Uplift, a CRO experiment tracker.
//!
//! This crate provides the foundational types shared across all Uplift crates:
//! - Entity structs for all domain objects (experiments, variants, projects, ...)
//! - Status enums with board/gating metadata
//! - ID prefix constants and formatting helpers

pub mod entities;
pub mod enums;
pub mod ids;

//! Typed partial-update structs and builders, one module per mutable entity.
//!
//! `Option<T>` means "leave unchanged unless present"; `Option<Option<T>>`
//! distinguishes "unchanged" from "set to NULL" for nullable columns.

pub mod experiment;
pub mod variant;

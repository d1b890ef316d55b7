//! Core business logic for the budget service.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Domain types, validation rules, and amount coercion live here.
//!
//! # Modules
//!
//! - `budget` - Income and expense records, input validation

pub mod budget;

//! Common library for the calculator service
//!
//! This crate provides shared infrastructure for the calculator service:
//! database connectivity for the record store and the database error
//! taxonomy.

pub mod database;
pub mod error;

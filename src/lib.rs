//! Business Trip Expense Engine
//!
//! This crate computes per-diem reimbursements for business trips and
//! maintains the small reference lists (project managers, destinations,
//! research project names, employee pay rates) used to populate a trip
//! request form.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod directory;
pub mod error;
pub mod models;
pub mod store;

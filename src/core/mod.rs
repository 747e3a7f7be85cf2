//! Core business logic - framework-agnostic operations over the store.
//!
//! Every function takes a `DatabaseConnection` and returns a [`crate::errors::Result`];
//! the HTTP layer in [`crate::api`] is a thin shell around these.

pub mod application;
pub mod benefit_plan;
pub mod business_owner;
pub mod dashboard;
pub mod eligibility;
pub mod employee;
pub mod fica;

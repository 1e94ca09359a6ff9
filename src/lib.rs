//! Renovation Advisor - Questionnaire-driven renovation analysis
//!
//! This crate turns questionnaire answers about a household into a weighted
//! preference profile, ranked spaces and processes, a reduced set of choices
//! with irreversibility warnings, detected risks and matched lifestyle
//! scenarios. The result is a structured bundle that a narrator and an
//! estimator consume.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

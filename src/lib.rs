//! Students' Tuition Grants Application System
//!
//! This crate records student grant applications, classifies them against
//! minimum GPA and tuition-shortfall thresholds, scores shortlisted
//! applications into grant award tiers, and summarizes the results through an
//! interactive console.

#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod reporting;
pub mod scoring;
pub mod store;
pub mod telemetry;
pub mod validation;

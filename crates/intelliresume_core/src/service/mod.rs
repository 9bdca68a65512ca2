//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model edits and persistence into use-case level APIs.
//! - Keep front ends decoupled from storage details.

pub mod resume_service;

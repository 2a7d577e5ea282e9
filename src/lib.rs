//! Legalgram Assistant - Conversational Sales Backend
//!
//! This crate implements the Legalgram chat assistant: a small stage machine
//! that greets visitors, captures their name, routes them to free human
//! advice or to AI-assisted document recommendations, and falls back to an
//! OpenAI-compatible completion API for open-ended questions.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

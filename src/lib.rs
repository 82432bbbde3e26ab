//! OnTime Interview - Scripted voice-interview dialog core.
//!
//! This crate implements a deterministic, turn-based interview flow:
//! fixed intake questions, ordered HR and technical question lists,
//! utterance screening, and end-of-session persistence of the collected
//! answers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

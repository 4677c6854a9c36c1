//! # ensk-core
//!
//! Core types for the ENSK content bot.
//!
//! This crate provides the foundational types shared across all ENSK crates:
//! - Entity structs for the content hierarchy (specialty → year → module →
//!   lesson → file) and quizzes
//! - The decoded menu token [`enums::Selection`] and file kinds
//! - The button-grid renderer
//! - The admin content-entry dialogue state machine
//! - Outgoing reply types and store query shapes

pub mod dialogue;
pub mod entities;
pub mod enums;
pub mod menu;
pub mod reply;
pub mod responses;

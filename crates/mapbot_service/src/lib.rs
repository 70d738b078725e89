//! # mapbot_service - Mindmap orchestration
//!
//! Coordinates one request end to end: validate the topic, build the
//! structuring prompt, call the AI provider once, decode the untrusted
//! response into a tree, render it with the requested generator and
//! hand back a [`mapbot_mindmap::MindmapDocument`].

pub mod error;
pub mod parse;
pub mod service;

pub use error::*;
pub use parse::*;
pub use service::*;

//! Pipeline stages for invoice extraction.
//!
//! Each submodule implements exactly one transformation step, independently
//! testable without the others.
//!
//! ## Data Flow
//!
//! ```text
//! encode ──▶ llm ──▶ postprocess
//! (base64)  (API)   (fences, JSON, fuse size)
//! ```
//!
//! 1. [`encode`]      — validate the `%PDF` magic and base64-encode the bytes
//! 2. [`llm`]         — one generateContent call; the only stage with network I/O
//! 3. [`postprocess`] — strip markdown fences, parse the JSON reply,
//!    normalise the fuse-size suffix

pub mod encode;
pub mod llm;
pub mod postprocess;

//! Job-application content generator.
//!
//! Given raw CV text and a raw job offer, this crate drives an LLM provider
//! to produce structured application content: a parsed candidate profile, a
//! parsed offer, a tailored CV, a French cover letter, and a compatibility
//! report. Transport (HTTP API) and rendering (HTML/PDF) live outside this
//! crate.
//!
//! Every model response flows through [`extract`], which recovers structured
//! JSON from the noisy text LLMs actually return — that module is the load-
//! bearing part of the crate.

pub mod config;
pub mod errors;
pub mod extract;
pub mod generation;
pub mod llm_client;
pub mod models;
pub mod parsing;
pub mod service;

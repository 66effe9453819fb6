//! Website structure acquisition.
//!
//! Turns a natural-language request into a validated [`WebsiteStructure`]
//! by asking a generative model, and falls back to a fixed structure when
//! anything goes wrong. Acquisition never fails from the caller's point of
//! view: failures are reported through [`Acquisition::Fallback`].
//!
//! # Architecture
//!
//! - [`ModelClient`] trait: one blocking text-in/text-out call
//! - [`GeminiClient`]: HTTP client for the Gemini `generateContent` API
//! - [`OfflineClient`]: always unavailable, for running without credentials
//! - `ScriptedClient`: queued responses for tests (behind `mock` feature flag)
//! - [`Acquirer`]: builds the instruction, parses the reply, enforces the
//!   requested design and substitutes [`fallback_structure`] on failure
//!
//! [`WebsiteStructure`]: pp_schema::WebsiteStructure

mod acquirer;
mod client;
mod error;
mod fallback;
mod instruction;
#[cfg(any(test, feature = "mock"))]
mod mock;

pub use acquirer::{Acquirer, Acquisition};
pub use client::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, ModelClient, ModelRequest, OfflineClient,
    SamplingParams,
};
pub use error::{AcquireError, ModelError};
pub use fallback::{FALLBACK_TITLE, fallback_structure};
pub use instruction::{COMPONENT_CATALOG, build_instruction, request_text, strip_code_fence};
#[cfg(any(test, feature = "mock"))]
pub use mock::ScriptedClient;

//! # lumen-coach
//!
//! Short, actionable coaching insights for a drinking session, generated by
//! the Gemini `generateContent` API.
//!
//! [`CoachPrompt`] turns the session (drinks, impact analysis, goal) into a
//! prompt; [`GeminiClient`] sends it; [`Coach`] ties the two together and
//! never fails, falling back to localized messages instead.

mod coach;
mod error;
mod gemini;
mod http;
mod prompt;

pub use coach::{Coach, Insight};
pub use error::CoachError;
pub use gemini::GeminiClient;
pub use prompt::{CoachPrompt, MIN_DRINKS};

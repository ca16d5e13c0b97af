//! Headless engine for the "AI Agent E-Commerce & Payment Systems"
//! interactive course.
//!
//! Everything the course page does — module navigation, the 3-hour
//! countdown, scripted simulation playback, the scoring demos, the chat
//! bot — lives here as deterministic state and timed, cancellable event
//! emission. Rendering, charts, and image export are external
//! collaborators fed by structured view models.
//!
//! RULES:
//!   - One [`engine::CourseEngine`] per session; commands in, events out.
//!   - No platform RNG: the few non-scripted terms draw from seeded
//!     streams in [`rng`].
//!   - No real timers: delayed output is queued in [`sequencer`] and
//!     drained as the engine's millisecond cursor advances.
//!   - Missing or unknown UI targets are silent no-ops, never errors.

pub mod animation;
pub mod certificate;
pub mod charts;
pub mod chatbot;
pub mod clock;
pub mod command;
pub mod engine;
pub mod error;
pub mod event;
pub mod fraud;
pub mod module;
pub mod pricing;
pub mod recommend;
pub mod rng;
pub mod scripted;
pub mod sequencer;
pub mod types;

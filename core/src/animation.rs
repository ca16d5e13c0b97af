//! Per-module reveal choreography.
//!
//! Purely cosmetic: the engine tells the view which element group to
//! reveal, with which effect, and how to stagger the items. The view owns
//! the actual transitions. No course state depends on any of this.

use crate::module::ModuleId;
use crate::types::Millis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RevealEffect {
    FadeIn,
    BounceIn,
    SlideInLeft,
    SlideInRight,
    Float,
    FillBars,
}

/// One reveal instruction: apply `effect` to the elements of `group`,
/// `stagger` apart, starting `start` after module entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealCue {
    pub group: String,
    pub effect: RevealEffect,
    pub start: Millis,
    pub stagger: Millis,
}

impl RevealCue {
    fn new(group: &str, effect: RevealEffect, start: Millis, stagger: Millis) -> Self {
        Self {
            group: group.to_string(),
            effect,
            start,
            stagger,
        }
    }
}

/// The reveal table for a module, in emission order.
pub fn cues_for(module: ModuleId) -> Vec<RevealCue> {
    use RevealEffect::*;
    match module {
        ModuleId::Fundamentals => vec![
            RevealCue::new("agent-brain", Float, 100, 0),
            RevealCue::new("connection-node", BounceIn, 0, 200),
            RevealCue::new("timeline-item", SlideInLeft, 0, 300),
        ],
        ModuleId::Commerce => vec![
            RevealCue::new("arch-layer", SlideInRight, 0, 200),
            RevealCue::new("feature-box", BounceIn, 0, 150),
        ],
        ModuleId::Payments => vec![
            RevealCue::new("flow-node", BounceIn, 0, 200),
            RevealCue::new("transaction-item", SlideInLeft, 0, 300),
            RevealCue::new("bar-fill", FillBars, 1000, 0),
        ],
        ModuleId::CaseStudies => vec![
            RevealCue::new("stat-item", BounceIn, 0, 200),
            RevealCue::new("system-item", SlideInLeft, 0, 150),
        ],
        ModuleId::Exercises => vec![RevealCue::new("step", SlideInLeft, 0, 200)],
        ModuleId::Future => vec![
            RevealCue::new("future-year", FadeIn, 0, 300),
            RevealCue::new("tech-card", BounceIn, 0, 200),
        ],
    }
}

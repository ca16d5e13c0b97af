//! All UI-issued commands.
//!
//! Raw surface values (slider positions, selector ids, typed text) arrive
//! here as-is; the engine normalizes them. Variants are appended over
//! time — never removed or reordered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum UiCommand {
    // ── Navigation ────────────────────────────────
    Start,
    GoToModule {
        id: String,
    },
    ShowCaseStudy {
        id: String,
    },
    ShowExercise {
        id: String,
    },
    Restart,

    // ── Scripted simulations ──────────────────────
    RunAgentSimulation,
    RunShoppingSimulation {
        scenario: String,
    },
    PokeEnvironment {
        element: String,
    },

    // ── Chat ──────────────────────────────────────
    ConfigureChat {
        store_type: String,
        personality: String,
    },
    Chat {
        text: String,
    },

    // ── Scoring demos (raw slider positions) ──────
    RunRecommendation {
        algorithm: String,
        price_weight: u8,
        rating_weight: u8,
        similarity_weight: u8,
    },
    RunFraudDetection {
        amount_threshold: u32,
        velocity_sensitivity: u8,
        location_risk: u8,
        device_trust: u8,
    },
    RunPriceOptimization {
        demand_sensitivity: u8,
        competition_weight: u8,
        min_margin: u8,
    },

    // ── Completion ────────────────────────────────
    RequestCertificate {
        completed_on: NaiveDate,
    },
}

impl UiCommand {
    /// Map a modifier+key chord to a command: digits 1–6 navigate, `r`
    /// restarts. Anything else maps to nothing.
    pub fn from_shortcut(key: char) -> Option<UiCommand> {
        let id = match key {
            '1' => "fundamentals",
            '2' => "commerce",
            '3' => "payments",
            '4' => "case-studies",
            '5' => "exercises",
            '6' => "future",
            'r' | 'R' => return Some(UiCommand::Restart),
            _ => return None,
        };
        Some(UiCommand::GoToModule { id: id.to_string() })
    }
}

//! The event stream — everything the engine tells the view.
//!
//! RULE: The engine never assembles markup. Each event carries a
//! structured view model; the render layer decides what any of it looks
//! like. Variants are appended over time — never removed or reordered.

use crate::animation::RevealCue;
use crate::certificate::Certificate;
use crate::charts::ChartSpec;
use crate::chatbot::ChatAuthor;
use crate::fraud::{FeedCounters, TransactionAssessment};
use crate::module::ModuleId;
use crate::pricing::{PriceCard, PricingSummary};
use crate::recommend::{AccuracyMetrics, RankedProduct};
use crate::sequencer::RunHandle;
use crate::types::Seconds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CourseEvent {
    // ── Course lifecycle ───────────────────────────
    CourseStarted,
    ModuleEntered {
        module: ModuleId,
        progress: f64,
        label: String,
    },
    CaseStudySelected {
        id: String,
    },
    ExerciseSelected {
        id: String,
    },
    TimerUpdated {
        remaining: Seconds,
        display: String,
    },
    CourseCompleted {
        elapsed_display: String,
    },
    CourseRestarted,
    CertificateReady {
        certificate: Certificate,
    },

    // ── Cosmetic choreography ──────────────────────
    Reveal {
        run: RunHandle,
        cue: RevealCue,
    },
    ChartReady {
        chart: ChartSpec,
    },

    // ── Scripted simulations ───────────────────────
    SimulationStarted {
        run: RunHandle,
        banner: String,
    },
    AgentMoved {
        run: RunHandle,
        target: String,
    },
    SimulationPrompt {
        run: RunHandle,
        text: String,
    },
    SimulationResult {
        run: RunHandle,
        text: String,
    },
    SimulationLine {
        run: RunHandle,
        number: u32,
        text: String,
    },
    SimulationCompleted {
        run: RunHandle,
        text: String,
    },
    EnvironmentNote {
        text: String,
    },

    // ── Scoring demos ──────────────────────────────
    TransactionAssessed {
        run: RunHandle,
        assessment: TransactionAssessment,
        counters: FeedCounters,
    },
    RecommendationsReady {
        items: Vec<RankedProduct>,
        metrics: AccuracyMetrics,
    },
    PricesOptimized {
        cards: Vec<PriceCard>,
        summary: PricingSummary,
    },

    // ── Chat ───────────────────────────────────────
    ChatMessage {
        author: ChatAuthor,
        text: String,
    },
}

impl CourseEvent {
    /// One-line JSON encoding, used by drivers and the IPC surface.
    pub fn to_json(&self) -> crate::error::CourseResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

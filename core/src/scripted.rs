//! Scripted simulation playback.
//!
//! The "AI" in every demo walkthrough is a fixed list of steps with fixed
//! delays — deterministic playback, not computation. Each script expands
//! into (offset, event) pairs the sequencer schedules under one run
//! handle, so an in-flight walkthrough dies cleanly when the user moves
//! on.

use crate::event::CourseEvent;
use crate::sequencer::RunHandle;
use crate::types::Millis;
use serde::{Deserialize, Serialize};

// ── Timing (matches the live page's cadence) ─────────────────────────────────

const AGENT_START_DELAY: Millis = 1000;
const AGENT_PROMPT_OFFSET: Millis = 500;
const AGENT_RESULT_OFFSET: Millis = 1500;
const AGENT_STEP_PERIOD: Millis = 3000;
const AGENT_COMPLETE_DELAY: Millis = 1000;

const SHOPPING_FIRST_LINE_DELAY: Millis = 500;
const SHOPPING_LINE_INTERVAL: Millis = 800;
const SHOPPING_RESULT_DELAY: Millis = 500;

// ── Data model ───────────────────────────────────────────────────────────────

/// One scripted step: what the agent claims to be doing, and the canned
/// outcome it reports `delay` later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationStep {
    pub prompt: String,
    pub result: String,
    pub delay: Millis,
}

/// A step of the agent walkthrough also names the scenery element the
/// agent avatar moves to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentStep {
    pub target: String,
    pub step: SimulationStep,
}

fn agent_steps() -> Vec<AgentStep> {
    let rows: [(&str, &str, &str); 3] = [
        (
            "customer",
            "Analyzing customer behavior patterns...",
            "Customer preference profile created",
        ),
        (
            "product",
            "Scanning product catalog and reviews...",
            "Best product match identified",
        ),
        (
            "inventory",
            "Checking inventory and logistics...",
            "Optimal delivery route calculated",
        ),
    ];
    rows.iter()
        .map(|&(target, prompt, result)| AgentStep {
            target: target.to_string(),
            step: SimulationStep {
                prompt: prompt.to_string(),
                result: result.to_string(),
                delay: AGENT_STEP_PERIOD,
            },
        })
        .collect()
}

/// Expand the agent walkthrough into its timed transcript.
pub fn agent_script(run: RunHandle) -> Vec<(Millis, CourseEvent)> {
    let mut script = vec![(
        0,
        CourseEvent::SimulationStarted {
            run,
            banner: "Starting AI Agent Simulation...".to_string(),
        },
    )];

    let steps = agent_steps();
    for (index, agent_step) in steps.iter().enumerate() {
        let at = AGENT_START_DELAY + index as Millis * AGENT_STEP_PERIOD;
        script.push((
            at,
            CourseEvent::AgentMoved {
                run,
                target: agent_step.target.clone(),
            },
        ));
        script.push((
            at + AGENT_PROMPT_OFFSET,
            CourseEvent::SimulationPrompt {
                run,
                text: agent_step.step.prompt.clone(),
            },
        ));
        script.push((
            at + AGENT_RESULT_OFFSET,
            CourseEvent::SimulationResult {
                run,
                text: format!("✓ {}", agent_step.step.result),
            },
        ));
    }

    let end = AGENT_START_DELAY + steps.len() as Millis * AGENT_STEP_PERIOD;
    script.push((
        end + AGENT_COMPLETE_DELAY,
        CourseEvent::SimulationCompleted {
            run,
            text: "Simulation Complete! AI Agent successfully completed autonomous commerce workflow."
                .to_string(),
        },
    ));
    script
}

// ── Shopping assistant scenarios ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingScenario {
    Electronics,
    Fashion,
    Groceries,
}

impl ShoppingScenario {
    /// Unknown scenario ids yield None; running an unknown scenario is a
    /// silent no-op.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "electronics" => Some(Self::Electronics),
            "fashion" => Some(Self::Fashion),
            "groceries" => Some(Self::Groceries),
            _ => None,
        }
    }

    fn lines(&self) -> &'static [&'static str] {
        match self {
            Self::Electronics => &[
                "Analyzing user requirements: Gaming laptop, budget $1500",
                "Searching 847 products across 23 retailers...",
                "Comparing specifications and reviews...",
                "Found: ASUS ROG Strix G15 - 4.8/5 stars, $1399",
                "Checking inventory: 3 units available",
                "Validating warranty and return policy...",
                "Recommendation ready: Save $101 vs competitors",
            ],
            Self::Fashion => &[
                "Analyzing style preferences from purchase history...",
                "Seasonal trend analysis: Fall 2024 fashion...",
                "Size and fit prediction based on previous orders...",
                "Scanning 1,200+ fashion retailers...",
                "Color matching with existing wardrobe...",
                "Sustainable brand preference detected...",
                "Price optimization across multiple stores...",
            ],
            Self::Groceries => &[
                "Analyzing household consumption patterns...",
                "Checking pantry inventory via smart sensors...",
                "Nutritional goal alignment: Mediterranean diet...",
                "Local store price comparison in progress...",
                "Organic preference and allergen filtering...",
                "Optimizing delivery routes and freshness...",
                "Meal planning integration complete...",
            ],
        }
    }

    fn result(&self) -> &'static str {
        match self {
            Self::Electronics => "✅ Perfect match found! ASUS ROG Strix G15 recommended.",
            Self::Fashion => "✅ 5 perfect outfits curated with 20% average savings!",
            Self::Groceries => "✅ Smart grocery list created! $67 saved vs manual shopping.",
        }
    }
}

/// Expand a shopping scenario into its timed transcript: header now, line
/// n at 500 + n·800, result 500 ms after the last line would advance.
pub fn shopping_script(run: RunHandle, scenario: ShoppingScenario) -> Vec<(Millis, CourseEvent)> {
    let mut script = vec![(
        0,
        CourseEvent::SimulationStarted {
            run,
            banner: "AI Shopping Agent Activated".to_string(),
        },
    )];

    let lines = scenario.lines();
    for (index, line) in lines.iter().enumerate() {
        script.push((
            SHOPPING_FIRST_LINE_DELAY + index as Millis * SHOPPING_LINE_INTERVAL,
            CourseEvent::SimulationLine {
                run,
                number: index as u32 + 1,
                text: (*line).to_string(),
            },
        ));
    }

    let end = SHOPPING_FIRST_LINE_DELAY + lines.len() as Millis * SHOPPING_LINE_INTERVAL;
    script.push((
        end + SHOPPING_RESULT_DELAY,
        CourseEvent::SimulationCompleted {
            run,
            text: scenario.result().to_string(),
        },
    ));
    script
}

// ── Environment pokes ────────────────────────────────────────────────────────

/// The canned line for clicking a scenery element. Unknown elements get
/// the generic acknowledgement.
pub fn environment_note(kind: &str) -> String {
    match kind {
        "customer" => {
            "Customer data analyzed: Shopping pattern, preferences, budget constraints identified."
        }
        "product" => "Product catalog scanned: Features, reviews, pricing, availability checked.",
        "inventory" => "Inventory status: Stock levels, delivery options, logistics optimized.",
        _ => "Environment interaction detected.",
    }
    .to_string()
}

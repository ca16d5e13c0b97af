//! Fraud-risk scoring demo.
//!
//! This demo:
//!   1. Scores the fixed sample batch with a weighted-sum heuristic
//!   2. Classifies each transaction Low / Medium / High at fixed thresholds
//!   3. Maps the class to an action (approve / review / block)
//!   4. Keeps running safe/suspicious/blocked counters for the feed panel
//!
//! The heuristic is scripted teaching material, not a fraud system: the
//! weights come straight from the demo sliders and nothing is learned.

use crate::event::CourseEvent;
use crate::sequencer::RunHandle;
use crate::types::Millis;
use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

pub const LOW_RISK_MAX: f64 = 20.0;
pub const MEDIUM_RISK_MAX: f64 = 50.0;

const AMOUNT_WEIGHT: f64 = 30.0;
const VELOCITY_WEIGHT: f64 = 25.0;
const LOCATION_WEIGHT: f64 = 20.0;
const DEVICE_WEIGHT: f64 = 25.0;

/// One feed entry lands every 800 ms, as on the live panel.
pub const FEED_INTERVAL: Millis = 800;

// ── Data model ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    Local,
    NearbyCity,
    DifferentCity,
    Foreign,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Known,
    New,
    Suspicious,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VelocityCategory {
    Normal,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    pub merchant: String,
    pub location: LocationCategory,
    pub device: DeviceStatus,
    pub velocity: VelocityCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn action(&self) -> &'static str {
        match self {
            Self::Low => "Approved",
            Self::Medium => "Review Required",
            Self::High => "Blocked",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionAssessment {
    pub transaction: Transaction,
    pub risk_score: f64,
    pub level: RiskLevel,
    pub action: String,
}

/// Running feed tallies, updated as each assessment lands.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedCounters {
    pub safe: u32,
    pub suspicious: u32,
    pub blocked: u32,
}

impl FeedCounters {
    fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.safe += 1,
            RiskLevel::Medium => self.suspicious += 1,
            RiskLevel::High => self.blocked += 1,
        }
    }
}

// ── Controls ─────────────────────────────────────────────────────────────────

/// Slider-derived detection tuning. Dollar threshold plus three 0–1
/// weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FraudControls {
    pub amount_threshold: f64,
    pub velocity_sensitivity: f64,
    pub location_risk: f64,
    pub device_trust: f64,
}

impl Default for FraudControls {
    fn default() -> Self {
        Self {
            amount_threshold: 500.0,
            velocity_sensitivity: 0.5,
            location_risk: 0.5,
            device_trust: 0.5,
        }
    }
}

impl FraudControls {
    /// Build from the raw slider positions (threshold in dollars, the rest
    /// 0–100 percentages).
    pub fn from_sliders(threshold: u32, velocity: u8, location: u8, device: u8) -> Self {
        Self {
            amount_threshold: threshold as f64,
            velocity_sensitivity: pct(velocity),
            location_risk: pct(location),
            device_trust: pct(device),
        }
    }
}

fn pct(value: u8) -> f64 {
    (value.min(100) as f64) / 100.0
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Weighted-sum risk score. Each factor contributes only when the
/// transaction deviates from its baseline (local / known / normal).
pub fn risk_score(txn: &Transaction, controls: &FraudControls) -> f64 {
    let mut score = 0.0;
    if txn.amount > controls.amount_threshold {
        score += AMOUNT_WEIGHT;
    }
    if txn.velocity != VelocityCategory::Normal {
        score += VELOCITY_WEIGHT * controls.velocity_sensitivity;
    }
    if txn.location != LocationCategory::Local {
        score += LOCATION_WEIGHT * controls.location_risk;
    }
    if txn.device != DeviceStatus::Known {
        score += DEVICE_WEIGHT * (1.0 - controls.device_trust);
    }
    score
}

pub fn classify(score: f64) -> RiskLevel {
    if score < LOW_RISK_MAX {
        RiskLevel::Low
    } else if score < MEDIUM_RISK_MAX {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn assess(txn: &Transaction, controls: &FraudControls) -> TransactionAssessment {
    let score = risk_score(txn, controls);
    let level = classify(score);
    TransactionAssessment {
        transaction: txn.clone(),
        risk_score: score,
        level,
        action: level.action().to_string(),
    }
}

// ── Sample batch ─────────────────────────────────────────────────────────────

/// The fixed six-transaction demo batch.
pub fn sample_transactions() -> Vec<Transaction> {
    use DeviceStatus::*;
    use LocationCategory::*;
    use VelocityCategory::*;

    let rows: [(f64, &str, LocationCategory, DeviceStatus, VelocityCategory); 6] = [
        (47.99, "Coffee Shop", Local, Known, Normal),
        (1299.99, "Electronics Store", DifferentCity, New, High),
        (23.50, "Gas Station", Local, Known, Normal),
        (2499.00, "Unknown Vendor", Foreign, Suspicious, VeryHigh),
        (89.99, "Online Store", Local, Known, Normal),
        (156.78, "Restaurant", NearbyCity, Known, Medium),
    ];

    rows.iter()
        .map(|&(amount, merchant, location, device, velocity)| Transaction {
            amount,
            merchant: merchant.to_string(),
            location,
            device,
            velocity,
        })
        .collect()
}

/// Expand the demo batch into the timed feed: one assessment every
/// `FEED_INTERVAL`, counters rolling forward.
pub fn feed_script(run: RunHandle, controls: &FraudControls) -> Vec<(Millis, CourseEvent)> {
    let mut counters = FeedCounters::default();
    sample_transactions()
        .iter()
        .enumerate()
        .map(|(index, txn)| {
            let assessment = assess(txn, controls);
            counters.record(assessment.level);
            (
                index as Millis * FEED_INTERVAL,
                CourseEvent::TransactionAssessed {
                    run,
                    assessment,
                    counters,
                },
            )
        })
        .collect()
}

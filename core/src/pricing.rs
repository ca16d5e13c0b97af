//! Price optimization demo.
//!
//! Adjusts a price factor for demand pressure, low stock, and competitor
//! position, then clamps the result to a minimum-margin floor. Volume and
//! revenue deltas come from a fixed elasticity formula. Everything here is
//! deterministic.

use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

/// Assumed cost basis: 40% gross margin on the current price.
const COST_RATIO: f64 = 0.6;
const HIGH_DEMAND_DISCOUNT: f64 = 0.08;
const LOW_STOCK_MARKUP: f64 = 0.10;
const LOW_STOCK_THRESHOLD: u32 = 20;
const COMPETITION_DAMPING: f64 = 0.5;

const PROFIT_AMPLIFIER: f64 = 1.4;
const SATISFACTION_RATIO: f64 = 0.3;
const SATISFACTION_CAP: f64 = 15.0;

// ── Data model ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingProduct {
    pub name: String,
    pub category_label: String,
    pub current_price: f64,
    pub competitor_price: f64,
    pub demand: DemandLevel,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceCard {
    pub product: PricingProduct,
    pub margin_floor: f64,
    pub optimized_price: f64,
    pub volume_change_pct: f64,
    pub revenue_change_pct: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingSummary {
    pub revenue_change_pct: f64,
    pub profit_change_pct: f64,
    pub turnover_change_pct: f64,
    pub satisfaction_change_pct: f64,
}

/// Slider-derived optimization tuning, each weight in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingControls {
    pub demand_sensitivity: f64,
    pub competition_weight: f64,
    pub min_margin: f64,
}

impl Default for PricingControls {
    fn default() -> Self {
        Self {
            demand_sensitivity: 0.5,
            competition_weight: 0.5,
            min_margin: 0.2,
        }
    }
}

impl PricingControls {
    pub fn from_sliders(demand: u8, competition: u8, min_margin: u8) -> Self {
        Self {
            demand_sensitivity: pct(demand),
            competition_weight: pct(competition),
            min_margin: pct(min_margin),
        }
    }
}

fn pct(value: u8) -> f64 {
    (value.min(100) as f64) / 100.0
}

// ── Sample products ──────────────────────────────────────────────────────────

pub fn sample_products() -> Vec<PricingProduct> {
    let rows: [(&str, &str, f64, f64, DemandLevel, u32); 3] = [
        (
            "Gaming Laptop Pro",
            "Electronics • High Demand",
            1299.0,
            1189.0,
            DemandLevel::High,
            45,
        ),
        (
            "Wireless Headphones",
            "Audio • Medium Demand",
            199.0,
            179.0,
            DemandLevel::Medium,
            128,
        ),
        (
            "Smart Watch Sport",
            "Wearables • Low Stock",
            299.0,
            319.0,
            DemandLevel::Low,
            12,
        ),
    ];
    rows.iter()
        .map(
            |&(name, label, current, competitor, demand, stock)| PricingProduct {
                name: name.to_string(),
                category_label: label.to_string(),
                current_price: current,
                competitor_price: competitor,
                demand,
                stock,
            },
        )
        .collect()
}

// ── Optimization ─────────────────────────────────────────────────────────────

/// The minimum price the optimizer may ever output for a product.
pub fn margin_floor(product: &PricingProduct, controls: &PricingControls) -> f64 {
    let cost = product.current_price * COST_RATIO;
    cost * (1.0 + controls.min_margin)
}

pub fn optimize_product(product: &PricingProduct, controls: &PricingControls) -> PriceCard {
    let mut factor = 1.0;

    // High demand earns a discount to win volume; scarce low-demand stock
    // gets marked up instead.
    if product.demand == DemandLevel::High {
        factor -= HIGH_DEMAND_DISCOUNT * controls.demand_sensitivity;
    } else if product.demand == DemandLevel::Low && product.stock < LOW_STOCK_THRESHOLD {
        factor += LOW_STOCK_MARKUP;
    }

    // Drift toward the competitor price, damped.
    let competition_diff =
        (product.current_price - product.competitor_price) / product.current_price;
    factor -= competition_diff * controls.competition_weight * COMPETITION_DAMPING;

    let floor = margin_floor(product, controls);
    let mut optimized = (product.current_price * factor).max(floor).round();
    // Rounding to the nearest dollar can land just under the floor; the
    // floor always wins.
    if optimized < floor {
        optimized = floor.ceil();
    }

    let price_diff = (optimized - product.current_price) / product.current_price;
    let volume_change = -price_diff * (controls.demand_sensitivity * 2.0 + 1.0);
    let revenue_change = (1.0 + price_diff) * (1.0 + volume_change) - 1.0;

    PriceCard {
        product: product.clone(),
        margin_floor: floor,
        optimized_price: optimized,
        volume_change_pct: volume_change * 100.0,
        revenue_change_pct: revenue_change * 100.0,
    }
}

/// Optimize the whole sample set and roll up the summary panel numbers.
pub fn optimize(controls: &PricingControls) -> (Vec<PriceCard>, PricingSummary) {
    let cards: Vec<PriceCard> = sample_products()
        .iter()
        .map(|p| optimize_product(p, controls))
        .collect();

    let n = cards.len() as f64;
    let avg_revenue = cards.iter().map(|c| c.revenue_change_pct).sum::<f64>() / n;
    let avg_volume = cards.iter().map(|c| c.volume_change_pct).sum::<f64>() / n;
    let turnover = avg_volume.abs();

    let summary = PricingSummary {
        revenue_change_pct: avg_revenue,
        profit_change_pct: avg_revenue * PROFIT_AMPLIFIER,
        turnover_change_pct: turnover,
        satisfaction_change_pct: (turnover * SATISFACTION_RATIO).min(SATISFACTION_CAP),
    };

    (cards, summary)
}

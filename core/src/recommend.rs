//! Recommendation ranking demo.
//!
//! Weighted sum over the fixed five-product catalog. Price and rating are
//! normalized to [0, 1]; similarity is the one non-scripted term and draws
//! from the recommendation RNG stream so runs stay reproducible.

use crate::rng::DemoRng;
use serde::{Deserialize, Serialize};

// ── Constants ────────────────────────────────────────────────────────────────

const PRICE_NORMALIZER: f64 = 1000.0;
const RATING_MAX: f64 = 5.0;
const SIMILARITY_BASE: f64 = 0.7;
const SIMILARITY_SPREAD: f64 = 0.3;
const TOP_N: usize = 3;

const PRECISION_BASE: f64 = 85.0;
const RECALL_BASE: f64 = 80.0;
const METRIC_JITTER: f64 = 15.0;

// ── Data model ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogProduct {
    pub name: String,
    pub icon: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedProduct {
    pub product: CatalogProduct,
    pub score: f64,
    pub match_pct: u32,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AccuracyMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Collaborative,
    ContentBased,
    Hybrid,
}

impl Algorithm {
    /// Unknown selector values fall back to collaborative filtering.
    pub fn parse(id: &str) -> Self {
        match id {
            "content-based" => Self::ContentBased,
            "hybrid" => Self::Hybrid,
            _ => Self::Collaborative,
        }
    }
}

/// Slider-derived scoring weights, each in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecommendationWeights {
    pub price: f64,
    pub rating: f64,
    pub similarity: f64,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            price: 0.5,
            rating: 0.5,
            similarity: 0.5,
        }
    }
}

impl RecommendationWeights {
    pub fn from_sliders(price: u8, rating: u8, similarity: u8) -> Self {
        Self {
            price: pct(price),
            rating: pct(rating),
            similarity: pct(similarity),
        }
    }
}

fn pct(value: u8) -> f64 {
    (value.min(100) as f64) / 100.0
}

// ── Catalog ──────────────────────────────────────────────────────────────────

pub fn catalog() -> Vec<CatalogProduct> {
    let rows: [(&str, &str, &str, f64, f64); 5] = [
        ("Gaming Smartphone Pro", "📱", "Mobile", 899.0, 4.8),
        ("Wireless Gaming Headset", "🎧", "Audio", 249.0, 4.6),
        ("Mobile Game Controller", "🕹", "Gaming", 89.0, 4.3),
        ("Power Bank Ultra", "🔋", "Accessories", 69.0, 4.5),
        ("Gaming Chair Pro", "💺", "Furniture", 399.0, 4.7),
    ];
    rows.iter()
        .map(|&(name, icon, category, price, rating)| CatalogProduct {
            name: name.to_string(),
            icon: icon.to_string(),
            category: category.to_string(),
            price,
            rating,
        })
        .collect()
}

// ── Ranking ──────────────────────────────────────────────────────────────────

/// Cheapness term: 1 at free, 0 at PRICE_NORMALIZER and beyond.
fn price_score(price: f64) -> f64 {
    (1.0 - price / PRICE_NORMALIZER).max(0.0)
}

/// Rank the catalog and keep the top three. The sort is stable, so equal
/// scores keep catalog order.
pub fn rank(
    weights: &RecommendationWeights,
    algorithm: Algorithm,
    rng: &mut DemoRng,
) -> Vec<RankedProduct> {
    let mut scored: Vec<(CatalogProduct, f64)> = catalog()
        .into_iter()
        .map(|product| {
            let similarity = SIMILARITY_BASE + SIMILARITY_SPREAD * rng.next_f64();
            let score = (price_score(product.price) * weights.price
                + (product.rating / RATING_MAX) * weights.rating
                + similarity * weights.similarity)
                / 3.0;
            (product, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(TOP_N)
        .enumerate()
        .map(|(rank, (product, score))| RankedProduct {
            product,
            score,
            match_pct: (score * 100.0).floor() as u32,
            reason: reason_for(rank, algorithm),
        })
        .collect()
}

fn reason_for(rank: usize, algorithm: Algorithm) -> String {
    let reasons = [
        match algorithm {
            Algorithm::Collaborative => "Matches similar user preferences",
            _ => "Matches your interests",
        },
        "High user rating and reviews",
        "Price within preferred range",
        "Complementary to previous purchases",
    ];
    reasons[rank % reasons.len()].to_string()
}

/// The accuracy panel: jittered precision/recall, exact F1 from them.
pub fn accuracy_metrics(rng: &mut DemoRng) -> AccuracyMetrics {
    let precision = PRECISION_BASE + METRIC_JITTER * rng.next_f64();
    let recall = RECALL_BASE + METRIC_JITTER * rng.next_f64();
    let f1 = (2.0 * precision * recall) / (precision + recall);
    AccuracyMetrics {
        precision,
        recall,
        f1,
    }
}

//! Scripted shopping-assistant chat.
//!
//! There is no model behind this: replies come from a fixed keyword table
//! evaluated in order, with a small generic pool (picked by the chat RNG
//! stream) when nothing matches. Unknown store types and personalities
//! fall back to defaults rather than erroring.

use crate::rng::DemoRng;
use crate::types::Millis;
use serde::{Deserialize, Serialize};

/// The bot "thinks" for a second before answering.
pub const REPLY_DELAY: Millis = 1000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreType {
    Electronics,
    Fashion,
    Books,
    Home,
}

impl StoreType {
    pub fn parse(id: &str) -> Self {
        match id {
            "fashion" => Self::Fashion,
            "books" => Self::Books,
            "home" => Self::Home,
            _ => Self::Electronics,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Helpful,
    Friendly,
    Expert,
}

impl Personality {
    pub fn parse(id: &str) -> Self {
        match id {
            "friendly" => Self::Friendly,
            "expert" => Self::Expert,
            _ => Self::Helpful,
        }
    }
}

/// The opening line shown when the bot is (re)configured.
pub fn welcome(store: StoreType, personality: Personality) -> String {
    let prefix = match personality {
        Personality::Helpful => "I'm here to provide detailed, professional assistance.",
        Personality::Friendly => "Hey there! I'm excited to help you find exactly what you need!",
        Personality::Expert => {
            "As your technical specialist, I can provide in-depth product analysis and recommendations."
        }
    };
    let body = match store {
        StoreType::Electronics => {
            "Hi! I'm your electronics specialist. Looking for the latest tech gadgets or need help choosing between products?"
        }
        StoreType::Fashion => {
            "Welcome to your personal style assistant! Ready to find the perfect outfit or update your wardrobe?"
        }
        StoreType::Books => {
            "Greetings, fellow book lover! I can help you discover your next great read based on your preferences."
        }
        StoreType::Home => {
            "Hello! I'm here to help you create the perfect living space. What room are you looking to enhance?"
        }
    };
    format!("{prefix} {body}")
}

// Keyword rules, checked in order against the lowercased message.
const RULES: &[(&[&str], &str)] = &[
    (
        &["laptop", "gaming"],
        "For gaming laptops, I recommend the ASUS ROG series or MSI Gaming line. What's your budget range? Are you looking for 4K gaming or high refresh rates?",
    ),
    (
        &["phone", "iphone", "samsung"],
        "Great choice! The iPhone 15 Pro offers excellent cameras and performance, while Samsung Galaxy S24 has superior customization. What features matter most to you?",
    ),
    (
        &["gift", "under"],
        "Perfect! I can suggest some amazing gifts under $100: wireless earbuds, smart home devices, or tech accessories. Who is the gift for?",
    ),
    (
        &["price", "cheap", "budget"],
        "I always find the best deals! I can compare prices across multiple retailers and find coupon codes. What product are you interested in?",
    ),
    (
        &["delivery", "shipping"],
        "I can check real-time delivery options! Most items offer same-day or next-day delivery in major cities. Where are you located?",
    ),
    (
        &["compare", "vs"],
        "I excel at product comparisons! I analyze specs, reviews, prices, and user satisfaction. Which products would you like me to compare?",
    ),
    (
        &["review", "rating"],
        "I analyze thousands of reviews using sentiment analysis and can identify common pros/cons. Which product reviews interest you?",
    ),
];

const FALLBACKS: &[&str] = &[
    "That's interesting! Can you tell me more about what you're looking for? I have access to millions of products.",
    "I'd love to help with that! Let me search through our extensive catalog to find the perfect match.",
    "Great question! I can analyze multiple factors like price, quality, reviews, and availability to give you the best recommendations.",
    "I'm designed to understand complex requests! Feel free to be specific about your needs, budget, or preferences.",
];

/// Produce the bot reply for a user message. Empty (after trimming)
/// messages get no reply at all.
pub fn reply(message: &str, rng: &mut DemoRng) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    for (keywords, response) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Some((*response).to_string());
        }
    }
    Some((*rng.pick(FALLBACKS)).to_string())
}

//! The six fixed course modules and progress math.

use serde::{Deserialize, Serialize};

/// The fixed module order. Progress is position in this sequence.
pub const MODULE_ORDER: [ModuleId; 6] = [
    ModuleId::Fundamentals,
    ModuleId::Commerce,
    ModuleId::Payments,
    ModuleId::CaseStudies,
    ModuleId::Exercises,
    ModuleId::Future,
];

pub const MODULE_COUNT: usize = MODULE_ORDER.len();

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    Fundamentals,
    Commerce,
    Payments,
    CaseStudies,
    Exercises,
    Future,
}

impl ModuleId {
    /// Parse a navigation id. Unknown ids yield None — navigation to an
    /// unknown module is a silent no-op, never an error.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "fundamentals" => Some(Self::Fundamentals),
            "commerce" => Some(Self::Commerce),
            "payments" => Some(Self::Payments),
            "case-studies" => Some(Self::CaseStudies),
            "exercises" => Some(Self::Exercises),
            "future" => Some(Self::Future),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Fundamentals => "fundamentals",
            Self::Commerce => "commerce",
            Self::Payments => "payments",
            Self::CaseStudies => "case-studies",
            Self::Exercises => "exercises",
            Self::Future => "future",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Fundamentals => "AI Agent Fundamentals",
            Self::Commerce => "AI in E-Commerce",
            Self::Payments => "AI Payment Systems",
            Self::CaseStudies => "Industry Case Studies",
            Self::Exercises => "Hands-On Exercises",
            Self::Future => "The Road Ahead",
        }
    }

    /// Zero-based position in the fixed order.
    pub fn index(&self) -> usize {
        match self {
            Self::Fundamentals => 0,
            Self::Commerce => 1,
            Self::Payments => 2,
            Self::CaseStudies => 3,
            Self::Exercises => 4,
            Self::Future => 5,
        }
    }

    /// Course progress after entering this module, as a fraction of 1.
    pub fn progress(&self) -> f64 {
        (self.index() + 1) as f64 / MODULE_COUNT as f64
    }

    /// The "Module N of 6" header label.
    pub fn progress_label(&self) -> String {
        format!("Module {} of {}", self.index() + 1, MODULE_COUNT)
    }
}

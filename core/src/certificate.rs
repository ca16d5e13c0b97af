//! Completion certificate record.
//!
//! The canvas drawing and download live in the view; the engine only
//! supplies the text. The date comes from the caller so the engine stays
//! deterministic.

use crate::clock::hms;
use crate::types::Seconds;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Certificate {
    pub title: String,
    pub course: String,
    pub subtitle: String,
    pub elapsed_display: String,
    pub completed_on: NaiveDate,
}

pub fn issue(elapsed: Seconds, completed_on: NaiveDate) -> Certificate {
    Certificate {
        title: "Certificate of Completion".to_string(),
        course: "AI Agent E-Commerce & Payment Systems".to_string(),
        subtitle: "Successfully completed 3-hour comprehensive course".to_string(),
        elapsed_display: hms(elapsed),
        completed_on,
    }
}

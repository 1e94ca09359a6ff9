//! The six-part narration returned to the customer.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SUMMARY: &str = "We have analysed your renovation preferences.";
pub const DEFAULT_CONCLUSION: &str = "Book a consultation for a detailed estimate and plan.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationSections {
    pub summary: String,
    pub trait_interpretation: String,
    pub process_rationale: String,
    pub risk_explanation: String,
    pub lifestyle_story: String,
    pub conclusion: String,
}

impl NarrationSections {
    /// Splits free text on blank lines into the six sections in order.
    ///
    /// Missing sections stay empty, except summary and conclusion which get
    /// a stock sentence. Returns `None` for blank text.
    pub fn from_paragraphs(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }
        let mut parts = text
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        let mut next = || parts.next().unwrap_or_default();

        let mut sections = Self {
            summary: next(),
            trait_interpretation: next(),
            process_rationale: next(),
            risk_explanation: next(),
            lifestyle_story: next(),
            conclusion: next(),
        };
        if sections.summary.is_empty() {
            sections.summary = DEFAULT_SUMMARY.to_string();
        }
        if sections.conclusion.is_empty() {
            sections.conclusion = DEFAULT_CONCLUSION.to_string();
        }
        Some(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_six_paragraphs() {
        let text = "a\n\nb\n\nc\n\nd\n\ne\n\nf";
        let s = NarrationSections::from_paragraphs(text).unwrap();
        assert_eq!(s.summary, "a");
        assert_eq!(s.risk_explanation, "d");
        assert_eq!(s.conclusion, "f");
    }

    #[test]
    fn short_text_gets_stock_conclusion() {
        let s = NarrationSections::from_paragraphs("only a summary").unwrap();
        assert_eq!(s.summary, "only a summary");
        assert!(s.process_rationale.is_empty());
        assert_eq!(s.conclusion, DEFAULT_CONCLUSION);
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(NarrationSections::from_paragraphs("  \n\n ").is_none());
    }
}

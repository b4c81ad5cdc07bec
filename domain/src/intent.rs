//! Keyword-driven intent matching for the scripted assistant.
//!
//! The table is consulted top to bottom and the first category with a keyword
//! contained in the (lowercased) input wins. Anything unmatched gets the
//! fallback response.

use crate::error::IntentError;
use shared::text::fold_case;

pub const HEALTH_SUMMARY_RESPONSE: &str = "Based on your health records, you were diagnosed with hypertension in December 2023. You are currently on 2 medications. Your last check-up was on April 10, 2024.";
pub const DOCTOR_RESPONSE: &str = "Based on your symptoms, I recommend consulting a cardiologist. Would you like me to find cardiologists near you?";
pub const MEDICATION_RESPONSE: &str = "You have 2 active medications: Lisinopril (10mg, once daily) and Atorvastatin (20mg, once daily). Your next Lisinopril dose is due today at 8:00 PM.";
pub const APPOINTMENT_RESPONSE: &str = "I can help you schedule an appointment. What type of doctor would you like to see, and when are you available?";
pub const FALLBACK_RESPONSE: &str = "I understand you need assistance. Could you provide more details about what you're looking for? I can help with health records, finding doctors, medication reminders, or scheduling appointments.";

/// Built-in categories, highest priority first. Keywords are already lowercase.
const BUILTIN_ROWS: [(&str, &[&str], &str); 4] = [
    (
        "health_summary",
        &["health record", "health summary"],
        HEALTH_SUMMARY_RESPONSE,
    ),
    ("doctor", &["doctor", "specialist"], DOCTOR_RESPONSE),
    ("medication", &["medication", "medicine"], MEDICATION_RESPONSE),
    ("appointment", &["appointment"], APPOINTMENT_RESPONSE),
];

/// Anything that can turn user text into an assistant reply.
pub trait ReplyGenerator: Send + Sync {
    fn reply(&self, input: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentCategory {
    label: String,
    keywords: Vec<String>,
    response: String,
}

impl IntentCategory {
    pub fn new<I, S>(
        label: impl Into<String>,
        keywords: I,
        response: impl Into<String>,
    ) -> Result<Self, IntentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let label = label.into();
        let mut folded: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = fold_case(keyword.as_ref().trim());
            if keyword.is_empty() {
                return Err(IntentError::BlankKeyword { label });
            }
            if !folded.contains(&keyword) {
                folded.push(keyword);
            }
        }
        if folded.is_empty() {
            return Err(IntentError::NoKeywords(label));
        }
        Ok(Self {
            label,
            keywords: folded,
            response: response.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// `folded_input` must already be lowercased.
    fn matches(&self, folded_input: &str) -> bool {
        self.keywords.iter().any(|k| folded_input.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentTable {
    categories: Vec<IntentCategory>,
    fallback: String,
}

impl IntentTable {
    pub fn new(
        categories: Vec<IntentCategory>,
        fallback: impl Into<String>,
    ) -> Result<Self, IntentError> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(IntentError::EmptyFallback);
        }
        Ok(Self {
            categories,
            fallback,
        })
    }

    /// The health portal's scripted replies, highest priority first.
    pub fn builtin() -> Self {
        let categories = BUILTIN_ROWS
            .iter()
            .map(|(label, keywords, response)| IntentCategory {
                label: label.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
                response: response.to_string(),
            })
            .collect();
        Self {
            categories,
            fallback: FALLBACK_RESPONSE.to_string(),
        }
    }

    pub fn categories(&self) -> &[IntentCategory] {
        &self.categories
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn match_category(&self, input: &str) -> Option<&IntentCategory> {
        let folded = fold_case(input);
        self.categories.iter().find(|c| c.matches(&folded))
    }

    pub fn classify(&self, input: &str) -> &str {
        self.match_category(input)
            .map(IntentCategory::response)
            .unwrap_or(&self.fallback)
    }
}

impl Default for IntentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReplyGenerator for IntentTable {
    fn reply(&self, input: &str) -> String {
        self.classify(input).to_string()
    }
}

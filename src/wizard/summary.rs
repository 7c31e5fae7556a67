//! Summary document assembly.
//!
//! `assemble` is total: every optional field has a fixed fallback, so it
//! produces a document no matter which steps were skipped.

use super::model::Satisfaction;
use super::state::WizardState;

/// Placeholder for answer fields that do not apply to the request type.
pub const NOT_APPLICABLE: &str = "N/A";

/// Closing line of every summary document.
pub const PROVENANCE_NOTE: &str =
    "*This document is shared with the NSA representative and the SPM for record and further action.*";

/// Build the summary document from the current state.
pub fn assemble(state: &WizardState) -> String {
    // Step 2 fields are hidden until Step 1 is complete.
    let step_two_visible = state.basic_info_complete();

    let escalation = state
        .escalation_level
        .map(|l| l.to_string())
        .unwrap_or_default();
    let (title, request_type) = if step_two_visible {
        (
            state.request_title.trim().to_string(),
            state.request_type.map(|t| t.to_string()).unwrap_or_default(),
        )
    } else {
        (String::new(), String::new())
    };

    let details = state.collected_details();

    let (answer, satisfaction) = if step_two_visible && state.is_information_request() {
        // Satisfaction only means something next to the answer it rates.
        match state.suggested_answer.as_deref() {
            Some(answer) if state.answer_is_current() => {
                let satisfaction = match state.satisfied {
                    Satisfaction::Unset => NOT_APPLICABLE.to_string(),
                    other => other.to_string(),
                };
                (answer.to_string(), satisfaction)
            }
            _ => (String::new(), NOT_APPLICABLE.to_string()),
        }
    } else {
        (NOT_APPLICABLE.to_string(), NOT_APPLICABLE.to_string())
    };

    let judgement = state.judgement.as_deref().unwrap_or_default();

    let parts = [
        "**SPM Consultant Tool Summary Document**".to_string(),
        String::new(),
        format!("- **Sport/NSA**: {}", state.sport.trim()),
        format!("- **SPM Contact**: {}", state.spm_contact.trim()),
        format!("- **Escalation Level**: {}", escalation),
        String::new(),
        "### Query/Request Details".to_string(),
        format!("- **Title**: {}", title),
        format!("- **Type**: {}", request_type),
        format!("- **Purpose**: {}", details.purpose()),
        format!("- **Expected Outcomes**: {}", details.expected_outcomes()),
        format!("- **Resources Needed**: {}", details.resources_needed()),
        format!("- **Timeframe**: {}", details.timeframe()),
        String::new(),
        "### Suggested Answer".to_string(),
        format!("- **Answer**: {}", answer),
        format!("- **Satisfaction**: {}", satisfaction),
        String::new(),
        "### Preliminary Judgement".to_string(),
        judgement.to_string(),
        String::new(),
        PROVENANCE_NOTE.to_string(),
    ];

    parts.join("\n")
}

//! Completion prompts for the request wizard.

use super::state::WizardState;

/// Prompt for the Step 3 suggested answer.
pub fn suggested_answer_prompt(query: &str) -> String {
    format!("As an SPM Consultant, answer this: {query}")
}

/// Prompt for the Step 5 preliminary judgement.
///
/// Details the form never asked for are interpolated as empty strings.
pub fn judgement_prompt(state: &WizardState) -> String {
    let details = state.collected_details();
    let escalation = state
        .escalation_level
        .map(|l| l.to_string())
        .unwrap_or_default();
    let request_type = state
        .request_type
        .map(|t| t.to_string())
        .unwrap_or_default();

    format!(
        "Based on the following details, provide a preliminary judgement on approval likelihood:\n\
         - Sport: {sport}\n\
         - SPM Contact: {contact}\n\
         - Escalation Level: {escalation}\n\
         - Request Type: {request_type}\n\
         - Purpose: {purpose}\n\
         - Expected Outcomes: {outcomes}\n\
         - Resources Needed: {resources}\n\
         - Timeframe: {timeframe}",
        sport = state.sport.trim(),
        contact = state.spm_contact.trim(),
        purpose = details.purpose(),
        outcomes = details.expected_outcomes(),
        resources = details.resources_needed(),
        timeframe = details.timeframe(),
    )
}

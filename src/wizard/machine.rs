//! The request wizard transition function.
//!
//! The form sends the current state plus at most one user action on every
//! interaction. `render` applies the action, re-evaluates every guard from
//! the field values, makes whichever completion calls are due and returns
//! the new state together with a view describing what to show. No error
//! escapes `render`: failed completion calls are reported in the outcome and
//! leave the affected field unset so the same action can be retried.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ServiceErrorKind, WizardError};
use crate::llm::LlmProvider;

use super::model::{EscalationLevel, RequestType, Satisfaction, WizardField, WizardStep};
use super::prompts::{judgement_prompt, suggested_answer_prompt};
use super::state::{WizardStage, WizardState};
use super::summary::assemble;

const NOTICE_BASIC_INFO: &str = "Fill in the sport, SPM contact and escalation level to continue.";
const NOTICE_ANSWER_ACCEPTED: &str =
    "Thank you! This answer will be recorded in the summary document.";
const NOTICE_ANSWER_REJECTED: &str = "Let's gather further details.";
const NOTICE_JUDGEMENT_BLOCKED: &str =
    "Complete the basic information and choose a request type before generating a judgement.";
const NOTICE_SUMMARY_READY: &str = "Summary document generated and shared with NSA and SPM.";

/// A single widget edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldEdit {
    Sport(String),
    SpmContact(String),
    EscalationLevel(Option<EscalationLevel>),
    RequestTitle(String),
    RequestType(Option<RequestType>),
    InfoQuery(String),
    Satisfied(Satisfaction),
    Purpose(String),
    ExpectedOutcomes(String),
    ResourcesNeeded(String),
    Timeframe(String),
}

/// What the user did in this interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    Edit { edit: FieldEdit },
    GenerateJudgement,
    GenerateSummary,
    Reset,
}

/// What the form should display after an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    pub stage: WizardStage,
    pub unlocked_steps: Vec<WizardStep>,
    pub requested_fields: Vec<WizardField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judgement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_document: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

/// A completion failure as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorNotice {
    pub kind: ServiceErrorKind,
    pub message: String,
}

/// Result of one `render` pass.
#[derive(Debug)]
pub struct RenderOutcome {
    pub state: WizardState,
    pub view: WizardView,
    pub errors: Vec<WizardError>,
}

impl RenderOutcome {
    pub fn error_notices(&self) -> Vec<ErrorNotice> {
        self.errors
            .iter()
            .map(|e| ErrorNotice {
                kind: e.kind(),
                message: e.to_string(),
            })
            .collect()
    }
}

fn optional_text(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Apply a widget edit. Returns whether any value changed.
fn apply_edit(state: &mut WizardState, edit: FieldEdit) -> bool {
    fn set<T: PartialEq>(slot: &mut T, value: T) -> bool {
        if *slot == value {
            false
        } else {
            *slot = value;
            true
        }
    }

    match edit {
        FieldEdit::Sport(v) => set(&mut state.sport, v),
        FieldEdit::SpmContact(v) => set(&mut state.spm_contact, v),
        FieldEdit::EscalationLevel(v) => set(&mut state.escalation_level, v),
        FieldEdit::RequestTitle(v) => set(&mut state.request_title, v),
        FieldEdit::RequestType(v) => set(&mut state.request_type, v),
        FieldEdit::InfoQuery(v) => set(&mut state.info_query, optional_text(v)),
        // The choice is only on screen next to a current answer.
        FieldEdit::Satisfied(v) if state.awaiting_satisfaction() => set(&mut state.satisfied, v),
        FieldEdit::Satisfied(_) => false,
        FieldEdit::Purpose(v) => set(&mut state.details.purpose, optional_text(v)),
        FieldEdit::ExpectedOutcomes(v) => {
            set(&mut state.details.expected_outcomes, optional_text(v))
        }
        FieldEdit::ResourcesNeeded(v) => {
            set(&mut state.details.resources_needed, optional_text(v))
        }
        FieldEdit::Timeframe(v) => set(&mut state.details.timeframe, optional_text(v)),
    }
}

/// Fetch the suggested answer if the current query has none yet.
async fn refresh_suggested_answer(
    state: &mut WizardState,
    llm: &dyn LlmProvider,
) -> Result<(), WizardError> {
    if !state.needs_suggested_answer() {
        return Ok(());
    }
    let Some(query) = state.pending_query().map(str::to_string) else {
        return Ok(());
    };

    info!(model = llm.model_name(), "Requesting suggested answer");
    let answer = llm
        .complete_prompt(&suggested_answer_prompt(&query))
        .await
        .map_err(WizardError::SuggestedAnswer)?;

    state.suggested_answer = Some(answer);
    state.answered_query = Some(query);
    state.satisfied = Satisfaction::Unset;
    Ok(())
}

async fn generate_judgement(
    state: &mut WizardState,
    llm: &dyn LlmProvider,
) -> Result<(), WizardError> {
    info!(model = llm.model_name(), "Requesting preliminary judgement");
    let judgement = llm
        .complete_prompt(&judgement_prompt(state))
        .await
        .map_err(WizardError::Judgement)?;
    state.judgement = Some(judgement);
    Ok(())
}

/// Build the view for a state that has already been fully evaluated.
pub fn view_of(state: &WizardState) -> WizardView {
    let mut unlocked_steps = vec![WizardStep::BasicInfo];
    let mut requested_fields = vec![
        WizardField::Sport,
        WizardField::SpmContact,
        WizardField::EscalationLevel,
    ];
    let mut notices = Vec::new();

    if state.basic_info_complete() {
        unlocked_steps.push(WizardStep::DefineRequest);
        requested_fields.extend([WizardField::RequestTitle, WizardField::RequestType]);

        if state.request_defined() && state.is_information_request() {
            requested_fields.push(WizardField::InfoQuery);
        }

        if state.awaiting_satisfaction() {
            unlocked_steps.push(WizardStep::SuggestedAnswer);
            requested_fields.push(WizardField::Satisfied);
            match state.satisfied {
                Satisfaction::Yes => notices.push(NOTICE_ANSWER_ACCEPTED.to_string()),
                Satisfaction::No => notices.push(NOTICE_ANSWER_REJECTED.to_string()),
                Satisfaction::Unset => {}
            }
        }

        if state.details_requested() {
            unlocked_steps.push(WizardStep::AdditionalDetails);
            requested_fields.extend([
                WizardField::Purpose,
                WizardField::ExpectedOutcomes,
                WizardField::ResourcesNeeded,
                WizardField::Timeframe,
            ]);
        }

        unlocked_steps.extend([WizardStep::PreliminaryJudgement, WizardStep::SummaryDocument]);
    } else {
        notices.push(NOTICE_BASIC_INFO.to_string());
    }

    let suggested_answer = if state.answer_is_current() {
        state.suggested_answer.clone()
    } else {
        None
    };

    WizardView {
        stage: state.stage(),
        unlocked_steps,
        requested_fields,
        suggested_answer,
        judgement: state.judgement.clone(),
        summary_document: state.summary_document.clone(),
        notices,
    }
}

/// Re-evaluate the wizard for one interaction.
pub async fn render(
    mut state: WizardState,
    action: Option<WizardAction>,
    llm: &dyn LlmProvider,
) -> RenderOutcome {
    let mut errors = Vec::new();
    let mut extra_notices = Vec::new();

    let requested = match action {
        Some(WizardAction::Edit { edit }) => {
            if apply_edit(&mut state, edit) {
                // Any edit makes an assembled document stale.
                state.summary_document = None;
            }
            None
        }
        Some(WizardAction::Reset) => {
            info!("Wizard reset");
            state = WizardState::default();
            None
        }
        other => other,
    };

    state.discard_stale_answer();

    if let Err(e) = refresh_suggested_answer(&mut state, llm).await {
        warn!(error = %e, "Suggested answer unavailable");
        errors.push(e);
    }

    match requested {
        Some(WizardAction::GenerateJudgement) => {
            if state.can_generate_judgement() {
                match generate_judgement(&mut state, llm).await {
                    Ok(()) => state.summary_document = None,
                    Err(e) => {
                        warn!(error = %e, "Judgement generation failed");
                        errors.push(e);
                    }
                }
            } else {
                extra_notices.push(NOTICE_JUDGEMENT_BLOCKED.to_string());
            }
        }
        Some(WizardAction::GenerateSummary) => {
            state.summary_document = Some(assemble(&state));
            extra_notices.push(NOTICE_SUMMARY_READY.to_string());
        }
        _ => {}
    }

    let mut view = view_of(&state);
    view.notices.extend(extra_notices);
    info!(stage = %view.stage, errors = errors.len(), "Wizard rendered");

    RenderOutcome {
        state,
        view,
        errors,
    }
}

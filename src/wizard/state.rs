//! Wizard state and the guards that decide how far the form is unlocked.

use serde::{Deserialize, Serialize};

use super::model::{AdditionalDetails, EscalationLevel, RequestType, Satisfaction};

/// How far the wizard has progressed, named by the furthest unlocked step.
///
/// Never stored: always derived from the current field values by
/// [`WizardState::stage`], so clearing a field moves the stage back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Start,
    BasicInfoComplete,
    RequestDefined,
    AnsweringInfoRequest,
    CollectingAdditionalDetails,
    JudgementReady,
    SummaryReady,
}

impl std::fmt::Display for WizardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::BasicInfoComplete => "basic_info_complete",
            Self::RequestDefined => "request_defined",
            Self::AnsweringInfoRequest => "answering_info_request",
            Self::CollectingAdditionalDetails => "collecting_additional_details",
            Self::JudgementReady => "judgement_ready",
            Self::SummaryReady => "summary_ready",
        };
        write!(f, "{s}")
    }
}

/// Everything the user has entered or requested in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub spm_contact: String,
    #[serde(default)]
    pub escalation_level: Option<EscalationLevel>,
    #[serde(default)]
    pub request_title: String,
    #[serde(default)]
    pub request_type: Option<RequestType>,
    #[serde(default)]
    pub info_query: Option<String>,
    #[serde(default)]
    pub suggested_answer: Option<String>,
    /// The query text `suggested_answer` was produced for.
    #[serde(default)]
    pub answered_query: Option<String>,
    #[serde(default)]
    pub satisfied: Satisfaction,
    #[serde(default)]
    pub details: AdditionalDetails,
    #[serde(default)]
    pub judgement: Option<String>,
    #[serde(default)]
    pub summary_document: Option<String>,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl WizardState {
    /// Step 1 guard: sport, SPM contact and escalation level are all set.
    pub fn basic_info_complete(&self) -> bool {
        filled(&self.sport) && filled(&self.spm_contact) && self.escalation_level.is_some()
    }

    /// Step 2 guard: a titled request of a known type.
    pub fn request_defined(&self) -> bool {
        self.basic_info_complete() && filled(&self.request_title) && self.request_type.is_some()
    }

    pub fn is_information_request(&self) -> bool {
        self.request_type == Some(RequestType::InformationRequest)
    }

    /// The trimmed info query, if the request is an information request and
    /// the query has content.
    pub fn pending_query(&self) -> Option<&str> {
        if !self.request_defined() || !self.is_information_request() {
            return None;
        }
        self.info_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Whether `suggested_answer` answers the query currently entered.
    pub fn answer_is_current(&self) -> bool {
        match (self.pending_query(), self.answered_query.as_deref()) {
            (Some(query), Some(answered)) => {
                self.suggested_answer.is_some() && query == answered
            }
            _ => false,
        }
    }

    /// A completion call is due: there is a query but no answer for it.
    pub fn needs_suggested_answer(&self) -> bool {
        self.pending_query().is_some() && !self.answer_is_current()
    }

    /// Drop an answer that belongs to a query the user has since edited.
    ///
    /// The satisfaction choice goes with it. Answers left over after the
    /// request type changed are kept, since switching back should not cost
    /// another completion call; they are masked wherever they are reported.
    pub fn discard_stale_answer(&mut self) {
        let Some(answered) = self.answered_query.as_deref() else {
            return;
        };
        let current = self
            .info_query
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        if current != answered {
            self.suggested_answer = None;
            self.answered_query = None;
            self.satisfied = Satisfaction::Unset;
        }
    }

    /// The satisfaction choice is shown once an answer is on screen.
    pub fn awaiting_satisfaction(&self) -> bool {
        self.answer_is_current()
    }

    /// Step 4 guard: a non-information request, or an answer the user
    /// rejected.
    pub fn details_requested(&self) -> bool {
        if !self.request_defined() {
            return false;
        }
        !self.is_information_request()
            || (self.answer_is_current() && self.satisfied == Satisfaction::No)
    }

    /// Additional details as far as they were actually collected. Fields the
    /// form never asked for read as empty.
    pub fn collected_details(&self) -> AdditionalDetails {
        if self.details_requested() {
            self.details.clone()
        } else {
            AdditionalDetails::default()
        }
    }

    /// Judgement guard: Step 1 complete and a request type chosen.
    pub fn can_generate_judgement(&self) -> bool {
        self.basic_info_complete() && self.request_type.is_some()
    }

    /// Derive the current stage from the field values.
    pub fn stage(&self) -> WizardStage {
        if self.summary_document.is_some() {
            return WizardStage::SummaryReady;
        }
        if !self.basic_info_complete() {
            return WizardStage::Start;
        }
        if self.judgement.is_some() {
            return WizardStage::JudgementReady;
        }
        if !self.request_defined() {
            return WizardStage::BasicInfoComplete;
        }
        if self.details_requested() {
            return WizardStage::CollectingAdditionalDetails;
        }
        if self.answer_is_current() {
            return WizardStage::AnsweringInfoRequest;
        }
        WizardStage::RequestDefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> WizardState {
        WizardState {
            sport: "Swimming".to_string(),
            spm_contact: "Jane".to_string(),
            escalation_level: Some(EscalationLevel::Spm),
            ..Default::default()
        }
    }

    fn info_request(query: &str) -> WizardState {
        WizardState {
            request_title: "Pool time".to_string(),
            request_type: Some(RequestType::InformationRequest),
            info_query: Some(query.to_string()),
            ..basic()
        }
    }

    #[test]
    fn default_state_is_at_start() {
        let state = WizardState::default();
        assert_eq!(state.stage(), WizardStage::Start);
        assert!(!state.basic_info_complete());
    }

    #[test]
    fn basic_info_guard_needs_all_three_fields() {
        let mut state = basic();
        assert!(state.basic_info_complete());
        assert_eq!(state.stage(), WizardStage::BasicInfoComplete);

        state.spm_contact = "   ".to_string();
        assert!(!state.basic_info_complete());
        assert_eq!(state.stage(), WizardStage::Start);

        let mut state = basic();
        state.escalation_level = None;
        assert!(!state.basic_info_complete());
    }

    #[test]
    fn request_defined_needs_title_and_type() {
        let mut state = basic();
        state.request_type = Some(RequestType::Other);
        assert!(!state.request_defined());

        state.request_title = "Travel grant".to_string();
        assert!(state.request_defined());
    }

    #[test]
    fn service_request_goes_straight_to_details() {
        let state = WizardState {
            request_title: "Physio".to_string(),
            request_type: Some(RequestType::ServiceRequest),
            ..basic()
        };
        assert!(state.details_requested());
        assert!(state.pending_query().is_none());
        assert_eq!(state.stage(), WizardStage::CollectingAdditionalDetails);
    }

    #[test]
    fn information_request_waits_for_answer() {
        let state = info_request("What is the policy on X?");
        assert_eq!(state.pending_query(), Some("What is the policy on X?"));
        assert!(state.needs_suggested_answer());
        assert!(!state.details_requested());
        assert_eq!(state.stage(), WizardStage::RequestDefined);
    }

    #[test]
    fn rejected_answer_requests_details() {
        let mut state = info_request("What is the policy on X?");
        state.suggested_answer = Some("Policy X allows Y.".to_string());
        state.answered_query = Some("What is the policy on X?".to_string());
        assert_eq!(state.stage(), WizardStage::AnsweringInfoRequest);
        assert!(!state.needs_suggested_answer());

        state.satisfied = Satisfaction::Yes;
        assert!(!state.details_requested());

        state.satisfied = Satisfaction::No;
        assert!(state.details_requested());
        assert_eq!(state.stage(), WizardStage::CollectingAdditionalDetails);
    }

    #[test]
    fn editing_the_query_discards_answer_and_satisfaction() {
        let mut state = info_request("What is the policy on X?");
        state.suggested_answer = Some("Policy X allows Y.".to_string());
        state.answered_query = Some("What is the policy on X?".to_string());
        state.satisfied = Satisfaction::No;

        state.info_query = Some("What about Z?".to_string());
        state.discard_stale_answer();

        assert!(state.suggested_answer.is_none());
        assert!(state.answered_query.is_none());
        assert_eq!(state.satisfied, Satisfaction::Unset);
        assert!(state.needs_suggested_answer());
    }

    #[test]
    fn trailing_whitespace_does_not_make_answer_stale() {
        let mut state = info_request("What is the policy on X?  ");
        state.suggested_answer = Some("Policy X allows Y.".to_string());
        state.answered_query = Some("What is the policy on X?".to_string());
        state.discard_stale_answer();
        assert!(state.answer_is_current());
    }

    #[test]
    fn uncollected_details_read_as_empty() {
        let mut state = info_request("What is the policy on X?");
        state.details.purpose = Some("typed before switching".to_string());
        assert_eq!(state.collected_details(), AdditionalDetails::default());

        state.request_type = Some(RequestType::Other);
        assert_eq!(state.collected_details().purpose(), "typed before switching");
    }

    #[test]
    fn judgement_guard_ignores_title() {
        let mut state = basic();
        assert!(!state.can_generate_judgement());
        state.request_type = Some(RequestType::Other);
        assert!(state.can_generate_judgement());
    }

    #[test]
    fn summary_and_judgement_stages() {
        let mut state = basic();
        state.judgement = Some("Likely approved.".to_string());
        assert_eq!(state.stage(), WizardStage::JudgementReady);

        state.summary_document = Some("doc".to_string());
        assert_eq!(state.stage(), WizardStage::SummaryReady);
    }

    #[test]
    fn display_matches_serde() {
        use WizardStage::*;
        for stage in [
            Start,
            BasicInfoComplete,
            RequestDefined,
            AnsweringInfoRequest,
            CollectingAdditionalDetails,
            JudgementReady,
            SummaryReady,
        ] {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(format!("\"{stage}\""), json);
        }
    }

    #[test]
    fn state_deserializes_from_partial_json() {
        let state: WizardState = serde_json::from_str(r#"{"sport": "Rowing"}"#).unwrap();
        assert_eq!(state.sport, "Rowing");
        assert_eq!(state.satisfied, Satisfaction::Unset);
        assert!(state.request_type.is_none());
    }
}

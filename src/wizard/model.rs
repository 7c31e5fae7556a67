//! Field types collected by the request wizard.

use serde::{Deserialize, Serialize};

/// Who the request should be escalated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationLevel {
    Spm,
    TeamLead,
    Hod,
    Chief,
}

impl std::fmt::Display for EscalationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spm => write!(f, "SPM"),
            Self::TeamLead => write!(f, "Team Lead"),
            Self::Hod => write!(f, "HOD"),
            Self::Chief => write!(f, "Chief"),
        }
    }
}

/// Kind of query or request being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    InformationRequest,
    ServiceRequest,
    Other,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InformationRequest => write!(f, "Information Request"),
            Self::ServiceRequest => write!(f, "Service/Resource Request"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Whether the suggested answer resolved an information request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Satisfaction {
    #[default]
    Unset,
    Yes,
    No,
}

impl std::fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => write!(f, "N/A"),
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// Step 4 fields, requested for service requests and unresolved questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_outcomes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources_needed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

impl AdditionalDetails {
    pub fn purpose(&self) -> &str {
        self.purpose.as_deref().unwrap_or_default()
    }

    pub fn expected_outcomes(&self) -> &str {
        self.expected_outcomes.as_deref().unwrap_or_default()
    }

    pub fn resources_needed(&self) -> &str {
        self.resources_needed.as_deref().unwrap_or_default()
    }

    pub fn timeframe(&self) -> &str {
        self.timeframe.as_deref().unwrap_or_default()
    }
}

/// Every input widget the form can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardField {
    Sport,
    SpmContact,
    EscalationLevel,
    RequestTitle,
    RequestType,
    InfoQuery,
    Satisfied,
    Purpose,
    ExpectedOutcomes,
    ResourcesNeeded,
    Timeframe,
}

impl WizardField {
    /// Label shown next to the widget.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sport => "Sport/NSA you represent",
            Self::SpmContact => "SPM you wish to contact",
            Self::EscalationLevel => "Level of escalation",
            Self::RequestTitle => "Title of your query/request",
            Self::RequestType => "Type of query/request",
            Self::InfoQuery => "Describe your question in detail",
            Self::Satisfied => "Is this answer sufficient?",
            Self::Purpose => "Purpose and justification for the request",
            Self::ExpectedOutcomes => "Expected outcomes or goals",
            Self::ResourcesNeeded => "Resources or support needed",
            Self::Timeframe => "Deadline or timeframe for the request",
        }
    }
}

/// The numbered sections of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicInfo,
    DefineRequest,
    SuggestedAnswer,
    AdditionalDetails,
    PreliminaryJudgement,
    SummaryDocument,
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::BasicInfo => "Step 1: Basic Information",
            Self::DefineRequest => "Step 2: Define Your Request",
            Self::SuggestedAnswer => "Step 3: Suggested Answer",
            Self::AdditionalDetails => "Step 4: Provide Additional Details",
            Self::PreliminaryJudgement => "Step 5: Preliminary Judgement",
            Self::SummaryDocument => "Step 6: Summary Document",
        };
        write!(f, "{s}")
    }
}

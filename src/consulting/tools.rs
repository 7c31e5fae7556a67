//! The consultant and question-breakdown tools.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::error::ConsultingError;
use crate::llm::LlmProvider;

/// Which consulting tool produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultingTool {
    Consultant,
    QuestionBreakdown,
}

impl ConsultingTool {
    /// Disclaimer shown under every answer from this tool.
    pub fn note(&self) -> &'static str {
        match self {
            Self::Consultant => "Answers are reviewed by human experts for accuracy.",
            Self::QuestionBreakdown => {
                "Automated recommendations based on historical cases and sports-specific guidelines."
            }
        }
    }

    pub fn prompt(&self, query: &str) -> String {
        match self {
            Self::Consultant => format!("As an SPM Consultant, {query}"),
            Self::QuestionBreakdown => format!(
                "Analyze the question '{query}' into categories, prompt for clarifying \
                 information, and provide recommendations."
            ),
        }
    }
}

/// A tool answer ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolAnswer {
    pub tool: ConsultingTool,
    pub answer: String,
    pub note: &'static str,
}

/// Free-form consulting tools backed by the completion service.
pub struct ConsultingTools {
    llm: Arc<dyn LlmProvider>,
}

impl ConsultingTools {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }

    /// Ask the SPM consultant a free-form question.
    pub async fn consult(&self, query: &str) -> Result<ToolAnswer, ConsultingError> {
        self.ask(ConsultingTool::Consultant, query).await
    }

    /// Break a question down into categories, clarifications and
    /// recommendations.
    pub async fn break_down(&self, query: &str) -> Result<ToolAnswer, ConsultingError> {
        self.ask(ConsultingTool::QuestionBreakdown, query).await
    }

    async fn ask(&self, tool: ConsultingTool, query: &str) -> Result<ToolAnswer, ConsultingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ConsultingError::EmptyQuery);
        }

        info!(tool = ?tool, model = self.llm.model_name(), "Running consulting tool");
        let answer = self.llm.complete_prompt(&tool.prompt(query)).await?;

        Ok(ToolAnswer {
            tool,
            answer,
            note: tool.note(),
        })
    }
}

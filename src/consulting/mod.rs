//! Consulting & questioning tools: single-shot prompts to the completion
//! service, outside the request wizard.

pub mod routes;
pub mod tools;

pub use routes::{ConsultingRouteState, consulting_routes};
pub use tools::{ConsultingTool, ConsultingTools, ToolAnswer};

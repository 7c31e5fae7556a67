//! Request wizard: the "SPM Consultant Tool for NSA Requests" flow.
//!
//! A multi-step form whose later steps unlock as earlier ones are filled in.
//! Every interaction re-evaluates the whole state (`machine::render`), so
//! the stage is always a function of the current field values. The session
//! store keeps one `WizardState` per user between interactions.

pub mod machine;
pub mod model;
pub mod prompts;
pub mod routes;
pub mod session;
pub mod state;
pub mod summary;

pub use machine::{FieldEdit, RenderOutcome, WizardAction, WizardView, render};
pub use model::{
    AdditionalDetails, EscalationLevel, RequestType, Satisfaction, WizardField, WizardStep,
};
pub use routes::{WizardRouteState, wizard_routes};
pub use session::{Session, SessionStore, spawn_expiry_task};
pub use state::{WizardStage, WizardState};
pub use summary::assemble;

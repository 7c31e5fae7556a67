//! Static portal pages: the role dashboard, the welcome guide and the
//! knowledge base.

pub mod dashboard;
pub mod knowledge;
pub mod routes;

pub use dashboard::{DashboardView, ModuleInfo, Role, WELCOME_GUIDE, dashboard, greeting};
pub use knowledge::{KnowledgeSection, SectionView, all_sections};
pub use routes::portal_routes;

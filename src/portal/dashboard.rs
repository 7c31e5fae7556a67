//! Main dashboard: greeting, role selection and per-role module list.

use serde::Serialize;

/// Shown once, on a user's first visit.
pub const WELCOME_GUIDE: &str = "\
The SPM Megazord is a high-performance platform designed to provide insights, guidance, and tools for \
a variety of roles including Athletes, Coaches, and Managers. Here's a quick overview of what you can do:
- **Q&A Module**: Ask any question related to performance, strategy, or general information.
- **Summarization Module**: Summarize lengthy content, such as reports or articles.
- **Content Generation Module**: Get ideas, suggestions, or plans based on a topic you specify.";

/// Roles a dashboard user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Nsa,
    Spm,
    Management,
    Athlete,
    Coach,
    Hpm,
    HpStaff,
    Other,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Self::Nsa,
        Self::Spm,
        Self::Management,
        Self::Athlete,
        Self::Coach,
        Self::Hpm,
        Self::HpStaff,
        Self::Other,
    ];

    /// Parse a role from its label or wire name, ignoring case and separators.
    pub fn parse(name: &str) -> Option<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL.into_iter().find(|role| {
            let label: String = role
                .to_string()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            label == wanted
        })
    }

    /// Module descriptions for roles that have a tailored introduction.
    pub fn modules(&self) -> &'static [ModuleInfo] {
        match self {
            Self::Athlete => &[
                ModuleInfo {
                    name: "Q&A Module",
                    description: "Ask questions about training or performance.",
                },
                ModuleInfo {
                    name: "Summarization Module",
                    description: "Summarize long training reports or articles.",
                },
                ModuleInfo {
                    name: "Content Generation Module",
                    description: "Generate training tips and recovery advice.",
                },
            ],
            Self::Coach => &[
                ModuleInfo {
                    name: "Q&A Module",
                    description: "Ask questions about strategy, motivation, and team management.",
                },
                ModuleInfo {
                    name: "Summarization Module",
                    description: "Summarize game analysis or performance reports.",
                },
                ModuleInfo {
                    name: "Content Generation Module",
                    description: "Generate team-building ideas or motivational tips.",
                },
            ],
            Self::Management => &[
                ModuleInfo {
                    name: "Q&A Module",
                    description: "Ask questions related to performance metrics and team productivity.",
                },
                ModuleInfo {
                    name: "Summarization Module",
                    description: "Summarize strategic reports or data analysis.",
                },
                ModuleInfo {
                    name: "Content Generation Module",
                    description: "Generate insights and performance improvement ideas.",
                },
            ],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Nsa => "NSA",
            Self::Spm => "SPM",
            Self::Management => "Management",
            Self::Athlete => "Athlete",
            Self::Coach => "Coach",
            Self::Hpm => "HPM",
            Self::HpStaff => "HP Staff",
            Self::Other => "Other",
        };
        write!(f, "{s}")
    }
}

/// One module entry on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// The dashboard as shown for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    pub role: Role,
    /// The label to display; the custom text when the role is `Other`.
    pub role_label: String,
    pub modules: Vec<ModuleInfo>,
}

/// Greeting for a named user. A blank name gets no greeting.
pub fn greeting(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(format!("Hello, {name}! Welcome to the Megazord."))
    }
}

/// Build the dashboard for a user and role. `custom_role` only applies to
/// `Role::Other`. Modules are listed only once the user has given a name.
pub fn dashboard(name: &str, role: Role, custom_role: Option<&str>) -> DashboardView {
    let role_label = match (role, custom_role.map(str::trim)) {
        (Role::Other, Some(custom)) if !custom.is_empty() => custom.to_string(),
        _ => role.to_string(),
    };
    let greeting = greeting(name);
    let modules = match greeting {
        Some(_) => role.modules().to_vec(),
        None => Vec::new(),
    };

    DashboardView {
        greeting,
        role,
        role_label,
        modules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_labels_and_wire_names() {
        assert_eq!(Role::parse("HP Staff"), Some(Role::HpStaff));
        assert_eq!(Role::parse("hp_staff"), Some(Role::HpStaff));
        assert_eq!(Role::parse("coach"), Some(Role::Coach));
        assert_eq!(Role::parse("NSA"), Some(Role::Nsa));
        assert_eq!(Role::parse("referee"), None);
    }

    #[test]
    fn tailored_roles_list_three_modules() {
        for role in [Role::Athlete, Role::Coach, Role::Management] {
            assert_eq!(role.modules().len(), 3, "{role} should list three modules");
        }
        assert!(Role::Spm.modules().is_empty());
        assert!(Role::HpStaff.modules().is_empty());
    }

    #[test]
    fn greeting_needs_a_name() {
        assert_eq!(
            greeting("Ada").as_deref(),
            Some("Hello, Ada! Welcome to the Megazord.")
        );
        assert!(greeting("  ").is_none());
    }

    #[test]
    fn other_role_uses_custom_label() {
        let view = dashboard("Ada", Role::Other, Some("Physio"));
        assert_eq!(view.role_label, "Physio");
        assert!(view.modules.is_empty());

        let view = dashboard("Ada", Role::Coach, Some("ignored"));
        assert_eq!(view.role_label, "Coach");
        assert_eq!(view.modules[0].name, "Q&A Module");
    }

    #[test]
    fn blank_name_hides_modules() {
        let view = dashboard("  ", Role::Athlete, None);
        assert!(view.greeting.is_none());
        assert!(view.modules.is_empty());

        let view = dashboard("Ada", Role::Athlete, None);
        assert_eq!(view.modules.len(), 3);
    }

    #[test]
    fn welcome_guide_lists_modules() {
        assert!(WELCOME_GUIDE.contains("**Q&A Module**"));
        assert!(WELCOME_GUIDE.contains("**Content Generation Module**"));
    }
}

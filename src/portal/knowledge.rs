//! Centralized knowledge base: static reference sections.

use serde::Serialize;

/// A knowledge base section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeSection {
    Faqs,
    Policies,
    BestPractices,
}

impl KnowledgeSection {
    pub const ALL: [KnowledgeSection; 3] = [Self::Faqs, Self::Policies, Self::BestPractices];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Faqs => "FAQs",
            Self::Policies => "Policies",
            Self::BestPractices => "Best Practices",
        }
    }

    pub fn entries(&self) -> &'static [&'static str] {
        match self {
            Self::Faqs => &[
                "What is the SPM Megazord?",
                "How does the Q&A Module work?",
                "Can I customize content generation?",
            ],
            Self::Policies => &[
                "Privacy Policy",
                "Data Protection Policy",
                "Terms and Conditions",
            ],
            Self::BestPractices => &[
                "Effective Training Techniques",
                "Management Strategies",
                "Motivation Tips for Coaches",
            ],
        }
    }

    /// Look a section up by title or wire name, ignoring case and
    /// separators ("Best Practices", "best_practices", "best-practices").
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL.into_iter().find(|section| {
            normalize(section.title()) == wanted
        })
    }

    pub fn render(&self) -> SectionView {
        SectionView {
            section: *self,
            title: self.title(),
            entries: self.entries().to_vec(),
        }
    }
}

/// A section as returned to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub section: KnowledgeSection,
    pub title: &'static str,
    pub entries: Vec<&'static str>,
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Every section, in display order.
pub fn all_sections() -> Vec<SectionView> {
    KnowledgeSection::ALL.iter().map(|s| s.render()).collect()
}

use serde::{Deserialize, Serialize};

/// Technical skill categories, in the fixed order used for flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Languages,
    Backend,
    Frontend,
    Mobile,
    Database,
    Devops,
    Ai,
    Architecture,
    Testing,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::Languages,
        SkillCategory::Backend,
        SkillCategory::Frontend,
        SkillCategory::Mobile,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Ai,
        SkillCategory::Architecture,
        SkillCategory::Testing,
    ];

    /// Key used by the analysis service.
    pub fn key(self) -> &'static str {
        match self {
            SkillCategory::Languages => "languages",
            SkillCategory::Backend => "backend",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Mobile => "mobile",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Ai => "ai",
            SkillCategory::Architecture => "architecture",
            SkillCategory::Testing => "testing",
        }
    }
}

/// Categorised technical skills. Lists keep extraction order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    pub languages: Vec<String>,
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub mobile: Vec<String>,
    pub database: Vec<String>,
    pub devops: Vec<String>,
    pub ai: Vec<String>,
    pub architecture: Vec<String>,
    pub testing: Vec<String>,
}

impl TechnicalSkills {
    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Languages => &self.languages,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Mobile => &self.mobile,
            SkillCategory::Database => &self.database,
            SkillCategory::Devops => &self.devops,
            SkillCategory::Ai => &self.ai,
            SkillCategory::Architecture => &self.architecture,
            SkillCategory::Testing => &self.testing,
        }
    }

    /// Flattened list of every skill in category order. No deduplication.
    pub fn all_skills(&self) -> Vec<String> {
        SkillCategory::ALL
            .iter()
            .flat_map(|category| self.category(*category).iter().cloned())
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        SkillCategory::ALL
            .iter()
            .map(|category| self.category(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.skill_count() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub category: String,
}

/// Parsed analysis returned for an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub technical_skills: TechnicalSkills,
    #[serde(default)]
    pub tools_frameworks: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub detected_experience_years: u32,
    #[serde(default)]
    pub generated_questions: Vec<GeneratedQuestion>,
}

impl UploadOutcome {
    pub fn all_skills(&self) -> Vec<String> {
        self.technical_skills.all_skills()
    }

    pub fn question_texts(&self) -> Vec<String> {
        self.generated_questions
            .iter()
            .map(|q| q.question.clone())
            .collect()
    }
}

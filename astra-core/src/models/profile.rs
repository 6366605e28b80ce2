use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grade level selected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "grade-9")]
    Grade9,
    #[serde(rename = "grade-10")]
    Grade10,
    #[serde(rename = "grade-11")]
    Grade11,
    #[serde(rename = "grade-12")]
    Grade12,
    #[serde(rename = "gap-year")]
    GapYear,
    #[serde(rename = "transfer")]
    Transfer,
}

impl GradeLevel {
    /// Wire value, e.g. `grade-11`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeLevel::Grade9 => "grade-9",
            GradeLevel::Grade10 => "grade-10",
            GradeLevel::Grade11 => "grade-11",
            GradeLevel::Grade12 => "grade-12",
            GradeLevel::GapYear => "gap-year",
            GradeLevel::Transfer => "transfer",
        }
    }

    /// Short label used in advisory copy ("your junior year priorities").
    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Grade9 => "freshman",
            GradeLevel::Grade10 => "sophomore",
            GradeLevel::Grade11 => "junior",
            GradeLevel::Grade12 => "senior",
            GradeLevel::GapYear => "gap year student",
            GradeLevel::Transfer => "transfer student",
        }
    }

    /// Long label used when describing the student to the LLM collaborator.
    pub fn context_label(&self) -> &'static str {
        match self {
            GradeLevel::Grade9 => "Grade 9 (Freshman)",
            GradeLevel::Grade10 => "Grade 10 (Sophomore)",
            GradeLevel::Grade11 => "Grade 11 (Junior)",
            GradeLevel::Grade12 => "Grade 12 (Senior)",
            GradeLevel::GapYear => "Gap Year",
            GradeLevel::Transfer => "College Transfer Student",
        }
    }
}

/// A stored onboarding profile. Immutable once created; the id is assigned by
/// the conversation store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: Uuid,
    pub grade_level: GradeLevel,
    pub intended_majors: Vec<String>,
    pub target_universities: Vec<String>,
    pub current_activities: String,
    pub strengths: String,
    pub weaknesses: String,
    pub timeline: String,
}

/// Onboarding payload — a profile before the store has assigned its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudentProfile {
    pub grade_level: GradeLevel,
    pub intended_majors: Vec<String>,
    pub target_universities: Vec<String>,
    pub current_activities: String,
    pub strengths: String,
    pub weaknesses: String,
    pub timeline: String,
}

impl NewStudentProfile {
    pub fn into_profile(self, id: Uuid) -> StudentProfile {
        StudentProfile {
            id,
            grade_level: self.grade_level,
            intended_majors: self.intended_majors,
            target_universities: self.target_universities,
            current_activities: self.current_activities,
            strengths: self.strengths,
            weaknesses: self.weaknesses,
            timeline: self.timeline,
        }
    }
}

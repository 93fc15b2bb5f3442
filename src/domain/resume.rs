//! Resume Entities
//!
//! The resume is a single document, persisted whole, with id-carrying rows
//! for experience and education so individual rows can be edited or removed.

use serde::{Deserialize, Serialize};

/// One employment entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResumeExperience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResumeEducation {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// The whole resume document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResumeData {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub about: String,
    pub skills: Vec<String>,
    pub experiences: Vec<ResumeExperience>,
    pub education: Vec<ResumeEducation>,
}

/// Contact/profile fields editable one at a time; `None` keeps the
/// existing value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfilePatch {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub about: Option<String>,
}

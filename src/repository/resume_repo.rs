//! Resume Repository
//!
//! The resume is one document saved whole after every edit, in the spirit of
//! an auto-saving form.

use log::warn;

use crate::domain::{
    DomainError, DomainResult, ResumeData, ResumeEducation, ResumeExperience, ResumeProfilePatch,
};

use super::ids::next_id;
use super::traits::SharedStore;

pub const KEY_RESUME: &str = "user_resume";

/// Store-backed resume document
pub struct ResumeRepository {
    store: SharedStore,
    data: ResumeData,
}

impl ResumeRepository {
    pub fn load(store: SharedStore) -> Self {
        let data = match store.get(KEY_RESUME) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("malformed value under '{}', starting empty: {}", KEY_RESUME, e);
                ResumeData::default()
            }),
            Ok(None) => ResumeData::default(),
            Err(e) => {
                warn!("failed to read '{}', starting empty: {}", KEY_RESUME, e);
                ResumeData::default()
            }
        };
        Self { store, data }
    }

    pub fn data(&self) -> &ResumeData {
        &self.data
    }

    pub fn update_profile(&mut self, patch: ResumeProfilePatch) -> &ResumeData {
        if let Some(full_name) = patch.full_name {
            self.data.full_name = full_name;
        }
        if let Some(job_title) = patch.job_title {
            self.data.job_title = job_title;
        }
        if let Some(email) = patch.email {
            self.data.email = email;
        }
        if let Some(phone) = patch.phone {
            self.data.phone = phone;
        }
        if let Some(website) = patch.website {
            self.data.website = website;
        }
        if let Some(about) = patch.about {
            self.data.about = about;
        }
        self.persist();
        &self.data
    }

    /// Prepend a blank experience row and return it
    pub fn add_experience(&mut self) -> ResumeExperience {
        let row = ResumeExperience {
            id: next_id(),
            ..Default::default()
        };
        self.data.experiences.insert(0, row.clone());
        self.persist();
        row
    }

    pub fn update_experience(
        &mut self,
        id: &str,
        row: ResumeExperience,
    ) -> DomainResult<ResumeExperience> {
        let existing = self
            .data
            .experiences
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("experience {} not found", id)))?;
        *existing = ResumeExperience {
            id: existing.id.clone(),
            ..row
        };
        let updated = existing.clone();
        self.persist();
        Ok(updated)
    }

    pub fn remove_experience(&mut self, id: &str) -> DomainResult<()> {
        let before = self.data.experiences.len();
        self.data.experiences.retain(|e| e.id != id);
        if self.data.experiences.len() == before {
            return Err(DomainError::NotFound(format!("experience {} not found", id)));
        }
        self.persist();
        Ok(())
    }

    /// Prepend a blank education row and return it
    pub fn add_education(&mut self) -> ResumeEducation {
        let row = ResumeEducation {
            id: next_id(),
            ..Default::default()
        };
        self.data.education.insert(0, row.clone());
        self.persist();
        row
    }

    pub fn update_education(
        &mut self,
        id: &str,
        row: ResumeEducation,
    ) -> DomainResult<ResumeEducation> {
        let existing = self
            .data
            .education
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("education {} not found", id)))?;
        *existing = ResumeEducation {
            id: existing.id.clone(),
            ..row
        };
        let updated = existing.clone();
        self.persist();
        Ok(updated)
    }

    pub fn remove_education(&mut self, id: &str) -> DomainResult<()> {
        let before = self.data.education.len();
        self.data.education.retain(|e| e.id != id);
        if self.data.education.len() == before {
            return Err(DomainError::NotFound(format!("education {} not found", id)));
        }
        self.persist();
        Ok(())
    }

    /// Add a skill; blanks and duplicates are ignored
    pub fn add_skill(&mut self, skill: &str) -> DomainResult<()> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(DomainError::InvalidInput("skill is required".into()));
        }
        if !self.data.skills.iter().any(|s| s == skill) {
            self.data.skills.push(skill.to_string());
            self.persist();
        }
        Ok(())
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.data.skills.retain(|s| s != skill);
        self.persist();
    }

    /// Wipe the whole document back to its empty state
    pub fn clear(&mut self) {
        self.data = ResumeData::default();
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.data) {
            Ok(json) => {
                if let Err(e) = self.store.set(KEY_RESUME, &json) {
                    warn!(
                        "failed to persist '{}', keeping in-memory state: {}",
                        KEY_RESUME, e
                    );
                }
            }
            Err(e) => warn!("failed to serialize '{}': {}", KEY_RESUME, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use std::sync::Arc;

    fn setup() -> ResumeRepository {
        ResumeRepository::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_skills_dedupe_and_trim() {
        let mut repo = setup();
        repo.add_skill("  Typography ").unwrap();
        repo.add_skill("Typography").unwrap();
        assert_eq!(repo.data().skills, vec!["Typography"]);
        assert!(repo.add_skill("   ").is_err());
    }

    #[test]
    fn test_experience_rows_prepend_and_update() {
        let mut repo = setup();
        let first = repo.add_experience();
        let second = repo.add_experience();
        assert_eq!(repo.data().experiences[0].id, second.id);

        let updated = repo
            .update_experience(
                &first.id,
                ResumeExperience {
                    role: "Art director".into(),
                    company: "Studio".into(),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.role, "Art director");
    }

    #[test]
    fn test_clear_resets_document() {
        let mut repo = setup();
        repo.update_profile(ResumeProfilePatch {
            full_name: Some("Sara".into()),
            ..Default::default()
        });
        repo.add_skill("Layout").unwrap();
        repo.clear();
        assert_eq!(repo.data(), &ResumeData::default());
    }

    #[test]
    fn test_remove_missing_row() {
        let mut repo = setup();
        assert!(matches!(
            repo.remove_education("absent"),
            Err(DomainError::NotFound(_))
        ));
    }
}

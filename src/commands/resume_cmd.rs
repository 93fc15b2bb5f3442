//! Commands for the Resume Builder

use crate::domain::{
    ResumeData, ResumeEducation, ResumeExperience, ResumeProfilePatch,
};
use crate::AppState;

pub async fn get_resume(state: &AppState) -> Result<ResumeData, String> {
    let resume = state.resume.lock().await;
    Ok(resume.data().clone())
}

pub async fn update_resume_profile(
    state: &AppState,
    patch: ResumeProfilePatch,
) -> Result<ResumeData, String> {
    let mut resume = state.resume.lock().await;
    Ok(resume.update_profile(patch).clone())
}

pub async fn add_experience(state: &AppState) -> Result<ResumeExperience, String> {
    let mut resume = state.resume.lock().await;
    Ok(resume.add_experience())
}

pub async fn update_experience(
    state: &AppState,
    id: String,
    row: ResumeExperience,
) -> Result<ResumeExperience, String> {
    let mut resume = state.resume.lock().await;
    resume.update_experience(&id, row).map_err(|e| e.to_string())
}

pub async fn remove_experience(state: &AppState, id: String) -> Result<(), String> {
    let mut resume = state.resume.lock().await;
    resume.remove_experience(&id).map_err(|e| e.to_string())
}

pub async fn add_education(state: &AppState) -> Result<ResumeEducation, String> {
    let mut resume = state.resume.lock().await;
    Ok(resume.add_education())
}

pub async fn update_education(
    state: &AppState,
    id: String,
    row: ResumeEducation,
) -> Result<ResumeEducation, String> {
    let mut resume = state.resume.lock().await;
    resume.update_education(&id, row).map_err(|e| e.to_string())
}

pub async fn remove_education(state: &AppState, id: String) -> Result<(), String> {
    let mut resume = state.resume.lock().await;
    resume.remove_education(&id).map_err(|e| e.to_string())
}

pub async fn add_skill(state: &AppState, skill: String) -> Result<Vec<String>, String> {
    let mut resume = state.resume.lock().await;
    resume.add_skill(&skill).map_err(|e| e.to_string())?;
    Ok(resume.data().skills.clone())
}

pub async fn remove_skill(state: &AppState, skill: String) -> Result<Vec<String>, String> {
    let mut resume = state.resume.lock().await;
    resume.remove_skill(&skill);
    Ok(resume.data().skills.clone())
}

/// Wipe the whole resume (the UI confirms first)
pub async fn clear_resume(state: &AppState) -> Result<(), String> {
    let mut resume = state.resume.lock().await;
    resume.clear();
    Ok(())
}

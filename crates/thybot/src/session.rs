//! Per-user state, passed explicitly to every flow.
use thybot_types::{
    profile::{PatientProfile, ProfileForm, status_label},
    style::ResponseStyle,
};

use crate::{
    conversation::Conversation,
    flows::{DocumentChat, MealPlan},
};

/// Everything ThyBot remembers about one user for as long as the process
/// runs. Each part is reset on its own.
#[derive(Debug, Default)]
pub struct Session {
    profile: Option<PatientProfile>,
    pub style: ResponseStyle,
    pub general: Conversation,
    document: Option<DocumentChat>,
    pub meal: MealPlan,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the profile with one derived from `form`.
    pub fn save_profile(&mut self, form: ProfileForm) -> &PatientProfile {
        let profile = PatientProfile::new(form);
        tracing::info!(status = %profile.thyroid_status, "profile saved");
        self.profile.insert(profile)
    }

    pub fn profile(&self) -> Option<&PatientProfile> {
        self.profile.as_ref()
    }

    /// Thyroid status for prompts; `Not specified` without a profile.
    pub fn thyroid_status(&self) -> String {
        status_label(self.profile.as_ref())
    }

    pub fn clear_general_chat(&mut self) {
        self.general.clear();
    }

    /// Start a document conversation, discarding any previous one.
    pub fn start_document_chat(&mut self, chat: DocumentChat) -> &mut DocumentChat {
        if let Some(previous) = &self.document {
            tracing::info!(file = previous.file_name(), "replacing document");
        }
        self.document.insert(chat)
    }

    pub fn document_chat(&self) -> Option<&DocumentChat> {
        self.document.as_ref()
    }

    pub fn document_chat_mut(&mut self) -> Option<&mut DocumentChat> {
        self.document.as_mut()
    }

    /// Drop the document, its index and its messages.
    pub fn end_document_chat(&mut self) -> Option<DocumentChat> {
        self.document.take()
    }

    pub fn clear_meal(&mut self) {
        self.meal.clear();
    }
}

//! Workflow state machine.
//!
//! `AppState` is the aggregate root; it is mutated only through the named
//! commands on [`Workflow`]. Entering `TipsGeneration` runs an entry hook
//! synchronously: when a generation call has to be started the hook hands
//! back a [`GenerationTicket`]. The caller runs the generation and reports
//! the result with the ticket id. Results for any ticket other than the one
//! in flight, or arriving after the user left `TipsGeneration`, are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::model::{Profile, Tip};
use crate::store::{SessionStore, StateSnapshot, StorageKey};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStep {
    #[default]
    ProfileSetup,
    TipsGeneration,
    TipsDisplay,
    TipDetails,
    Favorites,
}

impl WorkflowStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowStep::ProfileSetup => "profile-setup",
            WorkflowStep::TipsGeneration => "tips-generation",
            WorkflowStep::TipsDisplay => "tips-display",
            WorkflowStep::TipDetails => "tip-details",
            WorkflowStep::Favorites => "favorites",
        }
    }
}

impl fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub user_profile: Option<Profile>,
    pub current_tips: Vec<Tip>,
    pub favorite_tips: Vec<Tip>,
    pub selected_tip: Option<Tip>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_step: WorkflowStep,
}

/// Permission to run exactly one generation call for `profile`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTicket {
    pub id: u64,
    pub profile: Profile,
}

#[derive(Debug, Clone)]
pub enum Command {
    SubmitProfile(Profile),
    TipsGenerated { ticket: u64, tips: Vec<Tip> },
    GenerationFailed { ticket: u64, message: String },
    RetryGeneration,
    SelectTip(Tip),
    RequestFavoritesView,
    RequestBoardView,
    BackFromDetails,
    ToggleFavorite(Tip),
    UpdateTip(Tip),
    ResetTips,
    ResetProfile,
    ResetAll,
}

pub struct Workflow {
    state: AppState,
    store: Arc<dyn SessionStore>,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl Workflow {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            state: AppState::default(),
            store,
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Id of the generation currently outstanding, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Restore the persisted profile and favorites. Called once at startup.
    ///
    /// The dedicated keys win. The app-state snapshot only fills in a profile
    /// or favorites list whose own key is missing or unreadable.
    pub fn hydrate(&mut self) -> Option<GenerationTicket> {
        let mut snapshot = self.store.load_snapshot();
        let mut favorites = self.store.load_favorites();
        if favorites.is_empty() {
            if let Some(snapshot) = snapshot.as_mut() {
                favorites = std::mem::take(&mut snapshot.favorite_tips);
            }
        }
        if !favorites.is_empty() {
            tracing::info!("Restored {} favorite tips", favorites.len());
            self.state.favorite_tips = favorites
                .into_iter()
                .map(|mut tip| {
                    tip.is_favorite = true;
                    tip
                })
                .collect();
        }

        let profile = self
            .store
            .load_profile()
            .or_else(|| snapshot.and_then(|s| s.user_profile))?;
        if let Err(e) = profile.validate() {
            tracing::warn!("Discarding persisted profile: {}", e);
            return None;
        }
        tracing::info!("Restored profile with goals [{}]", profile.goal_signature());
        self.state.user_profile = Some(profile);
        self.request_board_view()
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Option<GenerationTicket>, ValidationError> {
        let ticket = match command {
            Command::SubmitProfile(profile) => return self.submit_profile(profile),
            Command::TipsGenerated { ticket, tips } => {
                self.tips_generated(ticket, tips);
                None
            }
            Command::GenerationFailed { ticket, message } => {
                self.generation_failed(ticket, message);
                None
            }
            Command::RetryGeneration => self.retry_generation(),
            Command::SelectTip(tip) => {
                self.select_tip(tip);
                None
            }
            Command::RequestFavoritesView => {
                self.request_favorites_view();
                None
            }
            Command::RequestBoardView => self.request_board_view(),
            Command::BackFromDetails => self.back_from_details(),
            Command::ToggleFavorite(tip) => {
                self.toggle_favorite(&tip);
                None
            }
            Command::UpdateTip(tip) => {
                self.update_tip(tip);
                None
            }
            Command::ResetTips => self.reset_tips(),
            Command::ResetProfile => {
                self.reset_profile();
                None
            }
            Command::ResetAll => {
                self.reset_all();
                None
            }
        };
        Ok(ticket)
    }

    // ------------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------------

    pub fn submit_profile(&mut self, profile: Profile) -> Result<Option<GenerationTicket>, ValidationError> {
        profile.validate()?;

        self.store.save_profile(&profile);
        self.state.user_profile = Some(profile);

        let ticket = if self.state.current_tips.is_empty() {
            // A new profile is a new entry event; any older call is now stale.
            self.invalidate_generation();
            self.enter(WorkflowStep::TipsGeneration)
        } else {
            self.enter(WorkflowStep::TipsDisplay);
            self.reconcile_goals()
        };
        self.persist_snapshot();
        Ok(ticket)
    }

    /// Reset the board when the displayed tips were generated for a
    /// different goal set than the current profile's.
    pub fn reconcile_goals(&mut self) -> Option<GenerationTicket> {
        if self.state.current_step != WorkflowStep::TipsDisplay {
            return None;
        }
        let profile = self.state.user_profile.as_ref()?;
        let first = self.state.current_tips.first()?;

        let generated_for = first
            .generated_for
            .as_ref()
            .map(Profile::goal_signature)
            .unwrap_or_default();
        let current = profile.goal_signature();
        if generated_for == current {
            return None;
        }

        tracing::info!(
            "Goals changed ([{}] -> [{}]), regenerating tips",
            generated_for,
            current
        );
        self.reset_tips()
    }

    // ------------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------------

    pub fn tips_generated(&mut self, ticket: u64, tips: Vec<Tip>) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        tracing::info!("Committing {} generated tips", tips.len());
        self.state.current_tips = tips;
        self.state.error = None;
        self.enter(WorkflowStep::TipsDisplay);
        true
    }

    pub fn generation_failed(&mut self, ticket: u64, message: String) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        tracing::warn!("Tip generation failed: {}", message);
        self.state.error = Some(message);
        true
    }

    /// Run the generation entry hook again after a failure.
    pub fn retry_generation(&mut self) -> Option<GenerationTicket> {
        if self.state.current_step != WorkflowStep::TipsGeneration {
            return None;
        }
        self.state.error = None;
        self.on_enter_generation()
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    pub fn select_tip(&mut self, tip: Tip) {
        self.state.selected_tip = Some(tip);
        self.enter(WorkflowStep::TipDetails);
    }

    pub fn request_favorites_view(&mut self) {
        self.enter(WorkflowStep::Favorites);
    }

    pub fn request_board_view(&mut self) -> Option<GenerationTicket> {
        let step = if !self.state.current_tips.is_empty() {
            WorkflowStep::TipsDisplay
        } else if self.state.user_profile.is_some() {
            WorkflowStep::TipsGeneration
        } else {
            WorkflowStep::ProfileSetup
        };
        self.enter(step)
    }

    pub fn back_from_details(&mut self) -> Option<GenerationTicket> {
        self.request_board_view()
    }

    // ------------------------------------------------------------------------
    // Tips
    // ------------------------------------------------------------------------

    pub fn toggle_favorite(&mut self, tip: &Tip) {
        let flagged = !tip.is_favorite;
        if flagged {
            let favorite = tip.with_favorite(true);
            if !self.state.favorite_tips.iter().any(|t| t.id == tip.id) {
                self.state.favorite_tips.push(favorite.clone());
            }
            for entry in self.state.current_tips.iter_mut().filter(|t| t.id == tip.id) {
                *entry = favorite.clone();
            }
        } else {
            self.state.favorite_tips.retain(|t| t.id != tip.id);
            for entry in self.state.current_tips.iter_mut().filter(|t| t.id == tip.id) {
                entry.is_favorite = false;
            }
        }
        if let Some(selected) = self.state.selected_tip.as_mut().filter(|t| t.id == tip.id) {
            selected.is_favorite = flagged;
        }

        tracing::debug!("Tip {} favorite={}", tip.id, flagged);
        self.store.save_favorites(&self.state.favorite_tips);
        self.persist_snapshot();
    }

    /// Replace the tip with the same id wherever it appears.
    pub fn update_tip(&mut self, tip: Tip) {
        let collections = [&mut self.state.current_tips, &mut self.state.favorite_tips];
        for collection in collections {
            for entry in collection.iter_mut().filter(|t| t.id == tip.id) {
                *entry = tip.clone();
            }
        }
        if let Some(selected) = self.state.selected_tip.as_mut().filter(|t| t.id == tip.id) {
            *selected = tip.clone();
        }
        if tip.is_favorite {
            self.store.save_favorites(&self.state.favorite_tips);
        }
    }

    // ------------------------------------------------------------------------
    // Resets
    // ------------------------------------------------------------------------

    pub fn reset_tips(&mut self) -> Option<GenerationTicket> {
        self.state.current_tips.clear();
        self.state.selected_tip = None;
        self.state.error = None;
        self.invalidate_generation();
        self.store.forget(&[StorageKey::AppState]);

        if self.state.user_profile.is_some() {
            self.enter(WorkflowStep::TipsGeneration)
        } else {
            None
        }
    }

    pub fn reset_profile(&mut self) {
        self.state.user_profile = None;
        self.state.current_tips.clear();
        self.state.selected_tip = None;
        self.state.error = None;
        self.invalidate_generation();
        self.store.forget(&[StorageKey::UserProfile, StorageKey::AppState]);
        self.enter(WorkflowStep::ProfileSetup);
    }

    pub fn reset_all(&mut self) {
        tracing::info!("Resetting all state");
        self.state = AppState::default();
        self.in_flight = None;
        self.store.erase_all();
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn enter(&mut self, step: WorkflowStep) -> Option<GenerationTicket> {
        if self.state.current_step != step {
            tracing::debug!("Workflow {} -> {}", self.state.current_step, step);
        }
        self.state.current_step = step;
        if step == WorkflowStep::TipsGeneration {
            self.on_enter_generation()
        } else {
            None
        }
    }

    fn on_enter_generation(&mut self) -> Option<GenerationTicket> {
        if !self.state.current_tips.is_empty() {
            return None;
        }
        let profile = self.state.user_profile.clone()?;
        if let Some(id) = self.in_flight {
            tracing::debug!("Generation {} already outstanding, not starting another", id);
            return None;
        }

        self.next_ticket += 1;
        let id = self.next_ticket;
        self.in_flight = Some(id);
        self.state.is_loading = true;
        tracing::info!("Starting tip generation {}", id);
        Some(GenerationTicket { id, profile })
    }

    /// Clear the in-flight marker if `ticket` owns it. Returns whether the
    /// result should be committed.
    fn settle(&mut self, ticket: u64) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!("Ignoring result of stale generation {}", ticket);
            return false;
        }
        self.in_flight = None;
        self.state.is_loading = false;
        if self.state.current_step != WorkflowStep::TipsGeneration {
            tracing::debug!(
                "Ignoring generation {} result, workflow moved on to {}",
                ticket,
                self.state.current_step
            );
            return false;
        }
        true
    }

    fn invalidate_generation(&mut self) {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!("Abandoning generation {}", id);
        }
        self.state.is_loading = false;
    }

    fn persist_snapshot(&self) {
        self.store.save_snapshot(&StateSnapshot {
            user_profile: self.state.user_profile.clone(),
            favorite_tips: self.state.favorite_tips.clone(),
            current_step: self.state.current_step,
        });
    }
}

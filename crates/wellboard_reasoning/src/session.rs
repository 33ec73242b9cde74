//! `WellnessSession` drives a [`Workflow`] against a [`TipGenerator`].
//!
//! Commands are applied synchronously. When a command hands back a
//! generation ticket the call is spawned on the runtime and its outcome is
//! queued; outcomes are applied on the next [`poll`] or
//! [`wait_for_generation`], where the workflow drops any that went stale.
//!
//! [`poll`]: WellnessSession::poll
//! [`wait_for_generation`]: WellnessSession::wait_for_generation

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use wellboard_core::{AppState, Command, GenerationTicket, SessionStore, Tip, ValidationError, Workflow};

use crate::orchestrator::{GenerationError, TipGenerator};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no tip is selected")]
    NoSelection,

    #[error("no profile to tailor the details for")]
    NoProfile,

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

struct Outcome {
    ticket: u64,
    result: Result<Vec<Tip>, String>,
}

pub struct WellnessSession {
    workflow: Workflow,
    generator: Arc<TipGenerator>,
    outcomes_tx: mpsc::UnboundedSender<Outcome>,
    outcomes_rx: mpsc::UnboundedReceiver<Outcome>,
}

impl WellnessSession {
    pub fn new(store: Arc<dyn SessionStore>, generator: Arc<TipGenerator>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            workflow: Workflow::new(store),
            generator,
            outcomes_tx,
            outcomes_rx,
        }
    }

    /// Hydrate from storage; starts generation when a profile was restored.
    pub fn start(&mut self) {
        if let Some(ticket) = self.workflow.hydrate() {
            self.launch(ticket);
        }
    }

    pub fn state(&self) -> &AppState {
        self.workflow.state()
    }

    pub fn is_generating(&self) -> bool {
        self.workflow.in_flight().is_some()
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), ValidationError> {
        if let Some(ticket) = self.workflow.dispatch(command)? {
            self.launch(ticket);
        }
        Ok(())
    }

    /// Apply queued outcomes without waiting. Returns how many were applied.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.apply(outcome);
            applied += 1;
        }
        applied
    }

    /// Wait until no generation is outstanding.
    pub async fn wait_for_generation(&mut self) {
        while self.workflow.in_flight().is_some() {
            match self.outcomes_rx.recv().await {
                Some(outcome) => self.apply(outcome),
                None => break,
            }
        }
    }

    /// Fetch the full description and steps for the selected tip and apply
    /// them everywhere the tip appears. Tips that already carry details are
    /// returned as they are.
    pub async fn load_details(&mut self) -> Result<Tip, SessionError> {
        let state = self.workflow.state();
        let tip = state.selected_tip.clone().ok_or(SessionError::NoSelection)?;
        if tip.has_details() {
            return Ok(tip);
        }
        let profile = state
            .user_profile
            .clone()
            .or_else(|| tip.generated_for.clone())
            .ok_or(SessionError::NoProfile)?;

        let detailed = self.generator.generate_detail(&tip, &profile).await?;
        self.workflow.update_tip(detailed.clone());
        Ok(detailed)
    }

    fn launch(&self, ticket: GenerationTicket) {
        let GenerationTicket { id, profile } = ticket;
        let generator = self.generator.clone();
        let handle = tokio::spawn(async move { generator.generate(&profile).await });

        let tx = self.outcomes_tx.clone();
        tokio::spawn(async move {
            let result = handle
                .await
                .map_err(|e| format!("tip generation task failed: {e}"));
            // Receiver lives as long as the session.
            let _ = tx.send(Outcome { ticket: id, result });
        });
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome.result {
            Ok(tips) => {
                self.workflow.tips_generated(outcome.ticket, tips);
            }
            Err(message) => {
                self.workflow.generation_failed(outcome.ticket, message);
            }
        }
    }
}

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Handed out when a fetch is needed, and handed back with its result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTicket {
    id: QuestionSetId,
}

impl LoadTicket {
    pub fn id(&self) -> QuestionSetId {
        self.id
    }

    pub fn path(&self) -> String {
        self.id.path()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadRequest {
    /// The set is already in memory, nothing to fetch.
    AlreadyActive,
    /// A fetch for this set is already in flight.
    AlreadyPending,
    Fetch(LoadTicket),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    /// The result arrived for a set that is no longer wanted and was dropped.
    Stale,
}

impl LoadOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Owns the active question set and the single pending load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionRepository {
    active: Option<QuestionSet>,
    pending: Option<QuestionSetId>,
}

impl QuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository with a set already loaded, used when the payload is available up front.
    pub fn with_set(set: QuestionSet) -> Self {
        Self {
            active: Some(set),
            pending: None,
        }
    }

    pub fn active(&self) -> Option<&QuestionSet> {
        self.active.as_ref()
    }

    pub fn active_id(&self) -> Option<QuestionSetId> {
        self.active.as_ref().map(QuestionSet::id)
    }

    pub fn pending(&self) -> Option<QuestionSetId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn request(&mut self, id: QuestionSetId) -> LoadRequest {
        if self.pending == Some(id) {
            return LoadRequest::AlreadyPending;
        }

        if self.active_id() == Some(id) {
            if let Some(superseded) = self.pending.take() {
                log::debug!("dropping pending load of {} for active {}", superseded, id);
            }
            return LoadRequest::AlreadyActive;
        }

        if let Some(superseded) = self.pending.replace(id) {
            log::debug!("load of {} superseded by {}", superseded, id);
        }
        LoadRequest::Fetch(LoadTicket { id })
    }

    /// Commits a finished load unless a newer request has replaced it. A failed load, or one
    /// without a single category, keeps the previously active set.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: core::result::Result<Vec<QuestionRecord>, LoadError>,
    ) -> Result<LoadOutcome> {
        if self.pending != Some(ticket.id) {
            log::warn!("discarding stale load of {}", ticket.id);
            return Ok(LoadOutcome::Stale);
        }
        self.pending = None;

        let set = QuestionSet::new(ticket.id, result?);
        if set.categories().is_empty() {
            log::warn!("{} has no categories, keeping the current set", ticket.id);
            return Err(GameError::InsufficientCategories);
        }
        log::info!("loaded {} questions from {}", set.len(), ticket.id);
        self.active = Some(set);
        Ok(LoadOutcome::Loaded)
    }
}

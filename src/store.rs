//! Tournament store: where accepted plans are handed over. In-memory implementation included.

use crate::models::{SubmittedRound, SubmittedTournament, TournamentStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use uuid::Uuid;

/// Unique identifier for a stored tournament.
pub type TournamentId = Uuid;

/// Opaque failure of the store, passed through to callers unmodified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for StoreError {}

/// A persisted tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTournament {
    pub id: TournamentId,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: TournamentStatus,
    pub player_count: u32,
    pub allow_underfilled_groups: bool,
    pub rounds: Vec<SubmittedRound>,
}

/// Listing view of a stored tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentIndexEntry {
    pub id: TournamentId,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status: TournamentStatus,
    pub player_count: u32,
}

impl StoredTournament {
    /// New draft from an accepted submission.
    pub fn from_submission(submitted: SubmittedTournament) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submitted.name,
            description: submitted.description,
            start_date: submitted.start_date,
            end_date: submitted.end_date,
            status: TournamentStatus::Draft,
            player_count: submitted.player_count,
            allow_underfilled_groups: submitted.allow_underfilled_groups,
            rounds: submitted.rounds,
        }
    }

    pub fn index_entry(&self) -> TournamentIndexEntry {
        TournamentIndexEntry {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            status: self.status,
            player_count: self.player_count,
        }
    }
}

/// Persistence collaborator. Implementations must be shareable across request handlers.
pub trait TournamentStore: Send + Sync {
    fn insert(&self, submitted: SubmittedTournament) -> Result<StoredTournament, StoreError>;
    fn list(&self) -> Result<Vec<TournamentIndexEntry>, StoreError>;
    /// `Ok(None)` if there is no tournament with this id.
    fn get(&self, id: TournamentId) -> Result<Option<StoredTournament>, StoreError>;
    fn update_status(
        &self,
        id: TournamentId,
        status: TournamentStatus,
    ) -> Result<Option<StoredTournament>, StoreError>;
    /// Returns whether a tournament was removed.
    fn delete(&self, id: TournamentId) -> Result<bool, StoreError>;
}

/// Tournaments kept in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryTournamentStore {
    tournaments: RwLock<HashMap<TournamentId, StoredTournament>>,
}

fn lock_error<T>(_: T) -> StoreError {
    StoreError("lock error".to_string())
}

impl InMemoryTournamentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for InMemoryTournamentStore {
    fn insert(&self, submitted: SubmittedTournament) -> Result<StoredTournament, StoreError> {
        let stored = StoredTournament::from_submission(submitted);
        let mut g = self.tournaments.write().map_err(lock_error)?;
        g.insert(stored.id, stored.clone());
        log::info!("Stored tournament {} ({} in store)", stored.id, g.len());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<TournamentIndexEntry>, StoreError> {
        let g = self.tournaments.read().map_err(lock_error)?;
        let mut entries: Vec<_> = g.values().map(StoredTournament::index_entry).collect();
        entries.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.name.cmp(&b.name)));
        Ok(entries)
    }

    fn get(&self, id: TournamentId) -> Result<Option<StoredTournament>, StoreError> {
        let g = self.tournaments.read().map_err(lock_error)?;
        Ok(g.get(&id).cloned())
    }

    fn update_status(
        &self,
        id: TournamentId,
        status: TournamentStatus,
    ) -> Result<Option<StoredTournament>, StoreError> {
        let mut g = self.tournaments.write().map_err(lock_error)?;
        Ok(g.get_mut(&id).map(|t| {
            t.status = status;
            t.clone()
        }))
    }

    fn delete(&self, id: TournamentId) -> Result<bool, StoreError> {
        let mut g = self.tournaments.write().map_err(lock_error)?;
        Ok(g.remove(&id).is_some())
    }
}

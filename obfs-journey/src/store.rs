//! Journey persistence: the storage codec and the repository seam.
use crate::journey::{ConnectionType, Journey, JourneyId};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// How journeys are addressed in URLs and matched on upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    #[default]
    ById,
    /// Journeys are addressed by connection type, as the first release did.
    ByConnectionType,
}

/// Lookup key for a single journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(JourneyId),
    ConnectionType(ConnectionType),
}

impl Selector {
    #[must_use]
    pub fn matches(&self, journey: &Journey) -> bool {
        match self {
            Self::Id(id) => &journey.id == id,
            Self::ConnectionType(kind) => journey.connection_type == *kind,
        }
    }

    /// Selector identifying `journey` under the given identity mode.
    #[must_use]
    pub fn for_journey(journey: &Journey, mode: IdentityMode) -> Self {
        match mode {
            IdentityMode::ById => Self::Id(journey.id.clone()),
            IdentityMode::ByConnectionType => Self::ConnectionType(journey.connection_type),
        }
    }
}

/// Decode a persisted payload. Absent or undecodable data reads as no journeys.
#[must_use]
pub fn decode_journeys(payload: Option<&str>) -> Vec<Journey> {
    let Some(raw) = payload else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<Journey>>(raw) {
        Ok(journeys) => journeys,
        Err(err) => {
            log::warn!("Discarding unreadable journey payload: {err}");
            Vec::new()
        }
    }
}

/// Serialize the full list after dropping structurally identical duplicates.
///
/// # Errors
///
/// Returns an error if the journeys cannot be serialized.
pub fn encode_journeys(journeys: &[Journey]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&dedupe_journeys(journeys.to_vec()))
}

/// Remove value-identical entries, keeping the first occurrence of each.
#[must_use]
pub fn dedupe_journeys(journeys: Vec<Journey>) -> Vec<Journey> {
    let mut seen = HashSet::with_capacity(journeys.len());
    journeys
        .into_iter()
        .filter(|journey| seen.insert(journey.clone()))
        .collect()
}

/// Repository over the persisted journey list.
/// Platform-specific implementations provide `list` and `write_all`.
pub trait JourneyStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Every persisted journey, in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be reached.
    fn list(&self) -> Result<Vec<Journey>, Self::Error>;

    /// Replace the persisted list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be serialized or written.
    fn write_all(&self, journeys: &[Journey]) -> Result<(), Self::Error>;

    /// First journey matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be reached.
    fn find(&self, selector: &Selector) -> Result<Option<Journey>, Self::Error> {
        Ok(self
            .list()?
            .into_iter()
            .find(|journey| selector.matches(journey)))
    }

    /// Replace the matching journey in place, or append it.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be read or written.
    fn upsert(&self, journey: Journey, mode: IdentityMode) -> Result<(), Self::Error> {
        let selector = Selector::for_journey(&journey, mode);
        let mut journeys = self.list()?;
        match journeys.iter_mut().find(|existing| selector.matches(existing)) {
            Some(existing) => *existing = journey,
            None => journeys.push(journey),
        }
        self.write_all(&journeys)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JourneyStoreError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// In-memory store holding the same serialized payload the browser would.
/// Clones share the payload.
#[derive(Debug, Clone, Default)]
pub struct MemoryJourneyStore {
    payload: Rc<RefCell<Option<String>>>,
}

impl MemoryJourneyStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a raw payload, valid or not.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            payload: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl JourneyStore for MemoryJourneyStore {
    type Error = JourneyStoreError;

    fn list(&self) -> Result<Vec<Journey>, Self::Error> {
        Ok(decode_journeys(self.payload.borrow().as_deref()))
    }

    fn write_all(&self, journeys: &[Journey]) -> Result<(), Self::Error> {
        let encoded = encode_journeys(journeys)?;
        self.payload.replace(Some(encoded));
        Ok(())
    }
}

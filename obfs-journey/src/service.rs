//! Journey lifecycle: creating, resuming and stepping journeys.
use crate::config::WizardConfig;
use crate::journey::{ConnectionType, Journey, JourneyId, Step};
use crate::store::{IdentityMode, JourneyStore, Selector};
use std::cell::Cell;

/// Source of fresh journey identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> JourneyId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> JourneyId {
        JourneyId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `journey-1`, `journey-2`, ... identifiers.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: Cell<u64>,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> JourneyId {
        let next = self.issued.get().saturating_add(1);
        self.issued.set(next);
        JourneyId::new(format!("journey-{next}"))
    }
}

/// Journey lifecycle and content resolution over a journey store.
pub struct JourneyService<S, G = UuidGenerator>
where
    S: JourneyStore,
    G: IdGenerator,
{
    store: S,
    ids: G,
    config: WizardConfig,
}

impl<S> JourneyService<S, UuidGenerator>
where
    S: JourneyStore,
{
    pub fn new(store: S, config: WizardConfig) -> Self {
        Self::with_ids(store, UuidGenerator, config)
    }
}

impl<S, G> JourneyService<S, G>
where
    S: JourneyStore,
    G: IdGenerator,
{
    pub const fn with_ids(store: S, ids: G, config: WizardConfig) -> Self {
        Self { store, ids, config }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Every journey in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn journeys(&self) -> Result<Vec<Journey>, S::Error> {
        self.store.list()
    }

    /// Interpret a URL journey reference under the configured identity mode.
    /// Legacy references that are not a connection type select nothing.
    #[must_use]
    pub fn selector_for(&self, reference: &str) -> Option<Selector> {
        match self.config.identity_mode {
            IdentityMode::ById => Some(Selector::Id(JourneyId::new(reference))),
            IdentityMode::ByConnectionType => {
                reference.parse().ok().map(Selector::ConnectionType)
            }
        }
    }

    /// URL reference for `journey` under the configured identity mode.
    #[must_use]
    pub fn journey_ref(&self, journey: &Journey) -> String {
        match self.config.identity_mode {
            IdentityMode::ById => journey.id.to_string(),
            IdentityMode::ByConnectionType => journey.connection_type.to_string(),
        }
    }

    /// Look up a journey by URL reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn find(&self, reference: &str) -> Result<Option<Journey>, S::Error> {
        match self.selector_for(reference) {
            Some(selector) => self.store.find(&selector),
            None => Ok(None),
        }
    }

    /// Resume the journey for `connection_type`, or start one on its first step.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the new journey cannot be written.
    pub fn initialise_journey(&self, connection_type: ConnectionType) -> Result<Journey, S::Error> {
        if let Some(existing) = self
            .store
            .find(&Selector::ConnectionType(connection_type))?
        {
            return Ok(existing);
        }

        let journey = Journey::new(self.ids.next_id(), connection_type);
        self.store
            .upsert(journey.clone(), self.config.identity_mode)?;
        log::debug!(
            "Started {} journey {} at {}",
            journey.connection_type,
            journey.id,
            journey.step
        );
        Ok(journey)
    }

    /// Record `step` as current for the referenced journey. Unknown references
    /// are ignored and yield `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn set_step(&self, reference: &str, step: Step) -> Result<Option<Journey>, S::Error> {
        let Some(journey) = self.find(reference)? else {
            return Ok(None);
        };
        let updated = journey.with_step(step);
        self.store
            .upsert(updated.clone(), self.config.identity_mode)?;
        Ok(Some(updated))
    }
}

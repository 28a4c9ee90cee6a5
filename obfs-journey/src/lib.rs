//! Open Banking Connection Journeys
//!
//! Platform-agnostic core of the connection wizard: journey records, their
//! persisted encoding, the lifecycle service and the step content resolver.
//! Browser storage lives in `obfs-web`; this crate only defines the seam.

pub mod config;
pub mod content;
pub mod journey;
pub mod paths;
pub mod routing;
pub mod service;
pub mod store;

pub use config::{
    BankCopy, BanksCopy, BenefitsCopy, DEFAULT_STORAGE_KEY, HomeCopy, PanelCopy, WizardConfig,
    WizardCopy,
};
pub use content::{BankLink, BanksContent, Cta, PanelContent, StepContent};
pub use journey::{ConnectionType, Journey, JourneyId, ParseEnumError, Step};
pub use paths::{CONNECTION_PREFIX, HOME_PATH, START_PATH, entry_path, step_path};
pub use routing::{ResumeEntry, StepOutcome};
pub use service::{IdGenerator, JourneyService, SequentialIds, UuidGenerator};
pub use store::{
    IdentityMode, JourneyStore, JourneyStoreError, MemoryJourneyStore, Selector, decode_journeys,
    dedupe_journeys, encode_journeys,
};

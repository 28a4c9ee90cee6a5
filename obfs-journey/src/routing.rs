//! Navigation decisions for the wizard routes.
//!
//! Storage failures never reach the UI: they are logged and the user is sent
//! somewhere safe instead.
use crate::content::StepContent;
use crate::journey::{ConnectionType, Step};
use crate::paths::{HOME_PATH, START_PATH, step_path};
use crate::service::{IdGenerator, JourneyService};
use crate::store::JourneyStore;
use serde::Serialize;

/// What a step route should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Render(StepContent),
    Redirect(String),
}

/// One in-progress journey on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeEntry {
    pub connection_type: ConnectionType,
    pub step: Step,
    pub link: String,
}

impl<S, G> JourneyService<S, G>
where
    S: JourneyStore,
    G: IdGenerator,
{
    /// Where the entry route redirects once the journey is initialised or resumed.
    /// Unknown connection types start an affordability journey.
    #[must_use]
    pub fn entry_redirect(&self, connection_type: Option<&str>) -> String {
        let connection_type = ConnectionType::from_param_or_default(connection_type);
        match self.initialise_journey(connection_type) {
            Ok(journey) => step_path(&self.journey_ref(&journey), journey.step),
            Err(err) => {
                log::error!("Could not start {connection_type} journey: {err}");
                HOME_PATH.to_string()
            }
        }
    }

    /// Resolve a step page, or redirect to the start of the wizard when there is
    /// nothing to show.
    #[must_use]
    pub fn step_outcome(&self, step: Step, reference: Option<&str>) -> StepOutcome {
        match self.resolve(step, reference) {
            Ok(Some(content)) => StepOutcome::Render(content),
            Ok(None) => StepOutcome::Redirect(START_PATH.to_string()),
            Err(err) => {
                log::error!("Could not resolve {step} content: {err}");
                StepOutcome::Redirect(START_PATH.to_string())
            }
        }
    }

    /// Resume links for every stored journey.
    #[must_use]
    pub fn resume_entries(&self) -> Vec<ResumeEntry> {
        let journeys = self.journeys().unwrap_or_else(|err| {
            log::error!("Could not list journeys: {err}");
            Vec::new()
        });
        journeys
            .iter()
            .map(|journey| ResumeEntry {
                connection_type: journey.connection_type,
                step: journey.step,
                link: step_path(&self.journey_ref(journey), journey.step),
            })
            .collect()
    }
}

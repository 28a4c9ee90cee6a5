//! Step page content. Resolving a step also records it as the journey's current step.
use crate::config::{BankCopy, PanelCopy};
use crate::journey::Step;
use crate::paths::step_path;
use crate::service::{IdGenerator, JourneyService};
use crate::store::JourneyStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cta {
    pub title: String,
    pub link: String,
}

/// Title, description and a call to action. Used by the benefits and foo steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelContent {
    pub title: String,
    pub description: String,
    pub cta: Cta,
}

impl PanelContent {
    fn from_copy(copy: &PanelCopy, link: String) -> Self {
        Self {
            title: copy.title.clone(),
            description: copy.description.clone(),
            cta: Cta {
                title: copy.cta.clone(),
                link,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankLink {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BanksContent {
    pub title: String,
    pub list: Vec<BankLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "content", rename_all = "lowercase")]
pub enum StepContent {
    Benefits(PanelContent),
    Foo(PanelContent),
    Banks(BanksContent),
}

impl StepContent {
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Benefits(_) => Step::Benefits,
            Self::Foo(_) => Step::Foo,
            Self::Banks(_) => Step::Banks,
        }
    }
}

impl<S, G> JourneyService<S, G>
where
    S: JourneyStore,
    G: IdGenerator,
{
    /// Content for `step`, dispatching to the per-step resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn resolve(
        &self,
        step: Step,
        reference: Option<&str>,
    ) -> Result<Option<StepContent>, S::Error> {
        Ok(match step {
            Step::Benefits => self.benefits(reference)?.map(StepContent::Benefits),
            Step::Foo => self.foo(reference)?.map(StepContent::Foo),
            Step::Banks => self.banks(reference)?.map(StepContent::Banks),
        })
    }

    /// Benefits copy for the referenced journey's connection type.
    /// Requires the journey to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn benefits(&self, reference: Option<&str>) -> Result<Option<PanelContent>, S::Error> {
        let Some(reference) = reference else {
            return Ok(None);
        };
        let Some(journey) = self.find(reference)? else {
            return Ok(None);
        };
        self.set_step(reference, Step::Benefits)?;

        let copy = self
            .config()
            .copy
            .benefits
            .for_connection(journey.connection_type);
        Ok(Some(PanelContent::from_copy(
            copy,
            step_path(reference, Step::Banks),
        )))
    }

    /// Bank list for the referenced journey.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn banks(&self, reference: Option<&str>) -> Result<Option<BanksContent>, S::Error> {
        let Some(reference) = self.step_reference(reference)? else {
            return Ok(None);
        };
        self.set_step(reference, Step::Banks)?;

        let copy = &self.config().copy.banks;
        let list = copy
            .banks
            .iter()
            .map(|BankCopy { name, step }| BankLink {
                name: name.clone(),
                link: step_path(reference, *step),
            })
            .collect();
        Ok(Some(BanksContent {
            title: copy.title.clone(),
            list,
        }))
    }

    /// Foo panel for the referenced journey.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn foo(&self, reference: Option<&str>) -> Result<Option<PanelContent>, S::Error> {
        let Some(reference) = self.step_reference(reference)? else {
            return Ok(None);
        };
        self.set_step(reference, Step::Foo)?;

        Ok(Some(PanelContent::from_copy(
            &self.config().copy.foo,
            step_path(reference, Step::Benefits),
        )))
    }

    // Banks and foo only need a reference unless strict lookup is configured.
    fn step_reference<'r>(&self, reference: Option<&'r str>) -> Result<Option<&'r str>, S::Error> {
        let Some(reference) = reference else {
            return Ok(None);
        };
        if self.config().strict_step_lookup && self.find(reference)?.is_none() {
            return Ok(None);
        }
        Ok(Some(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crate::journey::ConnectionType;
    use crate::service::SequentialIds;
    use crate::store::MemoryJourneyStore;

    fn service(config: WizardConfig) -> JourneyService<MemoryJourneyStore, SequentialIds> {
        JourneyService::with_ids(MemoryJourneyStore::new(), SequentialIds::new(), config)
    }

    #[test]
    fn benefits_needs_a_known_journey() {
        let svc = service(WizardConfig::default());
        assert_eq!(svc.benefits(None).unwrap(), None);
        assert_eq!(svc.benefits(Some("journey-9")).unwrap(), None);
    }

    #[test]
    fn benefits_variant_follows_connection_type() {
        let svc = service(WizardConfig::default());
        let offers = svc.initialise_journey(ConnectionType::Offers).unwrap();
        let content = svc.benefits(Some(offers.id.as_str())).unwrap().unwrap();
        assert_eq!(content.title, "Offers");
        assert_eq!(content.description, "Offers are a-mazing");
        assert_eq!(content.cta.title, "Go to banks");
        assert_eq!(content.cta.link, "/open-banking/connection/journey-1/banks");
        assert_eq!(svc.find("journey-1").unwrap().unwrap().step, Step::Benefits);
    }

    #[test]
    fn banks_and_foo_resolve_for_unknown_journeys_by_default() {
        let svc = service(WizardConfig::default());
        let banks = svc.banks(Some("ghost")).unwrap().unwrap();
        assert_eq!(banks.title, "Here is a list of banks");
        let names: Vec<_> = banks.list.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["HSBC", "RBS"]);
        assert!(banks.list.iter().all(|b| b.link == "/open-banking/connection/ghost/banks"));

        let foo = svc.foo(Some("ghost")).unwrap().unwrap();
        assert_eq!(foo.cta.link, "/open-banking/connection/ghost/benefits");
        assert!(svc.journeys().unwrap().is_empty());
    }

    #[test]
    fn strict_lookup_rejects_unknown_journeys() {
        let svc = service(WizardConfig {
            strict_step_lookup: true,
            ..WizardConfig::default()
        });
        assert_eq!(svc.banks(Some("ghost")).unwrap(), None);
        assert_eq!(svc.foo(Some("ghost")).unwrap(), None);

        let journey = svc.initialise_journey(ConnectionType::Affordability).unwrap();
        assert!(svc.foo(Some(journey.id.as_str())).unwrap().is_some());
    }

    #[test]
    fn resolve_dispatches_and_tags_step() {
        let svc = service(WizardConfig::default());
        let journey = svc.initialise_journey(ConnectionType::Affordability).unwrap();
        for step in Step::ALL {
            let content = svc.resolve(step, Some(journey.id.as_str())).unwrap().unwrap();
            assert_eq!(content.step(), step);
            assert_eq!(svc.find(journey.id.as_str()).unwrap().unwrap().step, step);
        }
        assert_eq!(svc.resolve(Step::Foo, None).unwrap(), None);
    }
}

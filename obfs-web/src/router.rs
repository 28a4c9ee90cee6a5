use obfs_journey::Step;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/open-banking/connection")]
    EntryDefault,
    #[at("/open-banking/connection/:connection_type")]
    Entry { connection_type: String },
    #[at("/open-banking/connection/:journey_ref/benefits")]
    Benefits { journey_ref: String },
    #[at("/open-banking/connection/:journey_ref/foo")]
    Foo { journey_ref: String },
    #[at("/open-banking/connection/:journey_ref/banks")]
    Banks { journey_ref: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub fn for_step(journey_ref: &str, step: Step) -> Self {
        let journey_ref = journey_ref.to_string();
        match step {
            Step::Benefits => Self::Benefits { journey_ref },
            Step::Foo => Self::Foo { journey_ref },
            Step::Banks => Self::Banks { journey_ref },
        }
    }

    /// Step page and journey reference, for step routes.
    #[must_use]
    pub fn step(&self) -> Option<(Step, &str)> {
        match self {
            Self::Benefits { journey_ref } => Some((Step::Benefits, journey_ref)),
            Self::Foo { journey_ref } => Some((Step::Foo, journey_ref)),
            Self::Banks { journey_ref } => Some((Step::Banks, journey_ref)),
            Self::Home | Self::EntryDefault | Self::Entry { .. } | Self::NotFound => None,
        }
    }

    /// Route for an in-app path produced by the journey service.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}

//! Wizard configuration and page copy, compiled in from the static data asset.
use crate::journey::{ConnectionType, Step};
use crate::store::IdentityMode;
use serde::{Deserialize, Serialize};

const DEFAULT_WIZARD_DATA: &str = include_str!("../../obfs-web/static/assets/data/wizard.json");

pub const DEFAULT_STORAGE_KEY: &str = "obfsConnectionJourneys";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub identity_mode: IdentityMode,
    /// Require a known journey before banks/foo content resolves.
    #[serde(default)]
    pub strict_step_lookup: bool,
    #[serde(default)]
    pub copy: WizardCopy,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            identity_mode: IdentityMode::default(),
            strict_step_lookup: false,
            copy: WizardCopy::default(),
        }
    }
}

impl WizardConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_WIZARD_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Parse a wizard config from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a wizard config.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Title, body and call-to-action label for a single-panel step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PanelCopy {
    pub title: String,
    pub description: String,
    pub cta: String,
}

impl PanelCopy {
    fn new(title: &str, description: &str, cta: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            cta: cta.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsCopy {
    pub affordability: PanelCopy,
    pub offers: PanelCopy,
}

impl BenefitsCopy {
    #[must_use]
    pub const fn for_connection(&self, connection_type: ConnectionType) -> &PanelCopy {
        match connection_type {
            ConnectionType::Affordability => &self.affordability,
            ConnectionType::Offers => &self.offers,
        }
    }
}

impl Default for BenefitsCopy {
    fn default() -> Self {
        Self {
            affordability: PanelCopy::new(
                "Affordability",
                "Affordability report is so sweeeeeet",
                "Go to banks",
            ),
            offers: PanelCopy::new("Offers", "Offers are a-mazing", "Go to banks"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankCopy {
    pub name: String,
    /// Step the bank entry links to.
    #[serde(default = "default_bank_step")]
    pub step: Step,
}

const fn default_bank_step() -> Step {
    Step::Banks
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanksCopy {
    pub title: String,
    #[serde(default)]
    pub banks: Vec<BankCopy>,
}

impl Default for BanksCopy {
    fn default() -> Self {
        let bank = |name: &str| BankCopy {
            name: name.to_string(),
            step: default_bank_step(),
        };
        Self {
            title: "Here is a list of banks".to_string(),
            banks: vec![bank("HSBC"), bank("RBS")],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCopy {
    pub title: String,
    pub affordability_link: String,
    pub offers_link: String,
    pub resume_link: String,
}

impl HomeCopy {
    #[must_use]
    pub fn entry_label(&self, connection_type: ConnectionType) -> &str {
        match connection_type {
            ConnectionType::Affordability => &self.affordability_link,
            ConnectionType::Offers => &self.offers_link,
        }
    }
}

impl Default for HomeCopy {
    fn default() -> Self {
        Self {
            title: "Home".to_string(),
            affordability_link: "Wanna do some affordability stuff?".to_string(),
            offers_link: "Wanna do some offery stuff?".to_string(),
            resume_link: "Get back to it!".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardCopy {
    #[serde(default)]
    pub home: HomeCopy,
    #[serde(default)]
    pub benefits: BenefitsCopy,
    #[serde(default = "default_foo_copy")]
    pub foo: PanelCopy,
    #[serde(default)]
    pub banks: BanksCopy,
    #[serde(default = "default_go_home")]
    pub go_home: String,
    #[serde(default = "default_loading")]
    pub loading: String,
}

impl Default for WizardCopy {
    fn default() -> Self {
        Self {
            home: HomeCopy::default(),
            benefits: BenefitsCopy::default(),
            foo: default_foo_copy(),
            banks: BanksCopy::default(),
            go_home: default_go_home(),
            loading: default_loading(),
        }
    }
}

fn default_foo_copy() -> PanelCopy {
    PanelCopy::new("Foo", "Whoa, this is new.", "Go to benefits")
}

fn default_go_home() -> String {
    "Go home".to_string()
}

fn default_loading() -> String {
    "loading...".to_string()
}

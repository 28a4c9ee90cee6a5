//! Journey records and the two enums that drive the wizard.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which wizard variant a journey runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    #[default]
    Affordability,
    Offers,
}

impl ConnectionType {
    pub const ALL: [Self; 2] = [Self::Affordability, Self::Offers];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Affordability => "affordability",
            Self::Offers => "offers",
        }
    }

    /// Step a freshly created journey of this type starts on.
    #[must_use]
    pub const fn first_step(self) -> Step {
        match self {
            Self::Affordability => Step::Benefits,
            Self::Offers => Step::Foo,
        }
    }

    /// Parse a route parameter, falling back to `affordability` when the value
    /// is missing or not a known connection type.
    #[must_use]
    pub fn from_param_or_default(param: Option<&str>) -> Self {
        param.and_then(|p| p.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl FromStr for ConnectionType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "affordability" => Ok(Self::Affordability),
            "offers" => Ok(Self::Offers),
            other => Err(ParseEnumError {
                kind: "connection type",
                value: other.to_string(),
            }),
        }
    }
}

/// One page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Benefits,
    Foo,
    Banks,
}

impl Step {
    pub const ALL: [Self; 3] = [Self::Benefits, Self::Foo, Self::Banks];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Benefits => "benefits",
            Self::Foo => "foo",
            Self::Banks => "banks",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "benefits" => Ok(Self::Benefits),
            "foo" => Ok(Self::Foo),
            "banks" => Ok(Self::Banks),
            other => Err(ParseEnumError {
                kind: "step",
                value: other.to_string(),
            }),
        }
    }
}

/// Opaque journey identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JourneyId(String);

impl JourneyId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JourneyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user's progress through the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "JourneyRecord")]
pub struct Journey {
    pub id: JourneyId,
    pub connection_type: ConnectionType,
    pub step: Step,
}

impl Journey {
    #[must_use]
    pub fn new(id: JourneyId, connection_type: ConnectionType) -> Self {
        Self {
            id,
            connection_type,
            step: connection_type.first_step(),
        }
    }

    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.step = step;
        self
    }
}

// Records written before journeys carried an id are keyed by their connection
// type, so legacy resume links keep resolving.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JourneyRecord {
    #[serde(default)]
    id: Option<JourneyId>,
    connection_type: ConnectionType,
    step: Step,
}

impl From<JourneyRecord> for Journey {
    fn from(record: JourneyRecord) -> Self {
        let id = record
            .id
            .unwrap_or_else(|| JourneyId::new(record.connection_type.as_str()));
        Self {
            id,
            connection_type: record.connection_type,
            step: record.step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_steps_follow_connection_type() {
        assert_eq!(ConnectionType::Affordability.first_step(), Step::Benefits);
        assert_eq!(ConnectionType::Offers.first_step(), Step::Foo);
    }

    #[test]
    fn route_params_fall_back_to_affordability() {
        assert_eq!(
            ConnectionType::from_param_or_default(Some("offers")),
            ConnectionType::Offers
        );
        assert_eq!(
            ConnectionType::from_param_or_default(Some("mortgages")),
            ConnectionType::Affordability
        );
        assert_eq!(
            ConnectionType::from_param_or_default(None),
            ConnectionType::Affordability
        );
    }

    #[test]
    fn parse_errors_name_the_value() {
        let err = "quux".parse::<Step>().unwrap_err();
        assert_eq!(err.to_string(), "unknown step: quux");
        for step in Step::ALL {
            assert_eq!(step.as_str().parse::<Step>().unwrap(), step);
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let journey = Journey::new(JourneyId::new("j-1"), ConnectionType::Offers);
        let json = serde_json::to_string(&journey).unwrap();
        assert_eq!(
            json,
            r#"{"id":"j-1","connectionType":"offers","step":"foo"}"#
        );
        let back: Journey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, journey);
    }

    #[test]
    fn legacy_records_take_connection_type_as_id() {
        let legacy: Journey =
            serde_json::from_str(r#"{"connectionType":"affordability","step":"banks"}"#).unwrap();
        assert_eq!(legacy.id.as_str(), "affordability");
        assert_eq!(legacy.step, Step::Banks);
    }
}

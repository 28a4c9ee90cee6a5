use anyhow::Result;

use crate::logic::journeys;
use crate::logic::walk;

/// A journey scenario. `check` receives the per-iteration seed and fails with
/// a description of the first broken expectation.
#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub check: fn(u64) -> Result<()>,
}

const CATALOG: &[TestScenario] = &[
    TestScenario {
        name: "smoke",
        description: "Affordability journey from entry to the bank list and back home",
        check: journeys::smoke,
    },
    TestScenario {
        name: "idempotent-init",
        description: "Repeated entry visits resume a single journey per connection type",
        check: journeys::idempotent_init,
    },
    TestScenario {
        name: "offers-flow",
        description: "Offers journey starts on foo and links through to offers benefits",
        check: journeys::offers_flow,
    },
    TestScenario {
        name: "unknown-reference",
        description: "Unknown journey references redirect to the start and never write",
        check: journeys::unknown_reference,
    },
    TestScenario {
        name: "strict-lookup",
        description: "Strict step lookup redirects banks and foo for unknown references",
        check: journeys::strict_lookup,
    },
    TestScenario {
        name: "corrupt-storage",
        description: "Unreadable stored data lists as empty and is replaced on next write",
        check: journeys::corrupt_storage,
    },
    TestScenario {
        name: "legacy-storage",
        description: "Records keyed by connection type stay reachable",
        check: journeys::legacy_storage,
    },
    TestScenario {
        name: "random-walk",
        description: "Seeded random navigation keeps storage consistent with a model",
        check: walk::random_walk,
    },
];

#[must_use]
pub fn get_scenario(name: &str) -> Option<TestScenario> {
    CATALOG.iter().find(|scenario| scenario.name == name).copied()
}

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG
        .iter()
        .map(|scenario| (scenario.name, scenario.description))
}

pub fn scenario_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|scenario| scenario.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_names_are_unique_and_resolvable() {
        let names: Vec<_> = scenario_names().collect();
        for name in &names {
            assert_eq!(get_scenario(name).map(|s| s.name), Some(*name));
            assert_eq!(names.iter().filter(|n| *n == name).count(), 1);
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn every_scenario_passes_for_a_fixed_seed() {
        for scenario in CATALOG {
            if let Err(err) = (scenario.check)(1337) {
                panic!("{} failed: {err:#}", scenario.name);
            }
        }
    }
}

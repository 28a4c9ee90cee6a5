//! Deterministic journey scenarios run against the in-memory store.

use anyhow::{Context, Result, bail, ensure};
use obfs_journey::{
    ConnectionType, IdentityMode, Journey, JourneyService, MemoryJourneyStore, START_PATH, Step,
    StepContent, StepOutcome, WizardConfig, decode_journeys, step_path,
};

pub type Service = JourneyService<MemoryJourneyStore>;

#[must_use]
pub fn service_with(store: MemoryJourneyStore, config: WizardConfig) -> Service {
    JourneyService::new(store, config)
}

fn fresh_service() -> Service {
    service_with(MemoryJourneyStore::new(), WizardConfig::default_config())
}

fn only_journey(svc: &Service, connection_type: ConnectionType) -> Result<Journey> {
    let matching: Vec<Journey> = svc
        .journeys()?
        .into_iter()
        .filter(|journey| journey.connection_type == connection_type)
        .collect();
    ensure!(
        matching.len() == 1,
        "expected one {connection_type} journey, found {}",
        matching.len()
    );
    matching
        .into_iter()
        .next()
        .with_context(|| format!("{connection_type} journey missing"))
}

fn rendered(outcome: StepOutcome, step: Step) -> Result<StepContent> {
    match outcome {
        StepOutcome::Render(content) if content.step() == step => Ok(content),
        StepOutcome::Render(content) => bail!("{step} rendered {} content", content.step()),
        StepOutcome::Redirect(target) => bail!("{step} redirected to {target}"),
    }
}

pub fn smoke(_seed: u64) -> Result<()> {
    let svc = fresh_service();

    let target = svc.entry_redirect(Some("affordability"));
    let journey = only_journey(&svc, ConnectionType::Affordability)?;
    ensure!(
        journey.step == Step::Benefits,
        "new affordability journey starts at {}",
        journey.step
    );
    let reference = svc.journey_ref(&journey);
    ensure!(
        target == step_path(&reference, Step::Benefits),
        "entry redirected to {target}"
    );

    let benefits = rendered(
        svc.step_outcome(Step::Benefits, Some(&reference)),
        Step::Benefits,
    )?;
    let StepContent::Benefits(panel) = benefits else {
        bail!("benefits resolved to another step");
    };
    ensure!(
        panel.title == svc.config().copy.benefits.affordability.title,
        "benefits showed '{}' for affordability",
        panel.title
    );
    ensure!(
        panel.cta.link == step_path(&reference, Step::Banks),
        "benefits CTA points at {}",
        panel.cta.link
    );

    rendered(svc.step_outcome(Step::Banks, Some(&reference)), Step::Banks)?;
    let stored = only_journey(&svc, ConnectionType::Affordability)?;
    ensure!(
        stored.step == Step::Banks,
        "visiting banks stored {}",
        stored.step
    );

    let entries = svc.resume_entries();
    ensure!(entries.len() == 1, "home lists {} journeys", entries.len());
    ensure!(entries[0].step == Step::Banks, "home shows {}", entries[0].step);
    ensure!(
        entries[0].link == step_path(&reference, Step::Banks),
        "resume link is {}",
        entries[0].link
    );
    Ok(())
}

pub fn idempotent_init(_seed: u64) -> Result<()> {
    let svc = fresh_service();
    for connection_type in ConnectionType::ALL {
        let first = svc.initialise_journey(connection_type)?;
        for _ in 0..3 {
            let again = svc.initialise_journey(connection_type)?;
            ensure!(
                again == first,
                "re-initialising {connection_type} changed the journey"
            );
        }
        only_journey(&svc, connection_type)?;
    }

    // Progress made before re-entry survives it.
    let journey = only_journey(&svc, ConnectionType::Affordability)?;
    svc.set_step(&svc.journey_ref(&journey), Step::Foo)?;
    let target = svc.entry_redirect(Some("affordability"));
    ensure!(
        target == step_path(&svc.journey_ref(&journey), Step::Foo),
        "re-entry redirected to {target}"
    );
    ensure!(svc.journeys()?.len() == 2, "expected two journeys in total");
    Ok(())
}

pub fn offers_flow(_seed: u64) -> Result<()> {
    let svc = fresh_service();
    let target = svc.entry_redirect(Some("offers"));
    let journey = only_journey(&svc, ConnectionType::Offers)?;
    let reference = svc.journey_ref(&journey);
    ensure!(
        target == step_path(&reference, Step::Foo),
        "offers entry redirected to {target}"
    );

    let StepContent::Foo(foo) = rendered(svc.step_outcome(Step::Foo, Some(&reference)), Step::Foo)?
    else {
        bail!("foo resolved to another step");
    };
    ensure!(
        foo.cta.link == step_path(&reference, Step::Benefits),
        "foo CTA points at {}",
        foo.cta.link
    );

    let StepContent::Benefits(benefits) = rendered(
        svc.step_outcome(Step::Benefits, Some(&reference)),
        Step::Benefits,
    )?
    else {
        bail!("benefits resolved to another step");
    };
    ensure!(
        benefits.title == svc.config().copy.benefits.offers.title,
        "benefits showed '{}' for offers",
        benefits.title
    );
    ensure!(
        only_journey(&svc, ConnectionType::Offers)?.step == Step::Benefits,
        "benefits visit was not recorded"
    );
    Ok(())
}

pub fn unknown_reference(_seed: u64) -> Result<()> {
    let svc = fresh_service();
    svc.initialise_journey(ConnectionType::Affordability)?;
    let before = svc.store().raw();

    let outcome = svc.step_outcome(Step::Benefits, Some("no-such-journey"));
    ensure!(
        outcome == StepOutcome::Redirect(START_PATH.to_string()),
        "unknown benefits reference gave {outcome:?}"
    );
    for step in Step::ALL {
        let outcome = svc.step_outcome(step, None);
        ensure!(
            outcome == StepOutcome::Redirect(START_PATH.to_string()),
            "{step} without a reference gave {outcome:?}"
        );
    }
    ensure!(
        svc.set_step("no-such-journey", Step::Banks)?.is_none(),
        "set_step invented a journey"
    );
    ensure!(
        svc.store().raw() == before,
        "unknown references modified storage"
    );
    Ok(())
}

pub fn strict_lookup(_seed: u64) -> Result<()> {
    let mut config = WizardConfig::default_config();
    config.strict_step_lookup = true;
    let svc = service_with(MemoryJourneyStore::new(), config);

    for step in [Step::Foo, Step::Banks] {
        let outcome = svc.step_outcome(step, Some("no-such-journey"));
        ensure!(
            outcome == StepOutcome::Redirect(START_PATH.to_string()),
            "strict {step} lookup gave {outcome:?}"
        );
    }

    let journey = svc.initialise_journey(ConnectionType::Offers)?;
    rendered(
        svc.step_outcome(Step::Banks, Some(&svc.journey_ref(&journey))),
        Step::Banks,
    )?;
    Ok(())
}

pub fn corrupt_storage(_seed: u64) -> Result<()> {
    let store = MemoryJourneyStore::from_raw("{\"this is\": not json");
    let svc = service_with(store, WizardConfig::default_config());
    ensure!(svc.journeys()?.is_empty(), "corrupt payload listed journeys");
    ensure!(svc.resume_entries().is_empty(), "home listed corrupt journeys");

    let _ = svc.entry_redirect(Some("offers"));
    let raw = svc.store().raw().context("nothing written after entry")?;
    let decoded = decode_journeys(Some(&raw));
    ensure!(decoded.len() == 1, "rewritten payload holds {decoded:?}");
    ensure!(
        decoded[0].connection_type == ConnectionType::Offers,
        "rewritten payload holds {}",
        decoded[0].connection_type
    );
    Ok(())
}

pub fn legacy_storage(_seed: u64) -> Result<()> {
    let raw = r#"[{"connectionType":"offers","step":"banks"},{"connectionType":"affordability","step":"foo"}]"#;

    let mut config = WizardConfig::default_config();
    config.identity_mode = IdentityMode::ByConnectionType;
    let legacy = service_with(MemoryJourneyStore::from_raw(raw), config);
    let target = legacy.entry_redirect(Some("offers"));
    ensure!(
        target == step_path("offers", Step::Banks),
        "legacy offers entry redirected to {target}"
    );
    rendered(
        legacy.step_outcome(Step::Benefits, Some("affordability")),
        Step::Benefits,
    )?;
    ensure!(
        only_journey(&legacy, ConnectionType::Affordability)?.step == Step::Benefits,
        "legacy step update was lost"
    );

    // Records without ids take their connection type as id.
    let by_id = service_with(MemoryJourneyStore::from_raw(raw), WizardConfig::default());
    let found = by_id
        .find("offers")?
        .context("legacy offers record not found by id")?;
    ensure!(found.step == Step::Banks, "legacy record decoded at {}", found.step);
    Ok(())
}

use obfs_journey::{
    ConnectionType, JourneyService, MemoryJourneyStore, SequentialIds, Step, StepContent,
    StepOutcome, WizardConfig,
};

fn service() -> JourneyService<MemoryJourneyStore, SequentialIds> {
    JourneyService::with_ids(
        MemoryJourneyStore::new(),
        SequentialIds::new(),
        WizardConfig::default_config(),
    )
}

#[test]
fn initialisation_is_idempotent_per_connection_type() {
    let svc = service();
    let first = svc
        .initialise_journey(ConnectionType::Affordability)
        .unwrap();
    assert_eq!(first.step, Step::Benefits);

    let again = svc
        .initialise_journey(ConnectionType::Affordability)
        .unwrap();
    assert_eq!(again, first);
    assert_eq!(svc.journeys().unwrap(), vec![first]);
}

#[test]
fn at_most_one_journey_per_connection_type() {
    let svc = service();
    let sequence = [
        ConnectionType::Offers,
        ConnectionType::Affordability,
        ConnectionType::Offers,
        ConnectionType::Offers,
        ConnectionType::Affordability,
    ];
    for kind in sequence {
        svc.initialise_journey(kind).unwrap();
    }

    let journeys = svc.journeys().unwrap();
    assert_eq!(journeys.len(), 2);
    for kind in ConnectionType::ALL {
        assert_eq!(
            journeys.iter().filter(|j| j.connection_type == kind).count(),
            1
        );
    }
}

#[test]
fn set_step_only_touches_the_step() {
    let svc = service();
    let journey = svc.initialise_journey(ConnectionType::Offers).unwrap();

    let updated = svc
        .set_step(journey.id.as_str(), Step::Banks)
        .unwrap()
        .expect("journey exists");
    assert_eq!(updated.id, journey.id);
    assert_eq!(updated.connection_type, ConnectionType::Offers);
    assert_eq!(updated.step, Step::Banks);
    assert_eq!(svc.journeys().unwrap(), vec![updated]);
}

#[test]
fn set_step_on_missing_reference_leaves_storage_alone() {
    let svc = service();
    svc.initialise_journey(ConnectionType::Offers).unwrap();
    let before = svc.journeys().unwrap();

    assert!(svc.set_step("missing", Step::Benefits).unwrap().is_none());
    assert_eq!(svc.journeys().unwrap(), before);
}

#[test]
fn benefits_variants_follow_connection_type() {
    let svc = service();
    assert!(svc.benefits(None).unwrap().is_none());

    let affordability = svc
        .initialise_journey(ConnectionType::Affordability)
        .unwrap();
    let offers = svc.initialise_journey(ConnectionType::Offers).unwrap();

    let a = svc.benefits(Some(affordability.id.as_str())).unwrap().unwrap();
    assert_eq!(a.title, "Affordability");
    assert_eq!(a.description, "Affordability report is so sweeeeeet");

    let o = svc.benefits(Some(offers.id.as_str())).unwrap().unwrap();
    assert_eq!(o.title, "Offers");
    assert_eq!(o.description, "Offers are a-mazing");
}

#[test]
fn affordability_journey_end_to_end() {
    let svc = service();

    let entry = svc.entry_redirect(Some("affordability"));
    assert_eq!(entry, "/open-banking/connection/journey-1/benefits");

    let StepOutcome::Render(StepContent::Benefits(benefits)) =
        svc.step_outcome(Step::Benefits, Some("journey-1"))
    else {
        panic!("benefits should render");
    };
    assert_eq!(benefits.cta.link, "/open-banking/connection/journey-1/banks");

    let StepOutcome::Render(StepContent::Banks(banks)) =
        svc.step_outcome(Step::Banks, Some("journey-1"))
    else {
        panic!("banks should render");
    };
    assert_eq!(banks.list.len(), 2);

    let entries = svc.resume_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].connection_type, ConnectionType::Affordability);
    assert_eq!(entries[0].step, Step::Banks);
    assert_eq!(entries[0].link, "/open-banking/connection/journey-1/banks");

    // Following the resume link lands back on banks without changing anything.
    let resumed = svc.entry_redirect(Some("affordability"));
    assert_eq!(resumed, entries[0].link);
}

#[test]
fn offers_journey_starts_on_foo_and_cycles() {
    let svc = service();
    assert_eq!(
        svc.entry_redirect(Some("offers")),
        "/open-banking/connection/journey-1/foo"
    );

    let StepOutcome::Render(StepContent::Foo(foo)) = svc.step_outcome(Step::Foo, Some("journey-1"))
    else {
        panic!("foo should render");
    };
    assert_eq!(foo.title, "Foo");
    assert_eq!(foo.cta.title, "Go to benefits");
    assert_eq!(foo.cta.link, "/open-banking/connection/journey-1/benefits");

    let outcome = svc.step_outcome(Step::Benefits, Some("journey-1"));
    assert!(matches!(outcome, StepOutcome::Render(StepContent::Benefits(_))));
    assert_eq!(svc.find("journey-1").unwrap().unwrap().step, Step::Benefits);
}

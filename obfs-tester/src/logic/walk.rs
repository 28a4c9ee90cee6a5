//! Seeded random navigation over the wizard, checked against a simple model of
//! what storage should hold after every move.

use anyhow::{Result, bail, ensure};
use obfs_journey::{
    ConnectionType, Journey, JourneyId, MemoryJourneyStore, START_PATH, Step, StepOutcome,
    WizardConfig, decode_journeys, step_path,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use super::journeys::{Service, service_with};

const WALK_LENGTH: usize = 40;

#[derive(Debug, Clone, Copy)]
enum Move {
    /// Entry route, `None` for a missing or unknown connection type.
    Enter(Option<ConnectionType>),
    /// Step page for the stored journey of a connection type.
    Visit(Step, ConnectionType),
    /// Step page for a reference nothing was ever stored under.
    Stray(Step),
}

impl Move {
    fn random(rng: &mut ChaCha8Rng) -> Self {
        let connection_type = ConnectionType::ALL[rng.gen_range(0..ConnectionType::ALL.len())];
        let step = Step::ALL[rng.gen_range(0..Step::ALL.len())];
        match rng.gen_range(0..10) {
            0 => Self::Enter(None),
            1..=3 => Self::Enter(Some(connection_type)),
            4..=8 => Self::Visit(step, connection_type),
            _ => Self::Stray(step),
        }
    }
}

/// Expected stored state: id and current step per connection type.
type Model = HashMap<ConnectionType, (JourneyId, Step)>;

pub fn random_walk(seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let svc = service_with(MemoryJourneyStore::new(), WizardConfig::default_config());
    let mut model = Model::new();

    for index in 0..WALK_LENGTH {
        let next = Move::random(&mut rng);
        log::debug!("walk seed {seed} move {index}: {next:?}");
        apply(&svc, &mut model, next)?;
        check_storage(&svc, &model).map_err(|err| err.context(format!("after {next:?}")))?;
    }
    Ok(())
}

fn apply(svc: &Service, model: &mut Model, next: Move) -> Result<()> {
    match next {
        Move::Enter(connection_type) => {
            let target = svc.entry_redirect(connection_type.map(ConnectionType::as_str));
            let kind = connection_type.unwrap_or_default();
            let journey = single_journey(svc, kind)?;
            let (id, current) = model
                .entry(kind)
                .or_insert_with(|| (journey.id.clone(), kind.first_step()));
            ensure!(journey.id == *id, "{kind} journey id changed on entry");
            ensure!(
                target == step_path(id.as_str(), *current),
                "entry for {kind} redirected to {target}"
            );
        }
        Move::Visit(page, kind) => {
            let Some((id, current)) = model.get_mut(&kind) else {
                return Ok(());
            };
            match svc.step_outcome(page, Some(id.as_str())) {
                StepOutcome::Render(content) if content.step() == page => *current = page,
                other => bail!("visiting {page} for {kind} gave {other:?}"),
            }
        }
        Move::Stray(page) => match (page, svc.step_outcome(page, Some("stray-reference"))) {
            (Step::Benefits, StepOutcome::Redirect(target)) if target == START_PATH => {}
            (Step::Foo | Step::Banks, StepOutcome::Render(content)) if content.step() == page => {}
            (_, other) => bail!("stray {page} visit gave {other:?}"),
        },
    }
    Ok(())
}

fn single_journey(svc: &Service, kind: ConnectionType) -> Result<Journey> {
    let mut matching = svc
        .journeys()?
        .into_iter()
        .filter(|journey| journey.connection_type == kind);
    let Some(journey) = matching.next() else {
        bail!("no {kind} journey after entry");
    };
    ensure!(matching.next().is_none(), "duplicate {kind} journeys");
    Ok(journey)
}

fn check_storage(svc: &Service, model: &Model) -> Result<()> {
    let raw = svc.store().raw();
    let stored = decode_journeys(raw.as_deref());
    ensure!(
        stored.len() == model.len(),
        "storage holds {} journeys, expected {}",
        stored.len(),
        model.len()
    );
    for journey in &stored {
        let Some((id, step)) = model.get(&journey.connection_type) else {
            bail!("unexpected {} journey in storage", journey.connection_type);
        };
        ensure!(
            journey.id == *id,
            "{} journey has id {}",
            journey.connection_type,
            journey.id
        );
        ensure!(
            journey.step == *step,
            "{} journey at {}, expected {step}",
            journey.connection_type,
            journey.step
        );
    }
    Ok(())
}

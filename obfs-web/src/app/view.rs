//! Maps routes onto what the wizard should show.
//!
//! Resolution runs against any journey store so the routing decisions are
//! exercised natively; only the browser app binds it to `localStorage`.
use crate::pages::{
    banks::BanksPage, benefits::BenefitsPage, entry::EntryPage, foo::FooPage, home::HomePage,
    not_found::NotFound,
};
use crate::router::Route;
use obfs_journey::{
    IdGenerator, JourneyService, JourneyStore, ResumeEntry, StepContent, StepOutcome, WizardCopy,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteView {
    Home(Vec<ResumeEntry>),
    /// Entry route: journey is ready, hand over to its step page.
    Entry(Route),
    Step(StepContent),
    Redirect(Route),
    NotFound,
}

/// Resolve `route`, recording step visits in the journey store.
pub fn route_view<S, G>(service: &JourneyService<S, G>, route: &Route) -> RouteView
where
    S: JourneyStore,
    G: IdGenerator,
{
    match route {
        Route::Home => RouteView::Home(service.resume_entries()),
        Route::EntryDefault => RouteView::Entry(Route::from_path(&service.entry_redirect(None))),
        Route::Entry { connection_type } => RouteView::Entry(Route::from_path(
            &service.entry_redirect(Some(connection_type)),
        )),
        Route::Benefits { .. } | Route::Foo { .. } | Route::Banks { .. } => {
            let Some((step, journey_ref)) = route.step() else {
                return RouteView::NotFound;
            };
            match service.step_outcome(step, Some(journey_ref)) {
                StepOutcome::Render(content) => RouteView::Step(content),
                StepOutcome::Redirect(path) => RouteView::Redirect(Route::from_path(&path)),
            }
        }
        Route::NotFound => RouteView::NotFound,
    }
}

#[must_use]
pub fn render_view(view: &RouteView, copy: &WizardCopy) -> Html {
    let go_home = AttrValue::from(copy.go_home.clone());
    match view {
        RouteView::Home(entries) => html! {
            <HomePage copy={copy.home.clone()} entries={entries.clone()} />
        },
        RouteView::Entry(target) => html! {
            <EntryPage target={target.clone()} loading={AttrValue::from(copy.loading.clone())} />
        },
        RouteView::Step(StepContent::Benefits(content)) => html! {
            <BenefitsPage content={content.clone()} {go_home} />
        },
        RouteView::Step(StepContent::Foo(content)) => html! {
            <FooPage content={content.clone()} {go_home} />
        },
        RouteView::Step(StepContent::Banks(content)) => html! {
            <BanksPage content={content.clone()} {go_home} />
        },
        RouteView::Redirect(to) => html! { <Redirect<Route> to={to.clone()} /> },
        RouteView::NotFound => html! { <NotFound {go_home} /> },
    }
}

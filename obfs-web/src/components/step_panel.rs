use crate::components::go_home::GoHome;
use crate::router::Route;
use obfs_journey::PanelContent;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub content: PanelContent,
    pub go_home: AttrValue,
    #[prop_or_default]
    pub testid: AttrValue,
}

/// Title, description and call to action shared by the single-panel steps.
#[function_component(StepPanel)]
pub fn step_panel(p: &Props) -> Html {
    let cta_route = Route::from_path(&p.content.cta.link);
    html! {
        <section class="panel step-panel" data-testid={p.testid.clone()}>
            <GoHome label={p.go_home.clone()} />
            <h1>{ p.content.title.clone() }</h1>
            <p>{ p.content.description.clone() }</p>
            <Link<Route> to={cta_route} classes="cta">{ p.content.cta.title.clone() }</Link<Route>>
        </section>
    }
}

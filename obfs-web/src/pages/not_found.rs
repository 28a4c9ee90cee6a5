use crate::components::go_home::GoHome;
use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub go_home: AttrValue,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    html! {
        <section class="panel not-found" aria-live="assertive" data-testid="not-found-screen">
            <h1>{ "Page not found" }</h1>
            <GoHome label={props.go_home.clone()} />
        </section>
    }
}

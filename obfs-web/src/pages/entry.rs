use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EntryPageProps {
    /// Step page of the initialised or resumed journey.
    pub target: Route,
    pub loading: AttrValue,
}

/// Shown while the entry route hands over to the journey's current step.
#[function_component(EntryPage)]
pub fn entry_page(props: &EntryPageProps) -> Html {
    let navigator = use_navigator();
    {
        let target = props.target.clone();
        use_effect_with(target, move |target| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(target);
            }
            || {}
        });
    }

    html! {
        <div class="loading" data-testid="entry-screen" aria-live="polite">{ props.loading.clone() }</div>
    }
}

use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
}

#[function_component(GoHome)]
pub fn go_home(p: &Props) -> Html {
    html! {
        <nav class="go-home">
            <Link<Route> to={Route::Home}>{ p.label.clone() }</Link<Route>>
        </nav>
    }
}

#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod view;

pub use view::{RouteView, render_view, route_view};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let service = use_memo((), |()| crate::storage::create_web_journey_service());
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let view = {
        let service = service.clone();
        use_memo(route, move |route| route_view(&*service, route))
    };

    html! {
        <main id="main" role="main">
            { render_view(&view, &service.config().copy) }
        </main>
    }
}

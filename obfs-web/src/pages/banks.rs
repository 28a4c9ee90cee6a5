use crate::components::go_home::GoHome;
use crate::router::Route;
use obfs_journey::BanksContent;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BanksPageProps {
    pub content: BanksContent,
    pub go_home: AttrValue,
}

#[function_component(BanksPage)]
pub fn banks_page(props: &BanksPageProps) -> Html {
    let banks = props.content.list.iter().enumerate().map(|(idx, bank)| {
        html! {
            <li key={idx}>
                <Link<Route> to={Route::from_path(&bank.link)}>{ bank.name.clone() }</Link<Route>>
            </li>
        }
    });

    html! {
        <section class="panel banks" data-testid="banks-screen">
            <GoHome label={props.go_home.clone()} />
            <h1>{ props.content.title.clone() }</h1>
            <ul class="bank-list">{ for banks }</ul>
        </section>
    }
}

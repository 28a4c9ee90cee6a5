use futures::executor::block_on;
use obfs_journey::{
    BankLink, BanksContent, ConnectionType, Cta, HomeCopy, PanelContent, ResumeEntry, Step,
    WizardConfig,
};
use obfs_web::pages::{
    banks::{BanksPage, BanksPageProps},
    benefits::{BenefitsPage, BenefitsPageProps},
    entry::{EntryPage, EntryPageProps},
    home::{HomePage, HomePageProps},
    not_found::{NotFound, Props as NotFoundProps},
};
use obfs_web::router::Route;
use yew::prelude::*;
use yew::LocalServerRenderer;
use yew_router::ServerRouter;

#[derive(Properties, PartialEq)]
struct HostProps {
    children: Html,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    html! { <ServerRouter url="/">{ props.children.clone() }</ServerRouter> }
}

fn render(children: Html) -> String {
    block_on(LocalServerRenderer::<Host>::with_props(HostProps { children }).render())
}

#[test]
fn home_page_lists_entry_links_without_journeys() {
    let props = HomePageProps {
        copy: HomeCopy::default(),
        entries: Vec::new(),
    };
    let html = render(html! { <HomePage ..props /> });
    assert!(html.contains("Wanna do some affordability stuff?"));
    assert!(html.contains("href=\"/open-banking/connection/offers\""));
    assert!(!html.contains("resume-list"));
}

#[test]
fn home_page_offers_resume_links() {
    let props = HomePageProps {
        copy: HomeCopy::default(),
        entries: vec![ResumeEntry {
            connection_type: ConnectionType::Affordability,
            step: Step::Banks,
            link: "/open-banking/connection/journey-1/banks".to_string(),
        }],
    };
    let html = render(html! { <HomePage ..props /> });
    assert!(html.contains("resume-list"));
    assert!(html.contains("<strong>banks</strong>"));
    assert!(html.contains("Get back to it!"));
    assert!(html.contains("href=\"/open-banking/connection/journey-1/banks\""));
}

#[test]
fn entry_page_shows_loading_until_redirect() {
    let props = EntryPageProps {
        target: Route::for_step("journey-1", Step::Benefits),
        loading: "loading...".into(),
    };
    let html = render(html! { <EntryPage ..props /> });
    assert!(html.contains("loading..."));
}

#[test]
fn benefits_page_renders_panel() {
    let copy = WizardConfig::default_config().copy;
    let props = BenefitsPageProps {
        content: PanelContent {
            title: copy.benefits.offers.title.clone(),
            description: copy.benefits.offers.description.clone(),
            cta: Cta {
                title: copy.benefits.offers.cta.clone(),
                link: "/open-banking/connection/journey-2/banks".to_string(),
            },
        },
        go_home: copy.go_home.clone().into(),
    };
    let html = render(html! { <BenefitsPage ..props /> });
    assert!(html.contains("benefits-screen"));
    assert!(html.contains("Offers are a-mazing"));
    assert!(html.contains("href=\"/open-banking/connection/journey-2/banks\""));
    assert!(html.contains("href=\"/\""));
}

#[test]
fn banks_page_renders_each_bank() {
    let props = BanksPageProps {
        content: BanksContent {
            title: "Here is a list of banks".to_string(),
            list: ["HSBC", "RBS"]
                .into_iter()
                .map(|name| BankLink {
                    name: name.to_string(),
                    link: "/open-banking/connection/journey-1/banks".to_string(),
                })
                .collect(),
        },
        go_home: "Go home".into(),
    };
    let html = render(html! { <BanksPage ..props /> });
    assert!(html.contains("Here is a list of banks"));
    assert!(html.contains("HSBC"));
    assert!(html.contains("RBS"));
}

#[test]
fn not_found_links_home() {
    let props = NotFoundProps {
        go_home: "Go home".into(),
    };
    let html = render(html! { <NotFound ..props /> });
    assert!(html.contains("not-found-screen"));
    assert!(html.contains("Go home"));
}

use crate::router::Route;
use obfs_journey::{ConnectionType, HomeCopy, ResumeEntry};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub copy: HomeCopy,
    #[prop_or_default]
    pub entries: Vec<ResumeEntry>,
}

/// Landing page: entry links for each connection type plus resume links for
/// journeys already in progress.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let entry_links = ConnectionType::ALL.iter().map(|kind| {
        let to = Route::Entry {
            connection_type: kind.to_string(),
        };
        html! {
            <p key={kind.as_str()}>
                <Link<Route> to={to}>{ props.copy.entry_label(*kind).to_string() }</Link<Route>>
            </p>
        }
    });

    let resume = (!props.entries.is_empty()).then(|| {
        html! {
            <div class="resume-list" data-testid="resume-list">
                { for props.entries.iter().map(|entry| resume_entry(entry, &props.copy.resume_link)) }
            </div>
        }
    });

    html! {
        <section class="panel home" data-testid="home-screen">
            <h1>{ props.copy.title.clone() }</h1>
            { for entry_links }
            { resume.unwrap_or_default() }
        </section>
    }
}

fn resume_entry(entry: &ResumeEntry, resume_label: &str) -> Html {
    html! {
        <p key={entry.connection_type.as_str()}>
            { "You have a " }<strong>{ entry.connection_type.as_str() }</strong>
            { " journey that you left at step " }<strong>{ entry.step.as_str() }</strong>
            <br />
            <Link<Route> to={Route::from_path(&entry.link)}>{ resume_label.to_string() }</Link<Route>>
        </p>
    }
}

use crate::components::step_panel::StepPanel;
use obfs_journey::PanelContent;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BenefitsPageProps {
    pub content: PanelContent,
    pub go_home: AttrValue,
}

#[function_component(BenefitsPage)]
pub fn benefits_page(props: &BenefitsPageProps) -> Html {
    html! {
        <StepPanel content={props.content.clone()} go_home={props.go_home.clone()} testid="benefits-screen" />
    }
}

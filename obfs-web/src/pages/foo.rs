use crate::components::step_panel::StepPanel;
use obfs_journey::PanelContent;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FooPageProps {
    pub content: PanelContent,
    pub go_home: AttrValue,
}

#[function_component(FooPage)]
pub fn foo_page(props: &FooPageProps) -> Html {
    html! {
        <StepPanel content={props.content.clone()} go_home={props.go_home.clone()} testid="foo-screen" />
    }
}

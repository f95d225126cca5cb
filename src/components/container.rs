use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WrappedContainerProps {
    #[prop_or_default]
    pub children: Children,
}

/// Full-height centered column every non-player view sits in.
#[function_component(WrappedContainer)]
pub fn wrapped_container(props: &WrappedContainerProps) -> Html {
    html! {
        <div class="wrapped-container">
            { for props.children.iter() }
        </div>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FatHeading)]
pub fn fat_heading(props: &TextProps) -> Html {
    html! {
        <h1 class={classes!("fat-heading", props.class.clone())}>
            { for props.children.iter() }
        </h1>
    }
}

#[function_component(InfoText)]
pub fn info_text(props: &TextProps) -> Html {
    html! {
        <p class={classes!("info-text", props.class.clone())}>
            { for props.children.iter() }
        </p>
    }
}

#[function_component(MutedText)]
pub fn muted_text(props: &TextProps) -> Html {
    html! {
        <p class={classes!("muted-text", props.class.clone())}>
            { for props.children.iter() }
        </p>
    }
}

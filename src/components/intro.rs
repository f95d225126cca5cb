use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::{FatHeading, InfoText, MutedText, WrappedContainer};

#[derive(Properties, PartialEq)]
pub struct IntroInformationProps {
    pub on_continue: Callback<()>,
    pub on_demo: Callback<()>,
}

#[function_component(IntroInformation)]
pub fn intro_information(props: &IntroInformationProps) -> Html {
    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_| on_continue.emit(()))
    };
    let on_demo = {
        let on_demo = props.on_demo.clone();
        Callback::from(move |_| on_demo.emit(()))
    };

    html! {
        <WrappedContainer>
            <FatHeading>{"Your Wrapped for TikTok"}</FatHeading>
            <InfoText>
                {"Upload your TikTok data export and get a personalized look back at \
                  your year on TikTok: how much you watched, when you watched it, and \
                  what kind of scroller you really are."}
            </InfoText>
            <MutedText>
                {"Everything happens right here in your browser. Your export is never \
                  uploaded anywhere."}
            </MutedText>
            <button class="btn btn-primary" onclick={on_continue}>
                {"Get started"}
                <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
            </button>
            <button class="btn btn-ghost" onclick={on_demo}>
                {"View a demo first"}
            </button>
        </WrappedContainer>
    }
}

use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::{FatHeading, MutedText, WrappedContainer};

#[derive(Properties, PartialEq)]
pub struct SpotifyInfoTextProps {
    pub on_continue: Callback<()>,
}

/// Interstitial shown when the Spotify embed could not be loaded. The
/// Wrapped still works, just without music.
#[function_component(SpotifyInfoText)]
pub fn spotify_info_text(props: &SpotifyInfoTextProps) -> Html {
    let on_continue = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_| on_continue.emit(()))
    };

    html! {
        <WrappedContainer>
            <Icon icon_id={IconId::LucideMusic} width={"32"} height={"32"} />
            <FatHeading>{"Spotify didn't load"}</FatHeading>
            <MutedText class={classes!("max-w-xl")}>
                {"We couldn't reach the Spotify player, so your Wrapped will play \
                  without background music. This usually happens with ad blockers or \
                  restrictive browser settings."}
            </MutedText>
            <button class="btn btn-primary" onclick={on_continue}>
                {"Continue without Spotify"}
                <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
            </button>
        </WrappedContainer>
    }
}

use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::analytics;
use crate::components::{
    FatHeading, FileUpload, InfoText, IntroInformation, MutedText, SpotifyInfoText,
    WrappedContainer, WrappedPlayer,
};
use crate::controller::{run_demo_flow, run_upload_flow, Session, SessionAction};
use crate::spotify;
use crate::stage::Stage;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(Session::default);

    let on_continue = {
        let session = session.clone();
        Callback::from(move |()| {
            session.dispatch(SessionAction::Transition(Stage::Upload));
        })
    };

    let on_demo = {
        let session = session.clone();
        Callback::from(move |()| {
            wasm_bindgen_futures::spawn_local(run_demo_flow(session.clone()));
        })
    };

    let on_file_select = {
        let session = session.clone();
        Callback::from(move |file: web_sys::File| {
            wasm_bindgen_futures::spawn_local(run_upload_flow(session.clone(), file));
        })
    };

    let on_retry = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Transition(Stage::Upload));
            analytics::track_event("try_again");
        })
    };

    let on_play_demo = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Transition(Stage::Play));
            analytics::track_event("play_demo_click");
        })
    };

    let on_skip_spotify = {
        let session = session.clone();
        Callback::from(move |()| {
            session.dispatch(SessionAction::Transition(Stage::Ready));
            analytics::track_event("continue_without_spotify");
        })
    };

    let on_reveal = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Transition(Stage::Play));
            analytics::track_event("play");
        })
    };

    let view = match session.stage {
        Stage::Intro => html! {
            <IntroInformation on_continue={on_continue} on_demo={on_demo} />
        },

        Stage::Upload => html! {
            <FileUpload on_file_select={on_file_select} />
        },

        Stage::Loading => html! {
            <WrappedContainer>
                <span class="spin">
                    <Icon icon_id={IconId::LucideLoader2} width={"32"} height={"32"} />
                </span>
                <InfoText>{"We're preparing your Wrapped..."}</InfoText>
            </WrappedContainer>
        },

        Stage::Error => html! {
            <WrappedContainer>
                <FatHeading>{"Something doesn't look right"}</FatHeading>
                <MutedText>
                    {"We couldn't read your TikTok data export. Please make sure you \
                      selected the correct file format and try again."}
                </MutedText>
                <button class="btn btn-primary" onclick={on_retry}>
                    {"Try again"}
                    <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
                </button>
            </WrappedContainer>
        },

        Stage::Demo => html! {
            <WrappedContainer>
                <FatHeading>{"View Demo Wrapped"}</FatHeading>
                <MutedText class={classes!("max-w-xl")}>
                    {"This demo uses generated sample data and does not represent any \
                      real TikTok user. Reload the page at any time to upload your own \
                      data export instead."}
                </MutedText>
                <button class="btn btn-primary" onclick={on_play_demo}>
                    {"Play demo"}
                    <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
                </button>
            </WrappedContainer>
        },

        Stage::Spotify => html! {
            <SpotifyInfoText on_continue={on_skip_spotify} />
        },

        Stage::Ready => html! {
            <WrappedContainer>
                <FatHeading>{"Your Wrapped is ready!"}</FatHeading>
                <InfoText>
                    {"We've crunched the numbers and found some...interesting insights."}
                    <br />
                    {"Are you ready to see them?"}
                </InfoText>
                <button class="btn btn-primary" onclick={on_reveal}>
                    {"Show me!"}
                    <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
                </button>
            </WrappedContainer>
        },

        // Every path to Play goes through a successful parse, so the slot
        // is populated here; the guard keeps a broken state from panicking.
        Stage::Play => session.wrapped.as_ref().map_or_else(Html::default, |wrapped| {
            html! {
                <WrappedPlayer
                    wrapped={wrapped.clone()}
                    spotify={session.spotify.clone()}
                />
            }
        }),
    };

    html! {
        <div>
            // Hidden mount node the Spotify embed controller binds to.
            <div id={spotify::PLAYER_MOUNT_ID} style="position: fixed; bottom: 0; right: 0;"></div>
            { view }
        </div>
    }
}

//! Page session state and the flows that drive it. The session is a
//! reducer: views dispatch actions, every stage change goes through
//! [`SessionAction::Transition`] so the scroll reset and the `page_*`
//! analytics event cannot be forgotten at a call site.

use std::rc::Rc;

use yew::prelude::*;

use crate::analytics;
use crate::spotify::SpotifyFramePlayer;
use crate::stage::Stage;
use crate::wrapped::{Wrapped, WrappedCreator};

/// Cosmetic pacing so the loading screen is perceptible, not a timing
/// contract. Matches what the flows wait after parsing finishes.
pub const LOADING_PACING_MS: u32 = 5_000;

pub async fn wait(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Everything one page session owns. Dropped wholesale on page reload;
/// nothing is persisted.
#[derive(Default)]
pub struct Session {
    pub stage: Stage,
    pub wrapped: Option<Rc<Wrapped>>,
    pub spotify: Option<Rc<SpotifyFramePlayer>>,
}

pub enum SessionAction {
    Transition(Stage),
    StoreWrapped(Wrapped),
    StoreSpotify(SpotifyFramePlayer),
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::Transition(stage) => {
                scroll_to_top();
                analytics::track_event(&stage.analytics_name());
                Rc::new(Session {
                    stage,
                    wrapped: self.wrapped.clone(),
                    spotify: self.spotify.clone(),
                })
            }
            SessionAction::StoreWrapped(wrapped) => Rc::new(Session {
                stage: self.stage,
                wrapped: Some(Rc::new(wrapped)),
                spotify: self.spotify.clone(),
            }),
            SessionAction::StoreSpotify(spotify) => Rc::new(Session {
                stage: self.stage,
                wrapped: self.wrapped.clone(),
                spotify: Some(Rc::new(spotify)),
            }),
        }
    }
}

fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Demo flow: synthetic data, so there is no failure path. Runs to
/// completion once started; there is no cancellation.
pub async fn run_demo_flow(session: UseReducerHandle<Session>) {
    analytics::track_event("demo");
    session.dispatch(SessionAction::Transition(Stage::Loading));

    let creator = WrappedCreator::new();
    let wrapped = creator.for_demo_mode();
    session.dispatch(SessionAction::StoreWrapped(wrapped));

    let mut spotify = SpotifyFramePlayer::new();
    spotify.load_library().await;
    session.dispatch(SessionAction::StoreSpotify(spotify));

    wait(LOADING_PACING_MS).await;

    analytics::track_event("demo_ready");
    session.dispatch(SessionAction::Transition(Stage::Demo));
}

/// Upload flow. A parse failure lands on the error page and aborts the
/// sequence before any media loading; a working parse always ends on
/// `Ready` or `Spotify` depending on whether the player came up. The
/// steps around the awaits are plain functions over a dispatch callback
/// so their event ordering stays checkable off-wasm.
pub async fn run_upload_flow(session: UseReducerHandle<Session>, file: web_sys::File) {
    let dispatch = {
        let session = session.clone();
        move |action| session.dispatch(action)
    };

    begin_upload(&dispatch);

    let creator = WrappedCreator::new();
    let parsed = creator.from_file(&file).await;
    if !apply_parse_result(&dispatch, parsed) {
        return;
    }

    let mut spotify = SpotifyFramePlayer::new();
    spotify.load_library().await;
    let can_play_songs = store_media_player(&dispatch, spotify);

    wait(LOADING_PACING_MS).await;

    finish_media_check(&dispatch, can_play_songs);
}

fn begin_upload(dispatch: &impl Fn(SessionAction)) {
    dispatch(SessionAction::Transition(Stage::Loading));
    analytics::track_event("file_selected");
}

/// Returns whether the flow continues; a parse failure aborts it on the
/// error page with nothing stored.
fn apply_parse_result(
    dispatch: &impl Fn(SessionAction),
    parsed: Result<Wrapped, crate::wrapped::ParseError>,
) -> bool {
    match parsed {
        Ok(wrapped) => {
            dispatch(SessionAction::StoreWrapped(wrapped));
            analytics::track_event("file_loaded");
            true
        }
        Err(err) => {
            analytics::track_event("load_error");
            log_parse_error(&err);
            dispatch(SessionAction::Transition(Stage::Error));
            false
        }
    }
}

fn store_media_player(dispatch: &impl Fn(SessionAction), spotify: SpotifyFramePlayer) -> bool {
    let can_play_songs = spotify.can_play_songs;
    dispatch(SessionAction::StoreSpotify(spotify));
    analytics::track_event("spotify_loaded");
    can_play_songs
}

fn finish_media_check(dispatch: &impl Fn(SessionAction), can_play_songs: bool) {
    analytics::track_event("spotify_check");
    analytics::track_event(if can_play_songs {
        "spotify_ready"
    } else {
        "spotify_error"
    });

    analytics::track_event("opening_player");
    dispatch(SessionAction::Transition(Stage::after_media_check(
        can_play_songs,
    )));
}

fn log_parse_error(err: &crate::wrapped::ParseError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("export parse failed: {err}").into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = err;
}

//! Thin wrapper around the Spotify iframe-embed API. The embed script is
//! injected on demand and bound to the hidden `#spotify-player` node; if
//! the script cannot load (blocked, offline, unsupported browser) the
//! player simply reports `can_play_songs = false` and the page carries on
//! without music. Nothing in here is allowed to fail the page flows.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
export function loadSpotifyEmbed(mountId, timeoutMs) {
    return new Promise((resolve) => {
        try {
            const mount = document.getElementById(mountId);
            if (!mount) {
                resolve(null);
                return;
            }

            const timer = setTimeout(() => resolve(null), timeoutMs);

            globalThis.onSpotifyIframeApiReady = (api) => {
                try {
                    api.createController(mount, {
                        width: 0,
                        height: 0,
                        uri: 'spotify:track:4PTG3Z6ehGkBFwjybzWkR8',
                    }, (controller) => {
                        clearTimeout(timer);
                        resolve(controller);
                    });
                } catch (e) {
                    clearTimeout(timer);
                    resolve(null);
                }
            };

            const script = document.createElement('script');
            script.src = 'https://open.spotify.com/embed/iframe-api/v1';
            script.async = true;
            script.onerror = () => {
                clearTimeout(timer);
                resolve(null);
            };
            document.body.appendChild(script);
        } catch (e) {
            resolve(null);
        }
    });
}

export function playSpotifyUri(controller, uri) {
    try {
        controller.loadUri(uri);
        controller.play();
    } catch (e) {
        // playback is best-effort
    }
}

export function pauseSpotify(controller) {
    try {
        controller.pause();
    } catch (e) {
    }
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = loadSpotifyEmbed)]
    fn load_spotify_embed(mount_id: &str, timeout_ms: i32) -> js_sys::Promise;

    #[wasm_bindgen(js_name = playSpotifyUri)]
    fn play_spotify_uri(controller: &JsValue, uri: &str);

    #[wasm_bindgen(js_name = pauseSpotify)]
    fn pause_spotify(controller: &JsValue);
}

/// Element id the embed controller binds to; rendered by the App shell.
pub const PLAYER_MOUNT_ID: &str = "spotify-player";

const EMBED_LOAD_TIMEOUT_MS: i32 = 10_000;

pub struct SpotifyFramePlayer {
    controller: Option<JsValue>,
    pub can_play_songs: bool,
}

impl SpotifyFramePlayer {
    pub fn new() -> SpotifyFramePlayer {
        SpotifyFramePlayer {
            controller: None,
            can_play_songs: false,
        }
    }

    /// Loads the embed API and binds a controller. Resolves once the
    /// player is either usable or known not to be; never errors.
    pub async fn load_library(&mut self) {
        let promise = load_spotify_embed(PLAYER_MOUNT_ID, EMBED_LOAD_TIMEOUT_MS);
        let controller = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .unwrap_or(JsValue::NULL);
        if controller.is_null() || controller.is_undefined() {
            self.controller = None;
            self.can_play_songs = false;
        } else {
            self.controller = Some(controller);
            self.can_play_songs = true;
        }
    }

    /// Best-effort: a no-op when the controller never came up.
    pub fn play_song(&self, uri: &str) {
        if let Some(controller) = &self.controller {
            play_spotify_uri(controller, uri);
        }
    }

    pub fn pause(&self) {
        if let Some(controller) = &self.controller {
            pause_spotify(controller);
        }
    }
}

impl Default for SpotifyFramePlayer {
    fn default() -> SpotifyFramePlayer {
        SpotifyFramePlayer::new()
    }
}

impl PartialEq for SpotifyFramePlayer {
    fn eq(&self, other: &SpotifyFramePlayer) -> bool {
        self.can_play_songs == other.can_play_songs
            && self.controller.is_some() == other.controller.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_player_cannot_play_songs() {
        let player = SpotifyFramePlayer::new();
        assert!(!player.can_play_songs);
        // play_song before load_library must be a silent no-op
        player.play_song("spotify:track:4PTG3Z6ehGkBFwjybzWkR8");
    }
}

/// The pages a session moves through. Exactly one stage is active at a
/// time; `Intro` is where every session starts and `Play` is where the
/// player component takes over (no outgoing transition).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Stage {
    #[default]
    Intro,
    Upload,
    Loading,
    Error,
    Demo,
    Spotify,
    Ready,
    Play,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Intro => "intro",
            Stage::Upload => "upload",
            Stage::Loading => "loading",
            Stage::Error => "error",
            Stage::Demo => "demo",
            Stage::Spotify => "spotify",
            Stage::Ready => "ready",
            Stage::Play => "play",
        }
    }

    /// Event name emitted on every transition into this stage.
    pub fn analytics_name(self) -> String {
        format!("page_{}", self.name())
    }

    /// Where the upload flow lands after the media readiness check.
    pub fn after_media_check(can_play_songs: bool) -> Stage {
        if can_play_songs {
            Stage::Ready
        } else {
            Stage::Spotify
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_names_follow_page_prefix() {
        assert_eq!(Stage::Intro.analytics_name(), "page_intro");
        assert_eq!(Stage::Loading.analytics_name(), "page_loading");
        assert_eq!(Stage::Spotify.analytics_name(), "page_spotify");
        assert_eq!(Stage::Play.analytics_name(), "page_play");
    }

    #[test]
    fn media_check_routes_to_ready_or_spotify() {
        assert_eq!(Stage::after_media_check(true), Stage::Ready);
        assert_eq!(Stage::after_media_check(false), Stage::Spotify);
    }
}

use std::rc::Rc;

use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::spotify::SpotifyFramePlayer;
use crate::wrapped::Wrapped;

/// Background tracks cycled across slides, best-effort only.
const SOUNDTRACK: [&str; 4] = [
    "spotify:track:4PTG3Z6ehGkBFwjybzWkR8",
    "spotify:track:0V3wPSX9ygBnCm8psDIegu",
    "spotify:track:1Qrg8KqiBpW07V7PNxwwwL",
    "spotify:track:3OHfY25tqY28d16oZczHc8",
];

#[derive(Clone, PartialEq, Debug)]
pub struct Slide {
    pub title: String,
    pub body: String,
}

/// The whole presentation, derived once from the parsed result.
fn build_slides(wrapped: &Wrapped) -> Vec<Slide> {
    let stats = wrapped.statistics();
    let persona = wrapped.persona();
    let mut slides = Vec::new();

    let greeting = if stats.user_name.is_empty() {
        "Hi there!".to_string()
    } else {
        format!("Hi @{}!", stats.user_name)
    };
    slides.push(Slide {
        title: greeting,
        body: "Let's look back at your year on TikTok.".to_string(),
    });

    slides.push(Slide {
        title: format!("{} videos", stats.videos_watched),
        body: format!(
            "That's how many videos crossed your screen over {} days.",
            stats.days_covered.max(1)
        ),
    });

    let hours = stats.watch_minutes / 60;
    slides.push(Slide {
        title: format!("{} hours watched", hours),
        body: format!(
            "Spread over {} sessions. Your longest single session ran {} minutes.",
            stats.watch_sessions, stats.longest_session_minutes
        ),
    });

    slides.push(Slide {
        title: format!("{}s at {}:00", stats.most_active_weekday(), stats.peak_hour()),
        body: "Your scrolling sweet spot, when your feed saw you the most.".to_string(),
    });

    slides.push(Slide {
        title: format!("{} likes", stats.likes),
        body: format!(
            "Plus {} comments, {} shares and {} favorites. You didn't just watch.",
            stats.comments, stats.shares, stats.favorites
        ),
    });

    slides.push(Slide {
        title: persona.title().to_string(),
        body: persona.description().to_string(),
    });

    slides.push(Slide {
        title: "That's a wrap!".to_string(),
        body: "Reload the page any time to run it again with another export."
            .to_string(),
    });

    slides
}

#[derive(Properties, PartialEq)]
pub struct WrappedPlayerProps {
    pub wrapped: Rc<Wrapped>,
    #[prop_or_default]
    pub spotify: Option<Rc<SpotifyFramePlayer>>,
}

#[function_component(WrappedPlayer)]
pub fn wrapped_player(props: &WrappedPlayerProps) -> Html {
    let slides = use_memo(props.wrapped.clone(), |wrapped| build_slides(wrapped));
    let current = use_state(|| 0usize);

    // Keep the soundtrack moving with the slides.
    {
        let spotify = props.spotify.clone();
        use_effect_with(*current, move |index| {
            if let Some(player) = spotify.filter(|p| p.can_play_songs) {
                player.play_song(SOUNDTRACK[*index % SOUNDTRACK.len()]);
            }
            || ()
        });
    }

    let total = slides.len();
    let index = (*current).min(total - 1);
    let slide = &slides[index];
    let at_end = index + 1 >= total;

    let on_next = {
        let current = current.clone();
        Callback::from(move |_| {
            current.set((*current + 1).min(total - 1));
        })
    };

    let on_back = {
        let current = current.clone();
        Callback::from(move |_| {
            current.set(current.saturating_sub(1));
        })
    };

    html! {
        <div class="wrapped-player">
            <div class="slide">
                <h1 class="fat-heading">{ &slide.title }</h1>
                <p class="info-text">{ &slide.body }</p>
            </div>
            <div class="player-controls">
                <button class="btn btn-ghost" onclick={on_back} disabled={index == 0}>
                    <span style="display: inline-flex; transform: scaleX(-1);">
                        <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
                    </span>
                </button>
                <span class="muted-text">{ format!("{}/{}", index + 1, total) }</span>
                <button class="btn btn-primary" onclick={on_next} disabled={at_end}>
                    <Icon icon_id={IconId::LucideArrowRight} width={"16"} height={"16"} />
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapped::WrappedCreator;

    #[test]
    fn slides_cover_greeting_stats_persona_and_outro() {
        let wrapped = WrappedCreator::new().for_demo_mode();
        let slides = build_slides(&wrapped);
        assert!(slides.len() >= 5);
        assert!(slides[0].title.contains("wrapped_demo"));
        assert!(slides[1].title.contains("videos"));
        assert_eq!(
            slides[slides.len() - 2].title,
            wrapped.persona().title()
        );
        assert_eq!(slides.last().unwrap().title, "That's a wrap!");
    }

    #[test]
    fn anonymous_exports_get_a_generic_greeting() {
        let wrapped = Wrapped::from_json(
            r#"{ "Activity": { "Video Browsing History": { "VideoList": [
                { "Date": "2023-06-15 22:00:00", "Link": "https://tiktok.com/v/1" }
            ] } } }"#,
        )
        .unwrap();
        let slides = build_slides(&wrapped);
        assert_eq!(slides[0].title, "Hi there!");
    }
}

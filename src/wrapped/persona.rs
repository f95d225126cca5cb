//! Persona derivation. Rules are checked top to bottom and the first
//! match wins, so the order below is part of the behavior.

use crate::wrapped::statistics::Statistics;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Persona {
    NightOwl,
    EarlyBird,
    BingeWatcher,
    SocialButterfly,
    Curator,
    CasualScroller,
}

const BINGE_SESSION_MINUTES: i64 = 120;
const SOCIAL_ENGAGEMENT_RATE: f64 = 0.05;

impl Persona {
    pub fn from_statistics(stats: &Statistics) -> Persona {
        let peak = stats.peak_hour();
        if stats.longest_session_minutes >= BINGE_SESSION_MINUTES {
            Persona::BingeWatcher
        } else if stats.videos_watched > 0 && peak < 5 {
            Persona::NightOwl
        } else if stats.videos_watched > 0 && (5..9).contains(&peak) {
            Persona::EarlyBird
        } else if stats.engagement_rate() >= SOCIAL_ENGAGEMENT_RATE {
            Persona::SocialButterfly
        } else if stats.favorites > stats.likes && stats.favorites > 0 {
            Persona::Curator
        } else {
            Persona::CasualScroller
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Persona::NightOwl => "The Night Owl",
            Persona::EarlyBird => "The Early Bird",
            Persona::BingeWatcher => "The Binge Watcher",
            Persona::SocialButterfly => "The Social Butterfly",
            Persona::Curator => "The Curator",
            Persona::CasualScroller => "The Casual Scroller",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Persona::NightOwl => {
                "Your feed comes alive long after midnight. Most of your scrolling happens when everyone else is asleep."
            }
            Persona::EarlyBird => {
                "TikTok with your morning coffee. Your busiest hours are before most people have opened the app."
            }
            Persona::BingeWatcher => {
                "Once you start, you don't stop. Your longest sessions run for hours at a time."
            }
            Persona::SocialButterfly => {
                "You don't just watch, you join in. Comments and shares make up an unusually large part of your activity."
            }
            Persona::Curator => {
                "You collect more than you like. Your favorites list is where the good stuff ends up."
            }
            Persona::CasualScroller => {
                "A little here, a little there. TikTok is a snack for you, not a meal."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_stats() -> Statistics {
        Statistics {
            videos_watched: 1000,
            ..Statistics::default()
        }
    }

    #[test]
    fn long_sessions_win_over_everything_else() {
        let mut stats = base_stats();
        stats.longest_session_minutes = 180;
        stats.hour_histogram[2] = 500; // would otherwise be a night owl
        assert_eq!(Persona::from_statistics(&stats), Persona::BingeWatcher);
    }

    #[test]
    fn peak_hour_buckets_select_owl_and_bird() {
        let mut stats = base_stats();
        stats.hour_histogram[3] = 500;
        assert_eq!(Persona::from_statistics(&stats), Persona::NightOwl);

        let mut stats = base_stats();
        stats.hour_histogram[7] = 500;
        assert_eq!(Persona::from_statistics(&stats), Persona::EarlyBird);
    }

    #[test]
    fn engagement_rate_makes_a_social_butterfly() {
        let mut stats = base_stats();
        stats.hour_histogram[14] = 500;
        stats.comments = 40;
        stats.shares = 20;
        assert_eq!(Persona::from_statistics(&stats), Persona::SocialButterfly);
    }

    #[test]
    fn favorites_heavy_accounts_are_curators() {
        let mut stats = base_stats();
        stats.hour_histogram[14] = 500;
        stats.favorites = 50;
        stats.likes = 10;
        assert_eq!(Persona::from_statistics(&stats), Persona::Curator);
    }

    #[test]
    fn empty_statistics_fall_back_to_casual_scroller() {
        assert_eq!(
            Persona::from_statistics(&Statistics::default()),
            Persona::CasualScroller
        );
    }
}

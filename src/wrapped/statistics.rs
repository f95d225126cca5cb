//! Pure aggregation over an export. Everything here is computed once when
//! the export is parsed and is read-only afterwards.

use crate::wrapped::export::{Timestamp, UserDataExport};

/// Two watch events further apart than this belong to different sessions.
const SESSION_GAP_MINUTES: i64 = 5;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Statistics {
    pub user_name: String,
    pub videos_watched: usize,
    pub likes: usize,
    pub comments: usize,
    pub shares: usize,
    pub favorites: usize,
    /// Estimated total time on the app, derived from session spans.
    pub watch_minutes: i64,
    pub watch_sessions: usize,
    pub longest_session_minutes: i64,
    pub days_covered: i64,
    pub weekday_histogram: [u32; 7],
    pub hour_histogram: [u32; 24],
}

impl Statistics {
    pub fn from_export(export: &UserDataExport) -> Statistics {
        let mut watched: Vec<Timestamp> = export
            .activity
            .video_browsing_history
            .list
            .iter()
            .filter_map(|entry| Timestamp::parse(&entry.date))
            .collect();
        watched.sort();

        let mut weekday_histogram = [0u32; 7];
        let mut hour_histogram = [0u32; 24];
        for ts in &watched {
            weekday_histogram[ts.weekday as usize] += 1;
            hour_histogram[ts.hour as usize] += 1;
        }

        let (watch_sessions, watch_minutes, longest_session_minutes) = sessions(&watched);

        // Calendar dates touched, not elapsed 24-hour spans: an evening
        // that runs past midnight covers two days.
        let days_covered = match (watched.first(), watched.last()) {
            (Some(first), Some(last)) => {
                last.minutes.div_euclid(24 * 60) - first.minutes.div_euclid(24 * 60) + 1
            }
            _ => 0,
        };

        Statistics {
            user_name: export.profile.profile_information.profile_map.user_name.clone(),
            videos_watched: export.activity.video_browsing_history.list.len(),
            likes: export.activity.like_list.list.len(),
            comments: export.comment.comments.list.len(),
            shares: export.activity.share_history.list.len(),
            favorites: export.activity.favorite_videos.list.len(),
            watch_minutes,
            watch_sessions,
            longest_session_minutes,
            days_covered,
            weekday_histogram,
            hour_histogram,
        }
    }

    pub fn most_active_weekday(&self) -> &'static str {
        let best = self
            .weekday_histogram
            .iter()
            .enumerate()
            .max_by_key(|(_, count)| **count)
            .map(|(day, _)| day)
            .unwrap_or(0);
        WEEKDAYS[best]
    }

    /// Hour of day (0-23) with the most watch activity.
    pub fn peak_hour(&self) -> u8 {
        self.hour_histogram
            .iter()
            .enumerate()
            .max_by_key(|(_, count)| **count)
            .map(|(hour, _)| hour as u8)
            .unwrap_or(0)
    }

    /// Comments and shares relative to videos watched, as a rough measure
    /// of how much the user engages beyond scrolling.
    pub fn engagement_rate(&self) -> f64 {
        if self.videos_watched == 0 {
            return 0.0;
        }
        (self.comments + self.shares) as f64 / self.videos_watched as f64
    }
}

/// Splits sorted watch timestamps into sessions and returns
/// (session count, total minutes, longest session minutes). A session
/// spanning a single event still counts one minute.
fn sessions(sorted: &[Timestamp]) -> (usize, i64, i64) {
    let Some(first) = sorted.first() else {
        return (0, 0, 0);
    };

    let mut count = 1usize;
    let mut total = 0i64;
    let mut longest = 0i64;
    let mut session_start = first.minutes;
    let mut previous = first.minutes;

    for ts in &sorted[1..] {
        if ts.minutes - previous > SESSION_GAP_MINUTES {
            let span = (previous - session_start).max(1);
            total += span;
            longest = longest.max(span);
            session_start = ts.minutes;
            count += 1;
        }
        previous = ts.minutes;
    }
    let span = (previous - session_start).max(1);
    total += span;
    longest = longest.max(span);

    (count, total, longest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_with_history(dates: &[&str]) -> UserDataExport {
        let entries: Vec<serde_json::Value> = dates
            .iter()
            .map(|date| serde_json::json!({ "Date": date, "Link": "https://tiktok.com/v/1" }))
            .collect();
        serde_json::from_value(serde_json::json!({
            "Activity": { "Video Browsing History": { "VideoList": entries } }
        }))
        .unwrap()
    }

    #[test]
    fn splits_sessions_on_gaps() {
        let export = export_with_history(&[
            "2023-06-15 10:00:00",
            "2023-06-15 10:03:00",
            "2023-06-15 10:06:00",
            // 54 minute gap starts a new session
            "2023-06-15 11:00:00",
            "2023-06-15 11:02:00",
        ]);
        let stats = Statistics::from_export(&export);
        assert_eq!(stats.videos_watched, 5);
        assert_eq!(stats.watch_sessions, 2);
        assert_eq!(stats.watch_minutes, 6 + 2);
        assert_eq!(stats.longest_session_minutes, 6);
    }

    #[test]
    fn single_event_counts_as_one_minute_session() {
        let stats = Statistics::from_export(&export_with_history(&["2023-06-15 10:00:00"]));
        assert_eq!(stats.watch_sessions, 1);
        assert_eq!(stats.watch_minutes, 1);
        assert_eq!(stats.days_covered, 1);
    }

    #[test]
    fn scrolling_past_midnight_covers_two_days() {
        let export = export_with_history(&["2023-06-15 23:00:00", "2023-06-16 01:00:00"]);
        let stats = Statistics::from_export(&export);
        assert_eq!(stats.days_covered, 2);
    }

    #[test]
    fn empty_export_yields_zeroed_statistics() {
        let stats = Statistics::from_export(&UserDataExport::default());
        assert_eq!(stats.videos_watched, 0);
        assert_eq!(stats.watch_sessions, 0);
        assert_eq!(stats.days_covered, 0);
        assert_eq!(stats.engagement_rate(), 0.0);
    }

    #[test]
    fn histograms_track_weekday_and_hour() {
        // Both events on a Thursday, one at 22h and one at 23h.
        let export = export_with_history(&["2023-06-15 22:00:00", "2023-06-15 23:30:00"]);
        let stats = Statistics::from_export(&export);
        assert_eq!(stats.most_active_weekday(), "Thursday");
        assert!(stats.peak_hour() == 22 || stats.peak_hour() == 23);
        assert_eq!(stats.weekday_histogram[3], 2);
    }

    #[test]
    fn malformed_dates_are_skipped_but_still_counted_as_watched() {
        let export = export_with_history(&["garbage", "2023-06-15 10:00:00"]);
        let stats = Statistics::from_export(&export);
        assert_eq!(stats.videos_watched, 2);
        assert_eq!(stats.watch_sessions, 1);
    }
}

//! Serde model of the slice of a TikTok `user_data.json` export the app
//! cares about. Exports vary a lot between accounts and app versions, so
//! every section is optional and a missing list is treated as empty.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct UserDataExport {
    #[serde(rename = "Activity", default)]
    pub activity: Activity,
    #[serde(rename = "Comment", default)]
    pub comment: CommentSection,
    #[serde(rename = "Profile", default)]
    pub profile: Profile,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Activity {
    #[serde(rename = "Video Browsing History", default)]
    pub video_browsing_history: VideoList,
    #[serde(rename = "Like List", default)]
    pub like_list: ItemFavoriteList,
    #[serde(rename = "Favorite Videos", default)]
    pub favorite_videos: FavoriteVideoList,
    #[serde(rename = "Share History", default)]
    pub share_history: ShareHistoryList,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct VideoList {
    #[serde(rename = "VideoList", default)]
    pub list: Vec<LinkEntry>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ItemFavoriteList {
    #[serde(rename = "ItemFavoriteList", default)]
    pub list: Vec<LinkEntry>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct FavoriteVideoList {
    #[serde(rename = "FavoriteVideoList", default)]
    pub list: Vec<LinkEntry>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ShareHistoryList {
    #[serde(rename = "ShareHistoryList", default)]
    pub list: Vec<ShareEntry>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct CommentSection {
    #[serde(rename = "Comments", default)]
    pub comments: CommentsList,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct CommentsList {
    #[serde(rename = "CommentsList", default)]
    pub list: Vec<CommentEntry>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Profile {
    #[serde(rename = "Profile Information", default)]
    pub profile_information: ProfileInformation,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ProfileInformation {
    #[serde(rename = "ProfileMap", default)]
    pub profile_map: ProfileMap,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ProfileMap {
    #[serde(rename = "userName", default)]
    pub user_name: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct LinkEntry {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Link", default)]
    pub link: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ShareEntry {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "SharedContent", default)]
    pub shared_content: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct CommentEntry {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Comment", default)]
    pub comment: String,
}

impl UserDataExport {
    /// An export with every recognized section empty is almost certainly
    /// some other JSON file the user picked by accident.
    pub fn is_empty(&self) -> bool {
        self.activity.video_browsing_history.list.is_empty()
            && self.activity.like_list.list.is_empty()
            && self.activity.favorite_videos.list.is_empty()
            && self.activity.share_history.list.is_empty()
            && self.comment.comments.list.is_empty()
    }
}

/// Export timestamp, parsed from the `YYYY-MM-DD HH:MM:SS` strings TikTok
/// writes. Only the granularity the statistics need is kept.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Timestamp {
    /// Minutes since 1970-01-01 00:00, for ordering and session gaps.
    pub minutes: i64,
    /// 0 = Monday .. 6 = Sunday.
    pub weekday: u8,
    pub hour: u8,
}

impl Timestamp {
    pub fn parse(raw: &str) -> Option<Timestamp> {
        let raw = raw.trim();
        let (date, time) = raw.split_once(' ')?;
        let mut date_parts = date.splitn(3, '-');
        let year: i64 = date_parts.next()?.parse().ok()?;
        let month: i64 = date_parts.next()?.parse().ok()?;
        let day: i64 = date_parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        let mut time_parts = time.splitn(3, ':');
        let hour: i64 = time_parts.next()?.parse().ok()?;
        let minute: i64 = time_parts.next()?.parse().ok()?;
        if !(0..24).contains(&hour) || !(0..60).contains(&minute) {
            return None;
        }

        let days = days_from_civil(year, month, day);
        Some(Timestamp {
            minutes: days * 24 * 60 + hour * 60 + minute,
            // 1970-01-01 was a Thursday (weekday 3 in Monday-based terms).
            weekday: (days + 3).rem_euclid(7) as u8,
            hour: hour as u8,
        })
    }
}

// Days between 1970-01-01 and the given civil date (Howard Hinnant's
// algorithm), valid for the whole range an export can contain.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_timestamps() {
        let ts = Timestamp::parse("2023-06-15 22:41:07").unwrap();
        assert_eq!(ts.hour, 22);
        // 2023-06-15 was a Thursday.
        assert_eq!(ts.weekday, 3);

        let epoch = Timestamp::parse("1970-01-01 00:00:00").unwrap();
        assert_eq!(epoch.minutes, 0);
        assert_eq!(epoch.weekday, 3);
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(Timestamp::parse("not a date").is_none());
        assert!(Timestamp::parse("2023-13-01 00:00:00").is_none());
        assert!(Timestamp::parse("2023-06-15 25:00:00").is_none());
        assert!(Timestamp::parse("2023-06-15").is_none());
    }

    #[test]
    fn minutes_order_matches_chronology() {
        let earlier = Timestamp::parse("2023-06-15 10:00:00").unwrap();
        let later = Timestamp::parse("2023-06-15 10:07:00").unwrap();
        assert_eq!(later.minutes - earlier.minutes, 7);
    }

    #[test]
    fn missing_sections_deserialize_as_empty() {
        let export: UserDataExport =
            serde_json::from_str(r#"{ "Activity": { "Video Browsing History": { "VideoList": [
                { "Date": "2023-01-01 12:00:00", "Link": "https://www.tiktokv.com/share/video/1/" }
            ] } } }"#)
            .unwrap();
        assert_eq!(export.activity.video_browsing_history.list.len(), 1);
        assert!(export.activity.like_list.list.is_empty());
        assert!(export.comment.comments.list.is_empty());
        assert!(!export.is_empty());
    }

    #[test]
    fn unrelated_json_is_an_empty_export() {
        let export: UserDataExport = serde_json::from_str(r#"{ "foo": 1 }"#).unwrap();
        assert!(export.is_empty());
    }
}

use thiserror::Error;

use crate::wrapped::export::{LinkEntry, CommentEntry, ShareEntry, UserDataExport};
use crate::wrapped::Wrapped;

/// The only error the page reacts to: the selected file could not be
/// turned into a usable export.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("could not read the selected file: {0}")]
    UnreadableFile(String),
    #[error("the file is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("the file does not look like a TikTok data export")]
    NotAnExport,
}

/// Builds a [`Wrapped`] either from a user-supplied export file or from
/// synthetic demo data.
pub struct WrappedCreator;

impl WrappedCreator {
    pub fn new() -> WrappedCreator {
        WrappedCreator
    }

    /// Deterministic synthetic export, so the demo always shows the same
    /// Wrapped. Never fails.
    pub fn for_demo_mode(&self) -> Wrapped {
        Wrapped::from_export(&demo_export())
    }

    /// Reads the selected file and parses it as a `user_data.json` export.
    pub async fn from_file(&self, file: &web_sys::File) -> Result<Wrapped, ParseError> {
        let text = wasm_bindgen_futures::JsFuture::from(file.text())
            .await
            .map_err(|err| ParseError::UnreadableFile(format!("{err:?}")))?
            .as_string()
            .ok_or_else(|| ParseError::UnreadableFile("file is not text".to_string()))?;
        Wrapped::from_json(&text)
    }
}

impl Default for WrappedCreator {
    fn default() -> WrappedCreator {
        WrappedCreator::new()
    }
}

fn link(n: usize) -> String {
    format!("https://www.tiktokv.com/share/video/{}/", 7_000_000_000_000u64 + n as u64)
}

/// Half a year of plausible activity, generated with plain arithmetic so
/// repeated demo runs are identical: evening-heavy watch sessions, likes
/// every few videos, the occasional comment and share.
fn demo_export() -> UserDataExport {
    let mut videos = Vec::new();
    let mut likes = Vec::new();
    let mut favorites = Vec::new();
    let mut comments = Vec::new();
    let mut shares = Vec::new();

    let mut n = 0usize;
    for month in 1..=6u32 {
        for day in (1..=27u32).step_by(2) {
            let sessions = 1 + (day as usize % 2);
            for session in 0..sessions {
                let hour = 19 + session as u32 * 2 + (day % 2);
                let videos_in_session = 8 + (day as usize + session) % 7;
                for i in 0..videos_in_session {
                    let minute = (i * 3) as u32 % 60;
                    let date = format!("2023-{month:02}-{day:02} {hour:02}:{minute:02}:00");
                    videos.push(LinkEntry {
                        date: date.clone(),
                        link: link(n),
                    });
                    if n % 5 == 0 {
                        likes.push(LinkEntry {
                            date: date.clone(),
                            link: link(n),
                        });
                    }
                    if n % 23 == 0 {
                        favorites.push(LinkEntry {
                            date: date.clone(),
                            link: link(n),
                        });
                    }
                    if n % 31 == 0 {
                        comments.push(CommentEntry {
                            date: date.clone(),
                            comment: "this is amazing".to_string(),
                        });
                    }
                    if n % 47 == 0 {
                        shares.push(ShareEntry {
                            date,
                            link: link(n),
                            shared_content: "video".to_string(),
                        });
                    }
                    n += 1;
                }
            }
        }
    }

    let mut export = UserDataExport::default();
    export.profile.profile_information.profile_map.user_name = "wrapped_demo".to_string();
    export.activity.video_browsing_history.list = videos;
    export.activity.like_list.list = likes;
    export.activity.favorite_videos.list = favorites;
    export.activity.share_history.list = shares;
    export.comment.comments.list = comments;
    export
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_mode_is_deterministic_and_non_empty() {
        let creator = WrappedCreator::new();
        let first = creator.for_demo_mode();
        let second = creator.for_demo_mode();
        assert_eq!(first, second);
        assert!(first.statistics().videos_watched > 0);
        assert!(first.statistics().watch_sessions > 0);
        assert_eq!(first.statistics().user_name, "wrapped_demo");
    }

    #[test]
    fn demo_activity_has_engagement_beyond_watching() {
        let stats_wrapped = WrappedCreator::new().for_demo_mode();
        let stats = stats_wrapped.statistics();
        assert!(stats.likes > 0);
        assert!(stats.comments > 0);
        assert!(stats.shares > 0);
        assert!(stats.favorites > 0);
        assert!(stats.likes < stats.videos_watched);
    }
}

//! Parsing a TikTok data export and everything derived from it. The page
//! only ever sees a finished [`Wrapped`]; parsing and aggregation happen
//! once, up front.

pub mod creator;
pub mod export;
pub mod persona;
pub mod statistics;

pub use creator::{ParseError, WrappedCreator};
pub use persona::Persona;
pub use statistics::Statistics;

use export::UserDataExport;

/// The parsed result of one export: statistics plus the derived persona.
/// Read-only once built.
#[derive(Clone, PartialEq, Debug)]
pub struct Wrapped {
    statistics: Statistics,
    persona: Persona,
}

impl Wrapped {
    pub fn from_export(export: &UserDataExport) -> Wrapped {
        let statistics = Statistics::from_export(export);
        let persona = Persona::from_statistics(&statistics);
        Wrapped {
            statistics,
            persona,
        }
    }

    pub fn from_json(raw: &str) -> Result<Wrapped, ParseError> {
        let export: UserDataExport = serde_json::from_str(raw)?;
        if export.is_empty() {
            return Err(ParseError::NotAnExport);
        }
        Ok(Wrapped::from_export(&export))
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_export_parses_end_to_end() {
        let wrapped = Wrapped::from_json(
            r#"{ "Activity": { "Video Browsing History": { "VideoList": [
                { "Date": "2023-06-15 22:00:00", "Link": "https://tiktok.com/v/1" },
                { "Date": "2023-06-15 22:03:00", "Link": "https://tiktok.com/v/2" }
            ] } } }"#,
        )
        .unwrap();
        assert_eq!(wrapped.statistics().videos_watched, 2);
        assert_eq!(wrapped.statistics().watch_sessions, 1);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            Wrapped::from_json("{ not json"),
            Err(ParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn unrelated_json_is_not_an_export() {
        assert!(matches!(
            Wrapped::from_json(r#"{ "hello": "world" }"#),
            Err(ParseError::NotAnExport)
        ));
    }
}

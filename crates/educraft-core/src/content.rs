//! Structured marketing content returned by the generative provider.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Quotes longer than this (in characters) are clamped behind a "Read More" toggle.
pub const QUOTE_CLAMP_CHARS: usize = 120;

/// Date layouts recognized for the event badge.
const EVENT_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y", "%B %d %Y"];

/// Generated site copy for one school.
///
/// Every field is required on the wire; a payload missing any of them is
/// rejected rather than partially rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub mission_statement: String,
    pub about_text: String,
    pub principal_message: String,
    pub principal_name: String,
    pub academic_highlights: Vec<String>,
    pub events: Vec<SchoolEvent>,
    pub faculty: Vec<FacultyMember>,
    pub testimonials: Vec<Testimonial>,
    pub footer_text: String,
}

impl GeneratedContent {
    /// Wire names of all required fields, in schema order.
    pub const REQUIRED_FIELDS: [&'static str; 11] = [
        "heroHeadline",
        "heroSubheadline",
        "missionStatement",
        "aboutText",
        "principalMessage",
        "principalName",
        "academicHighlights",
        "events",
        "faculty",
        "testimonials",
        "footerText",
    ];

    /// Parse a provider payload.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        if text.trim().is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(serde_json::from_str(text)?)
    }
}

/// An upcoming event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolEvent {
    pub title: String,
    pub date: String,
    pub description: String,
}

/// Month/day pair shown on an event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateBadge {
    /// Three-letter month, or "TBA" when the date could not be read
    pub month: String,
    /// Day of month, absent when the date could not be read
    pub day: Option<u32>,
}

impl SchoolEvent {
    /// Parse the free-form date into a calendar date, if it has a known layout.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        EVENT_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    }

    pub fn date_badge(&self) -> DateBadge {
        match self.parsed_date() {
            Some(date) => DateBadge {
                month: date.format("%b").to_string(),
                day: Some(date.day()),
            },
            None => DateBadge {
                month: "TBA".to_string(),
                day: None,
            },
        }
    }
}

/// A featured faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

/// A quote from a student, parent or alumnus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
}

impl Testimonial {
    /// Whether the quote is long enough to start clamped.
    pub fn is_long(&self) -> bool {
        self.quote.chars().count() > QUOTE_CLAMP_CHARS
    }
}

/// Errors that can occur when reading a content payload.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content payload is empty")]
    Empty,

    #[error("Content does not match the expected schema: {0}")]
    Schema(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPRINGFIELD: &str = include_str!("../testdata/springfield.json");

    #[test]
    fn parses_complete_payload() {
        let content = GeneratedContent::from_json(SPRINGFIELD).unwrap();

        assert_eq!(content.principal_name, "Dr. Eleanor Whitfield");
        assert_eq!(content.academic_highlights.len(), 4);
        assert_eq!(content.events.len(), 3);
        assert_eq!(content.faculty.len(), 3);
        assert_eq!(content.testimonials.len(), 6);
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(matches!(
            GeneratedContent::from_json("  \n"),
            Err(ContentError::Empty)
        ));
    }

    #[test]
    fn rejects_payload_missing_any_required_field() {
        for field in GeneratedContent::REQUIRED_FIELDS {
            let mut value: serde_json::Value = serde_json::from_str(SPRINGFIELD).unwrap();
            value.as_object_mut().unwrap().remove(field);

            let err = GeneratedContent::from_json(&value.to_string()).unwrap_err();
            assert!(
                err.to_string().contains(field),
                "expected error about {field}, got {err}"
            );
        }
    }

    #[test]
    fn rejects_wrong_kind() {
        let mut value: serde_json::Value = serde_json::from_str(SPRINGFIELD).unwrap();
        value["events"] = serde_json::json!("three events");

        assert!(matches!(
            GeneratedContent::from_json(&value.to_string()),
            Err(ContentError::Schema(_))
        ));
    }

    #[test]
    fn ignores_unknown_fields() {
        let mut value: serde_json::Value = serde_json::from_str(SPRINGFIELD).unwrap();
        value["extra"] = serde_json::json!(true);

        assert!(GeneratedContent::from_json(&value.to_string()).is_ok());
    }

    #[test]
    fn builds_date_badges() {
        let content = GeneratedContent::from_json(SPRINGFIELD).unwrap();
        let badges: Vec<DateBadge> = content.events.iter().map(SchoolEvent::date_badge).collect();

        assert_eq!(
            badges,
            vec![
                DateBadge {
                    month: "Oct".to_string(),
                    day: Some(12)
                },
                DateBadge {
                    month: "Nov".to_string(),
                    day: Some(8)
                },
                DateBadge {
                    month: "TBA".to_string(),
                    day: None
                },
            ]
        );
    }

    #[test]
    fn accepts_abbreviated_and_day_first_dates() {
        let event = |date: &str| SchoolEvent {
            title: String::new(),
            date: date.to_string(),
            description: String::new(),
        };

        assert_eq!(event("Mar 3, 2026").date_badge().day, Some(3));
        assert_eq!(event("21 June 2026").date_badge().month, "Jun");
    }

    #[test]
    fn flags_long_quotes() {
        let content = GeneratedContent::from_json(SPRINGFIELD).unwrap();
        let long: Vec<bool> = content.testimonials.iter().map(Testimonial::is_long).collect();

        assert_eq!(long, vec![false, true, false, false, false, false]);
    }
}

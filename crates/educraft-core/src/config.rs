//! School configuration and the form that collects it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid hex color regex")
});

/// Kind of institution a site is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchoolType {
    Elementary,
    #[default]
    HighSchool,
    University,
    Academy,
    Online,
}

impl SchoolType {
    /// All types, in the order the wizard lists them.
    pub const ALL: [SchoolType; 5] = [
        SchoolType::Elementary,
        SchoolType::HighSchool,
        SchoolType::University,
        SchoolType::Academy,
        SchoolType::Online,
    ];

    /// Human-readable label. This is also what the generation prompt embeds.
    pub fn label(self) -> &'static str {
        match self {
            SchoolType::Elementary => "Elementary School",
            SchoolType::HighSchool => "High School",
            SchoolType::University => "University",
            SchoolType::Academy => "Private Academy",
            SchoolType::Online => "Online Learning",
        }
    }

    /// Stable identifier used in forms and config files.
    pub fn slug(self) -> &'static str {
        match self {
            SchoolType::Elementary => "elementary",
            SchoolType::HighSchool => "high-school",
            SchoolType::University => "university",
            SchoolType::Academy => "academy",
            SchoolType::Online => "online",
        }
    }
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SchoolType {
    type Err = ConfigError;

    /// Accepts either the slug or the label, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(needle) || t.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConfigError::UnknownSchoolType(needle.to_string()))
    }
}

/// A brand color, normalized to lowercase `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BrandColor(String);

impl BrandColor {
    pub const DEFAULT_PRIMARY: &'static str = "#1e40af";
    pub const DEFAULT_SECONDARY: &'static str = "#eab308";

    /// Parse a `#rgb` or `#rrggbb` hex color.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let value = value.trim();
        if !HEX_COLOR_RE.is_match(value) {
            return Err(ConfigError::InvalidColor(value.to_string()));
        }

        let digits = &value[1..];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        Ok(Self(format!("#{}", expanded.to_ascii_lowercase())))
    }

    /// The preset primary color (blue-800).
    pub fn primary() -> Self {
        Self(Self::DEFAULT_PRIMARY.to_string())
    }

    /// The preset secondary color (yellow-500).
    pub fn secondary() -> Self {
        Self(Self::DEFAULT_SECONDARY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BrandColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BrandColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BrandColor> for String {
    fn from(color: BrandColor) -> Self {
        color.0
    }
}

/// A submitted school configuration.
///
/// Produced by [`ConfigForm::submit`]; the session treats it as immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolConfig {
    /// Institution name
    pub name: String,

    /// Institution type
    #[serde(rename = "type")]
    pub school_type: SchoolType,

    /// Motto or slogan
    pub motto: String,

    /// City / region
    pub location: String,

    /// Primary brand color
    pub primary_color: BrandColor,

    /// Secondary accent color
    pub secondary_color: BrandColor,
}

impl SchoolConfig {
    /// Name with all whitespace removed, lowercased. Used for contact addresses.
    pub fn email_slug(&self) -> String {
        self.name
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// First character of the name, shown in the logo tile.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Errors raised when interpreting individual configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid color value {0:?}: expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("Unknown school type: {0}")]
    UnknownSchoolType(String),

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// A single edit to the configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    SchoolType(String),
    Motto(String),
    Location(String),
    PrimaryColor(String),
    SecondaryColor(String),
}

impl FieldUpdate {
    /// Build an update from an HTML form field name and its value.
    pub fn from_field(name: &str, value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        match name {
            "name" => Ok(FieldUpdate::Name(value)),
            "type" => Ok(FieldUpdate::SchoolType(value)),
            "motto" => Ok(FieldUpdate::Motto(value)),
            "location" => Ok(FieldUpdate::Location(value)),
            "primaryColor" => Ok(FieldUpdate::PrimaryColor(value)),
            "secondaryColor" => Ok(FieldUpdate::SecondaryColor(value)),
            other => Err(ConfigError::UnknownField(other.to_string())),
        }
    }

    /// The form field this update targets.
    pub fn field(&self) -> &'static str {
        match self {
            FieldUpdate::Name(_) => "name",
            FieldUpdate::SchoolType(_) => "type",
            FieldUpdate::Motto(_) => "motto",
            FieldUpdate::Location(_) => "location",
            FieldUpdate::PrimaryColor(_) => "primaryColor",
            FieldUpdate::SecondaryColor(_) => "secondaryColor",
        }
    }
}

/// Validation failure for one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name
    pub field: &'static str,

    /// User-facing message
    pub message: String,
}

/// All validation failures from one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("Invalid school configuration: {}", describe(.errors))]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    /// Message for a given field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw, editable form state for a [`SchoolConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigForm {
    pub name: String,
    #[serde(rename = "type")]
    pub school_type: String,
    pub motto: String,
    pub location: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            school_type: SchoolType::default().slug().to_string(),
            motto: String::new(),
            location: String::new(),
            primary_color: BrandColor::DEFAULT_PRIMARY.to_string(),
            secondary_color: BrandColor::DEFAULT_SECONDARY.to_string(),
        }
    }
}

impl ConfigForm {
    /// Create an empty form with the preset type and colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single field edit.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(v) => self.name = v,
            FieldUpdate::SchoolType(v) => self.school_type = v,
            FieldUpdate::Motto(v) => self.motto = v,
            FieldUpdate::Location(v) => self.location = v,
            FieldUpdate::PrimaryColor(v) => self.primary_color = v,
            FieldUpdate::SecondaryColor(v) => self.secondary_color = v,
        }
    }

    /// Validate the form and produce a configuration.
    ///
    /// Every failing field is reported, not only the first one.
    pub fn submit(&self) -> Result<SchoolConfig, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required(&mut errors, "name", "School name", &self.name);
        let motto = required(&mut errors, "motto", "Motto", &self.motto);
        let location = required(&mut errors, "location", "Location", &self.location);

        let school_type = match self.school_type.parse::<SchoolType>() {
            Ok(t) => Some(t),
            Err(e) => {
                errors.push("type", e.to_string());
                None
            }
        };

        let primary_color = match BrandColor::parse(&self.primary_color) {
            Ok(c) => Some(c),
            Err(e) => {
                errors.push("primaryColor", e.to_string());
                None
            }
        };

        let secondary_color = match BrandColor::parse(&self.secondary_color) {
            Ok(c) => Some(c),
            Err(e) => {
                errors.push("secondaryColor", e.to_string());
                None
            }
        };

        match (name, school_type, motto, location, primary_color, secondary_color) {
            (
                Some(name),
                Some(school_type),
                Some(motto),
                Some(location),
                Some(primary_color),
                Some(secondary_color),
            ) if errors.is_empty() => Ok(SchoolConfig {
                name,
                school_type,
                motto,
                location,
                primary_color,
                secondary_color,
            }),
            _ => Err(errors),
        }
    }
}

impl From<&SchoolConfig> for ConfigForm {
    fn from(config: &SchoolConfig) -> Self {
        Self {
            name: config.name.clone(),
            school_type: config.school_type.slug().to_string(),
            motto: config.motto.clone(),
            location: config.location.clone(),
            primary_color: config.primary_color.to_string(),
            secondary_color: config.secondary_color.to_string(),
        }
    }
}

fn required(
    errors: &mut FormErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{} is required", label));
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn springfield_form() -> ConfigForm {
        let mut form = ConfigForm::new();
        form.apply(FieldUpdate::Name("Springfield Academy".to_string()));
        form.apply(FieldUpdate::Motto("Excellence in Education".to_string()));
        form.apply(FieldUpdate::Location("Boston, MA".to_string()));
        form
    }

    #[test]
    fn submits_complete_form() {
        let config = springfield_form().submit().unwrap();

        assert_eq!(
            config,
            SchoolConfig {
                name: "Springfield Academy".to_string(),
                school_type: SchoolType::HighSchool,
                motto: "Excellence in Education".to_string(),
                location: "Boston, MA".to_string(),
                primary_color: BrandColor::primary(),
                secondary_color: BrandColor::secondary(),
            }
        );
    }

    #[test]
    fn reports_every_missing_required_field() {
        let mut form = ConfigForm::new();
        form.apply(FieldUpdate::Motto("   ".to_string()));

        let errors = form.submit().unwrap_err();

        assert_eq!(errors.errors.len(), 3);
        assert_eq!(errors.get("name"), Some("School name is required"));
        assert_eq!(errors.get("motto"), Some("Motto is required"));
        assert_eq!(errors.get("location"), Some("Location is required"));
        assert!(errors.get("type").is_none());
    }

    #[test]
    fn trims_text_fields() {
        let mut form = springfield_form();
        form.apply(FieldUpdate::Name("  Springfield Academy \n".to_string()));

        let config = form.submit().unwrap();
        assert_eq!(config.name, "Springfield Academy");
    }

    #[test]
    fn rejects_invalid_color() {
        let mut form = springfield_form();
        form.apply(FieldUpdate::PrimaryColor("blue".to_string()));

        let errors = form.submit().unwrap_err();
        assert!(errors.get("primaryColor").is_some());
        assert!(errors.to_string().contains("primaryColor"));
    }

    #[test]
    fn normalizes_colors() {
        assert_eq!(BrandColor::parse("#ABC").unwrap().as_str(), "#aabbcc");
        assert_eq!(BrandColor::parse(" #1E40AF ").unwrap().as_str(), "#1e40af");
        assert!(BrandColor::parse("#12345").is_err());
        assert!(BrandColor::parse("1e40af").is_err());
    }

    #[test]
    fn parses_school_type_from_slug_or_label() {
        assert_eq!("academy".parse::<SchoolType>().unwrap(), SchoolType::Academy);
        assert_eq!(
            "Online Learning".parse::<SchoolType>().unwrap(),
            SchoolType::Online
        );
        assert_eq!(
            "HIGH-SCHOOL".parse::<SchoolType>().unwrap(),
            SchoolType::HighSchool
        );
        assert!("kindergarten".parse::<SchoolType>().is_err());
    }

    #[test]
    fn maps_form_field_names() {
        let update = FieldUpdate::from_field("secondaryColor", "#fff").unwrap();
        assert_eq!(update, FieldUpdate::SecondaryColor("#fff".to_string()));
        assert_eq!(update.field(), "secondaryColor");

        assert_eq!(
            FieldUpdate::from_field("favoriteColor", "red"),
            Err(ConfigError::UnknownField("favoriteColor".to_string()))
        );
    }

    #[test]
    fn derives_email_slug_and_initial() {
        let config = springfield_form().submit().unwrap();

        assert_eq!(config.email_slug(), "springfieldacademy");
        assert_eq!(config.initial(), "S");
    }

    #[test]
    fn round_trips_through_form() {
        let config = springfield_form().submit().unwrap();
        let form = ConfigForm::from(&config);

        assert_eq!(form.submit().unwrap(), config);
    }

    #[test]
    fn deserializes_color_through_validation() {
        let json = r##"{
            "name": "A", "type": "university", "motto": "B", "location": "C",
            "primaryColor": "#FFF", "secondaryColor": "not-a-color"
        }"##;

        assert!(serde_json::from_str::<SchoolConfig>(json).is_err());
    }
}

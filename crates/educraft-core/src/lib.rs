//! Core data model for EduCraft.
//!
//! Holds the school configuration collected from the user, the content record
//! produced by the generative provider, the session state machine that
//! sequences the two, and the carousel arithmetic used by the rendered page.

pub mod carousel;
pub mod config;
pub mod content;
pub mod session;

pub use carousel::{visible_slots_for_width, Carousel, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH};
pub use config::{
    BrandColor, ConfigError, ConfigForm, FieldError, FieldUpdate, FormErrors, SchoolConfig,
    SchoolType,
};
pub use content::{
    ContentError, DateBadge, FacultyMember, GeneratedContent, SchoolEvent, Testimonial,
    QUOTE_CLAMP_CHARS,
};
pub use session::{Session, SessionError, SessionPhase, GENERATION_FAILED_MESSAGE};

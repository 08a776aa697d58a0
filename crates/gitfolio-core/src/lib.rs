// Core logic: the fetch -> filter -> sort -> paginate -> render pipeline
pub mod card;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod locale;
pub mod matcher;
pub mod models;
pub mod photo;
pub mod portfolio;
pub mod prefs;
pub mod sort;
pub mod source;
pub mod surface;
pub mod theme;
pub mod view;

pub use card::{render_card, Badge, BadgeKind, CardLink, CardView};
pub use config::Config;
pub use error::Error;
pub use locale::Locale;
pub use models::{Profile, RepositoryRecord};
pub use portfolio::Portfolio;
pub use prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use source::{GitHubSource, RepositorySource};
pub use surface::{AvatarState, DisplaySurface, PhotoSource};
pub use theme::{Color, Palette, ThemeController, ThemePreference};
pub use view::{ViewState, PAGE_SIZE};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;

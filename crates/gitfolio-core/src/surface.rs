// The regions the controllers publish into. The TUI only ever reads these.
use crate::card::CardView;

/// Shown in the repository counter until a load says otherwise
pub const COUNT_PLACEHOLDER: &str = "—";

/// Where the avatar currently comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoSource {
    #[default]
    Remote,
    Local,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarState {
    /// Image reference in effect, if any
    pub src: Option<String>,
    /// Configured local image to try before the remote avatar
    pub local_src: Option<String>,
    pub photo_source: PhotoSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySurface {
    pub cards: Vec<CardView>,
    pub status: String,
    pub search: String,
    pub load_more_visible: bool,
    pub repo_count: String,
    pub avatar: AvatarState,
    pub year: String,
    /// Visual mode attribute, `None` until the theme is applied
    pub theme_mode: Option<String>,
    pub theme_icon: String,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: String::new(),
            search: String::new(),
            load_more_visible: false,
            repo_count: COUNT_PLACEHOLDER.to_string(),
            avatar: AvatarState::default(),
            year: String::new(),
            theme_mode: None,
            theme_icon: String::new(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self::new()
    }
}

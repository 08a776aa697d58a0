use tracing::{info, warn};

use crate::loader::{self, LoadedData};
use crate::locale::Locale;
use crate::models::RepositoryRecord;
use crate::prefs::PreferenceStore;
use crate::sort::sort_by_recency;
use crate::source::RepositorySource;
use crate::surface::{DisplaySurface, PhotoSource};
use crate::theme::{ThemeController, ThemePreference};
use crate::view::ViewState;
use crate::Result;

/// The whole application state: what is on screen, the repository view
/// behind it and the theme controller.
///
/// Everything mutates synchronously through `&mut self`; async work
/// (fetching, probing) happens elsewhere and hands its result back here.
pub struct Portfolio {
    surface: DisplaySurface,
    view: ViewState,
    theme: ThemeController,
}

impl Portfolio {
    /// Bind a fresh display surface. Nothing is applied yet.
    pub fn new(locale: Locale, store: Box<dyn PreferenceStore>) -> Self {
        Self {
            surface: DisplaySurface::new(),
            view: ViewState::new(locale),
            theme: ThemeController::new(store),
        }
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn locale(&self) -> Locale {
        self.view.locale()
    }

    pub fn theme(&self) -> ThemePreference {
        ThemeController::current(&self.surface)
    }

    pub fn set_year(&mut self, year: i32) {
        self.surface.year = year.to_string();
    }

    pub fn set_local_photo_hint(&mut self, src: Option<String>) {
        self.surface.avatar.local_src = src;
    }

    pub fn search_mut(&mut self) -> &mut String {
        &mut self.surface.search
    }

    pub fn init_theme(&mut self) {
        self.theme.init(&mut self.surface);
    }

    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme.toggle(&mut self.surface)
    }

    /// Filter by whatever is in the search box right now
    pub fn apply_search(&mut self) {
        let query = self.surface.search.clone();
        self.apply_filter(&query);
    }

    pub fn apply_filter(&mut self, query: &str) {
        self.view.apply_filter(query, &mut self.surface);
    }

    pub fn load_more(&mut self) {
        self.view.load_more(&mut self.surface);
    }

    /// The preloaded local photo replaces the avatar and pins it
    pub fn use_local_photo(&mut self, src: String) {
        self.surface.avatar.src = Some(src);
        self.surface.avatar.photo_source = PhotoSource::Local;
    }

    pub fn begin_load(&mut self) {
        let locale = self.locale();
        self.surface.set_status(locale.loading());
    }

    /// Fold a fetch outcome into the state
    pub fn finish_load(&mut self, result: Result<LoadedData>) {
        match result {
            Ok(data) => self.accept(data),
            Err(e) => {
                warn!("Loading repositories failed: {}", e);
                let locale = self.locale();
                self.surface.set_status(locale.load_failed());
                self.surface.load_more_visible = false;
            }
        }
    }

    /// Fetch from `source` and apply the outcome, start to finish
    pub async fn load(&mut self, source: &dyn RepositorySource) {
        self.begin_load();
        let result = loader::fetch(source).await;
        self.finish_load(result);
    }

    fn accept(&mut self, data: LoadedData) {
        let LoadedData {
            profile,
            repositories,
        } = data;

        if let Some(avatar) = profile.avatar_url.clone() {
            if self.surface.avatar.photo_source != PhotoSource::Local {
                self.surface.avatar.src = Some(avatar);
            }
        }

        self.surface.repo_count = loader::display_count(&profile, Some(repositories.as_slice()));

        let kept: Vec<RepositoryRecord> = loader::without_forks(repositories);
        self.view.replace_all(sort_by_recency(&kept));
        self.view.render(&mut self.surface);

        // Always the counting form after a load, even when nothing came back
        let total = self.view.visible_subset().len();
        let shown = self.view.visible_count().min(total);
        let locale = self.locale();
        self.surface.set_status(locale.showing(shown, total));

        info!("Showing {} of {} repositories", shown, total);
    }
}

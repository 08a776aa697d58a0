use tracing::debug;

use crate::card::render_card;
use crate::locale::Locale;
use crate::matcher::matches;
use crate::models::RepositoryRecord;
use crate::sort::sort_by_recency;
use crate::surface::DisplaySurface;

/// Cards revealed per page and per "load more"
pub const PAGE_SIZE: usize = 9;

/// Loaded repositories plus the filtered, paginated view of them
#[derive(Debug, Clone)]
pub struct ViewState {
    all_repositories: Vec<RepositoryRecord>,
    visible_subset: Vec<RepositoryRecord>,
    visible_count: usize,
    locale: Locale,
}

impl ViewState {
    pub fn new(locale: Locale) -> Self {
        Self {
            all_repositories: Vec::new(),
            visible_subset: Vec::new(),
            visible_count: PAGE_SIZE,
            locale,
        }
    }

    pub fn all_repositories(&self) -> &[RepositoryRecord] {
        &self.all_repositories
    }

    pub fn visible_subset(&self) -> &[RepositoryRecord] {
        &self.visible_subset
    }

    /// Unclamped; `render` slices against the subset length
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Swap in a freshly loaded set. It becomes the unfiltered view as-is;
    /// the visible count is left where it was.
    pub fn replace_all(&mut self, repositories: Vec<RepositoryRecord>) {
        self.visible_subset = repositories.clone();
        self.all_repositories = repositories;
    }

    /// Re-filter everything against `query`, newest first, back to the first page
    pub fn apply_filter(&mut self, query: &str, surface: &mut DisplaySurface) {
        let matching = self.all_repositories.iter().filter(|r| matches(r, query));
        self.visible_subset = sort_by_recency(matching);
        self.visible_count = PAGE_SIZE;

        debug!(
            "Filter {:?} kept {} of {} repositories",
            query,
            self.visible_subset.len(),
            self.all_repositories.len()
        );

        self.render(surface);
    }

    /// Reveal one more page
    pub fn load_more(&mut self, surface: &mut DisplaySurface) {
        self.visible_count += PAGE_SIZE;
        self.render(surface);
    }

    /// Replace every card on the surface with the current page, update status
    /// and the load-more control
    pub fn render(&self, surface: &mut DisplaySurface) {
        let shown = self.visible_count.min(self.visible_subset.len());
        let total = self.visible_subset.len();

        surface.cards = self.visible_subset[..shown]
            .iter()
            .map(|r| render_card(r, self.locale))
            .collect();

        if total == 0 {
            surface.load_more_visible = false;
            surface.set_status(self.locale.no_results());
            return;
        }

        surface.load_more_visible = shown < total;
        surface.set_status(self.locale.showing(shown, total));
    }
}

use gitfolio_core::loader::LoadedData;

/// Results of background work, applied by the event loop on its own turn
#[derive(Debug)]
pub enum AppEvent {
    /// The search debounce fired with this query
    FilterReady(String),
    /// Profile and repository fetch settled
    Loaded(gitfolio_core::Result<LoadedData>),
    /// The configured local photo could be read
    LocalPhotoReady(String),
}

//! Data-changing intents emitted by the view models.
//!
//! The engine never calls the host directly. Gestures that represent a
//! data-changing intent produce one of these values, which the
//! composing controller forwards to its `HostDataService`; the result
//! comes back later as a snapshot push.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIntent {
    CreateDir { name: String },
    Rename { path: String, new_name: String },
    /// Carries the confirmation message the host must present first.
    Delete { paths: Vec<String>, confirm: String },
    Copy { paths: Vec<String>, is_move: bool },
    Download { paths: Vec<String> },
    Navigate { path: String },
}

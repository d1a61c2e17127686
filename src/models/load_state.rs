use std::rc::Rc;

use crate::error::FetchError;
use crate::models::entry::Collection;

/// State exposed by `use_remote_data`.
///
/// `Pending` and `Failed` both mean "no collection yet"; views render them
/// the same way. `Failed` only exists so observers can tell them apart.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Pending,
    Loaded(Rc<Collection>),
    Failed(FetchError),
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Pending
    }
}

impl LoadState {
    pub fn loaded(collection: Collection) -> Self {
        LoadState::Loaded(Rc::new(collection))
    }

    pub fn collection(&self) -> Option<&Collection> {
        match self {
            LoadState::Loaded(collection) => Some(collection),
            LoadState::Pending | LoadState::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

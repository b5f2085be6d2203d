//! View models: domain collections composed with disclosure state, ready for a renderer.

use shared::error::ApiError;

pub mod breadcrumbs;
pub mod context;
pub mod events;
pub mod lessons;
pub mod markup;
pub mod menu;
pub mod publication;
pub mod questions;
pub mod reviews;

pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use context::PageContext;
pub use events::{EventParseError, ViewEvent};
pub use lessons::{Chevron, Drawer, LessonLayout};
pub use menu::{FolderMenu, MenuAction, MenuEntry};
pub use publication::PublicationHero;
pub use questions::{AnswerView, QuestionBankView, QuestionPanel};
pub use reviews::{ReviewRow, ReviewThreadView};

/// Fetch lifecycle of a collection as seen by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(ApiError),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

//! Thread entity <-> model mapper

use forum_core::entities::{CreateThread, CreatedThread, Thread};
use forum_core::error::DomainError;

use crate::models::{CreatedThreadModel, ThreadModel};

/// Convert ThreadModel to Thread entity
impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: model.id,
            title: model.title,
            body: model.body,
            owner: model.owner,
            date: model.date.and_utc(),
        }
    }
}

impl TryFrom<CreatedThreadModel> for CreatedThread {
    type Error = DomainError;

    fn try_from(model: CreatedThreadModel) -> Result<Self, Self::Error> {
        CreatedThread::new(model.id, model.title, model.owner)
    }
}

/// Values bound by a thread insert
pub struct ThreadInsert<'a> {
    pub id: String,
    pub title: &'a str,
    pub body: &'a str,
    pub owner: &'a str,
}

impl<'a> ThreadInsert<'a> {
    pub fn new(id: String, thread: &'a CreateThread) -> Self {
        Self {
            id,
            title: &thread.title,
            body: &thread.body,
            owner: &thread.owner,
        }
    }
}

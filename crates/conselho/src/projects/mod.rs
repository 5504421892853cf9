//! Default project kanban: a three-lane task board.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{collections, DocumentId, Saved, StoreError, UserId, UserStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Todo,
    Doing,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    pub title: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub due_date: String,
    pub status: Lane,
}

/// The board grouped by lane, each lane newest first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
    pub todo: Vec<Saved<ProjectTask>>,
    pub doing: Vec<Saved<ProjectTask>>,
    pub done: Vec<Saved<ProjectTask>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ProjectsError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ProjectsService<S> {
    store: Arc<S>,
}

impl<S: UserStore + 'static> ProjectsService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn add_task(
        &self,
        user: &UserId,
        task: &ProjectTask,
    ) -> Result<Saved<ProjectTask>, ProjectsError> {
        let document =
            self.store
                .create(user, collections::PROJECT_TASKS, crate::store::encode(task)?)?;
        Ok(Saved::from_parts(document.id, document.created_at, task.clone()))
    }

    pub fn board(&self, user: &UserId) -> Result<Board, ProjectsError> {
        let mut board = Board::default();
        for document in self.store.list(user, collections::PROJECT_TASKS)? {
            let saved: Saved<ProjectTask> = Saved::from_document(document)?;
            match saved.record.status {
                Lane::Todo => board.todo.push(saved),
                Lane::Doing => board.doing.push(saved),
                Lane::Done => board.done.push(saved),
            }
        }
        Ok(board)
    }

    /// Moves a task to another lane, keeping its other fields.
    pub fn move_task(
        &self,
        user: &UserId,
        id: &DocumentId,
        lane: Lane,
    ) -> Result<(), ProjectsError> {
        let document = self
            .store
            .get(user, collections::PROJECT_TASKS, id)?
            .ok_or(StoreError::NotFound)?;
        let mut task: ProjectTask = document.decode()?;
        task.status = lane;
        self.store
            .put(user, collections::PROJECT_TASKS, id, crate::store::encode(&task)?)?;
        Ok(())
    }

    pub fn remove_task(&self, user: &UserId, id: &DocumentId) -> Result<(), ProjectsError> {
        self.store.delete(user, collections::PROJECT_TASKS, id)?;
        Ok(())
    }

    /// Title of the newest task still to do, for the dashboard overview.
    pub fn next_priority(&self, user: &UserId) -> Result<Option<String>, ProjectsError> {
        let board = self.board(user)?;
        Ok(board.todo.first().map(|saved| saved.record.title.clone()))
    }
}

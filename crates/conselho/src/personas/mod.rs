//! Dream-buyer personas: named profiles built from nine fixed discovery
//! questions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::store::{collections, DocumentId, Saved, StoreError, UserId, UserStore};

/// The nine discovery questions, in order. Answers are stored positionally.
pub const PERSONA_QUESTIONS: [&str; 9] = [
    "Where does your dream buyer go to have fun and socialize? (Be specific)",
    "Where does your dream buyer get information?",
    "What are their biggest frustrations and challenges?",
    "What are their hopes, dreams and desires?",
    "What are their biggest fears?",
    "What is their preferred form of communication?",
    "Which phrases, terms and expressions do they use?",
    "What does their everyday life look like?",
    "What makes them happy?",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    #[serde(default)]
    pub answers: [String; 9],
}

#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD over stored personas.
pub struct PersonaService<S> {
    store: Arc<S>,
}

impl<S: UserStore + 'static> PersonaService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn create(&self, user: &UserId, persona: &Persona) -> Result<Saved<Persona>, PersonaError> {
        let document =
            self.store
                .create(user, collections::SALES_PERSONAS, crate::store::encode(persona)?)?;
        Ok(Saved::from_parts(
            document.id,
            document.created_at,
            persona.clone(),
        ))
    }

    pub fn update(
        &self,
        user: &UserId,
        id: &DocumentId,
        persona: &Persona,
    ) -> Result<(), PersonaError> {
        self.store.put(
            user,
            collections::SALES_PERSONAS,
            id,
            crate::store::encode(persona)?,
        )?;
        Ok(())
    }

    pub fn list(&self, user: &UserId) -> Result<Vec<Saved<Persona>>, PersonaError> {
        self.store
            .list(user, collections::SALES_PERSONAS)?
            .into_iter()
            .map(|document| Saved::from_document(document).map_err(PersonaError::from))
            .collect()
    }

    pub fn delete(&self, user: &UserId, id: &DocumentId) -> Result<(), PersonaError> {
        self.store.delete(user, collections::SALES_PERSONAS, id)?;
        Ok(())
    }
}

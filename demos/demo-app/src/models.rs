use restbase::restbase_crud::Dto;
use restbase::restbase_data::{Audit, Entity};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Note {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            audit: Audit::new(),
        }
    }
}

impl Entity for Note {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

/// Lean list representation — the note body stays behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteSummaryDto {
    pub id: Uuid,
    pub title: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Dto<Note> for NoteSummaryDto {
    fn from_entity(entity: &Note) -> Self {
        Self {
            id: entity.id,
            title: entity.title.clone(),
            audit: entity.audit.clone(),
        }
    }

    fn into_entity(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            body: String::new(),
            audit: self.audit,
        }
    }
}

/// Full detail representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDto {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Dto<Note> for NoteDto {
    fn from_entity(entity: &Note) -> Self {
        Self {
            id: entity.id,
            title: entity.title.clone(),
            body: entity.body.clone(),
            audit: entity.audit.clone(),
        }
    }

    fn into_entity(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            body: self.body,
            audit: self.audit,
        }
    }
}

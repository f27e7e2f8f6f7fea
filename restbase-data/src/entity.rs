use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Audit fields shared by every persisted entity.
///
/// `created_at` is stamped once on first save and immutable after;
/// `updated_at` is restamped on every save; a present `deleted_at` marks the
/// entity soft-deleted. Nothing in this layer ever removes a row physically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default)]
    pub blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Audit {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            blocked: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

impl Default for Audit {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait representing a persisted entity with audit fields and an id.
///
/// Concrete entities embed an [`Audit`] value and expose it through
/// `audit()`/`audit_mut()`; everything else is provided.
///
/// # Example
///
/// ```ignore
/// impl Entity for Note {
///     type Id = Uuid;
///     fn id(&self) -> &Uuid { &self.id }
///     fn audit(&self) -> &Audit { &self.audit }
///     fn audit_mut(&mut self) -> &mut Audit { &mut self.audit }
/// }
/// ```
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Clone + PartialEq + Display + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;
    fn audit(&self) -> &Audit;
    fn audit_mut(&mut self) -> &mut Audit;

    fn blocked(&self) -> bool {
        self.audit().blocked
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.audit().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.audit().updated_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.audit().deleted_at
    }

    /// Soft-deleted ⇔ `deleted_at` is present.
    fn is_deleted(&self) -> bool {
        self.audit().deleted_at.is_some()
    }

    fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.audit_mut().deleted_at = Some(at);
    }

    fn clear_deleted(&mut self) {
        self.audit_mut().deleted_at = None;
    }
}

//! Handlers for the contact intake service.
//!
//! Validation happens before the store is touched; a rejected submission
//! never reaches persistence. In demo mode submissions are acknowledged but
//! nothing is written.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use ssp_core::types::Timestamp;
use ssp_db::models::contact::Contact;

use crate::error::{AppError, AppResult, MSG_LIST_ERROR};
use crate::extract::ContactPayload;
use crate::response::Envelope;
use crate::state::{AppState, Persistence};

pub const MSG_SAVED: &str = "Your details have been saved successfully!";
pub const MSG_SAVED_DEMO: &str =
    "Your details have been received (demo mode: database unavailable, nothing was stored).";
pub const MSG_LIST_DEMO: &str = "Demo mode: database unavailable, no contacts are stored.";

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// The submitted fields as stored, echoed back to the caller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEcho {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
}

impl From<Contact> for ContactEcho {
    fn from(c: Contact) -> Self {
        Self {
            name: c.name,
            email: c.email,
            phone: c.phone,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactSaved {
    pub message: &'static str,
    pub contact: ContactEcho,
}

#[derive(Debug, Serialize)]
pub struct ContactList {
    pub count: usize,
    pub contacts: Vec<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

/// Validate, normalize and store a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    ContactPayload(submission): ContactPayload,
) -> AppResult<impl IntoResponse> {
    let input = submission.normalize()?;

    let body = match &state.persistence {
        Persistence::Available(store) => {
            let contact = store.insert(&input).await?;
            tracing::info!(contact_id = contact.id, "Contact saved");
            ContactSaved {
                message: MSG_SAVED,
                contact: contact.into(),
            }
        }
        Persistence::Degraded => {
            tracing::warn!("Demo mode: contact acknowledged but not stored");
            ContactSaved {
                message: MSG_SAVED_DEMO,
                contact: ContactEcho {
                    name: input.name,
                    email: input.email,
                    phone: input.phone,
                    created_at: Utc::now(),
                },
            }
        }
    };

    Ok((StatusCode::CREATED, Json(Envelope::ok(body))))
}

// ---------------------------------------------------------------------------
// GET /api/contacts
// ---------------------------------------------------------------------------

/// List every stored contact, newest first.
pub async fn list_contacts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let body = match &state.persistence {
        Persistence::Available(store) => {
            let contacts = store
                .list_newest_first()
                .await
                .map_err(|source| AppError::Store {
                    message: MSG_LIST_ERROR,
                    source,
                })?;
            tracing::debug!(count = contacts.len(), "Listed contacts");
            ContactList {
                count: contacts.len(),
                contacts,
                message: None,
            }
        }
        Persistence::Degraded => ContactList {
            count: 0,
            contacts: Vec::new(),
            message: Some(MSG_LIST_DEMO),
        },
    };

    Ok(Json(Envelope::ok(body)))
}

//! Dashboard controller: the add-property modal, transient notifications and
//! the list of property cards.
//!
//! All wizard guards are swallowed here. A click on a disabled control is a
//! no-op, not an error, so the methods below simply leave state unchanged
//! when the underlying [`WizardSession`] rejects an action.

use std::time::Duration;

use serde::Serialize;

use crate::property::PropertyType;
use crate::property_wizard::{PropertyIdPolicy, WizardSession, WizardStep};
use crate::wizard_view::{self, WizardView};

/// Delay between the activation notification and the modal closing.
pub const ACTIVATION_CLOSE_DELAY: Duration = Duration::from_millis(2000);

pub const MSG_PROPERTY_ACTIVATED: &str =
    "Property activated successfully! You will receive email confirmation shortly.";
pub const MSG_PLACEMENT_ADDED: &str = "Placement added successfully!";
pub const MSG_CODE_COPIED: &str = "Code copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy code";
pub const MSG_DASHBOARD_REFRESHED: &str = "Dashboard refreshed!";

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient in-page message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

// ---------------------------------------------------------------------------
// Property cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Active,
    Pending,
}

/// One labelled figure on a property card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Read-only summary card shown in the properties grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyCard {
    pub title: String,
    pub subtitle: String,
    pub property_type: PropertyType,
    pub status: CardStatus,
    pub metrics: Vec<Metric>,
}

impl PropertyCard {
    /// Card for a property that was just created: pending, nothing served yet.
    pub fn just_created(property_type: PropertyType) -> Self {
        Self {
            title: format!("New {}", property_type.label()),
            subtitle: format!("{} \u{2022} Just Created", property_type.label()),
            property_type,
            status: CardStatus::Pending,
            metrics: vec![
                Metric { label: "Revenue", value: "$0".into() },
                Metric { label: "Fill Rate", value: "0%".into() },
                Metric { label: "eCPM", value: "$0.00".into() },
                Metric { label: "Impressions", value: "0".into() },
            ],
        }
    }
}

/// An activation that has been announced but not yet applied.
///
/// Apply it with [`Dashboard::finish_activation`] once
/// [`PendingActivation::close_after`] has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingActivation {
    pub close_after: Duration,
    pub card: PropertyCard,
}

// ---------------------------------------------------------------------------
// Keyboard shortcuts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false, meta: false }
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Client-side dashboard state. At most one wizard is open at a time.
#[derive(Debug, Default)]
pub struct Dashboard {
    wizard: Option<WizardSession>,
    properties: Vec<PropertyCard>,
    notifications: Vec<Notification>,
    property_id_policy: PropertyIdPolicy,
}

impl Dashboard {
    pub fn new(property_id_policy: PropertyIdPolicy) -> Self {
        Self {
            property_id_policy,
            ..Self::default()
        }
    }

    /// Open the add-property modal with a fresh wizard. Reopening resets it.
    pub fn open_modal(&mut self) {
        self.wizard = Some(WizardSession::with_policy(self.property_id_policy));
    }

    /// Close the modal, discarding the wizard session.
    pub fn close_modal(&mut self) {
        self.wizard = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.wizard.is_some()
    }

    pub fn wizard(&self) -> Option<&WizardSession> {
        self.wizard.as_ref()
    }

    /// Current step of the open wizard.
    pub fn current_step(&self) -> Option<WizardStep> {
        self.wizard.as_ref().map(WizardSession::current_step)
    }

    /// View model of the open wizard.
    pub fn wizard_view(&self) -> Option<WizardView> {
        self.wizard.as_ref().map(wizard_view::render)
    }

    pub fn properties(&self) -> &[PropertyCard] {
        &self.properties
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hand the queued notifications to the renderer.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn select_property_type(&mut self, property_type: PropertyType) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.select_property_type(property_type);
        }
    }

    /// "Next" / "Continue". Ignored while its guard does not hold.
    pub fn next_step(&mut self, target: u8) {
        if let Some(wizard) = self.wizard.as_mut() {
            let _ = wizard.advance(target);
        }
    }

    pub fn previous_step(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.go_back();
        }
    }

    pub fn add_placement(&mut self) {
        let Some(wizard) = self.wizard.as_mut() else {
            return;
        };
        if wizard.add_placement().is_ok() {
            self.notify(MSG_PLACEMENT_ADDED, NotificationKind::Success);
        }
    }

    /// Return the snippet to put on the clipboard.
    pub fn copy_integration_code(&mut self) -> Option<String> {
        let code = self
            .wizard
            .as_ref()
            .and_then(|w| w.integration_code())
            .map(|c| c.snippet.clone());
        match code {
            Some(_) => self.notify(MSG_CODE_COPIED, NotificationKind::Success),
            None => self.notify(MSG_COPY_FAILED, NotificationKind::Error),
        }
        code
    }

    pub fn refresh(&mut self) {
        self.notify(MSG_DASHBOARD_REFRESHED, NotificationKind::Success);
    }

    /// Ask to open a property's details page.
    pub fn view_property(&mut self, property_id: &str) {
        self.notify(
            &format!("Opening property details for {property_id}"),
            NotificationKind::Info,
        );
    }

    /// Announce activation of the wizard's property.
    ///
    /// Returns `None` (and does nothing) unless the wizard is open on the
    /// summary step. No server-side record is created.
    pub fn activate(&mut self) -> Option<PendingActivation> {
        let property_type = self.wizard.as_ref()?.ready_to_activate().ok()?;
        self.notify(MSG_PROPERTY_ACTIVATED, NotificationKind::Success);
        Some(PendingActivation {
            close_after: ACTIVATION_CLOSE_DELAY,
            card: PropertyCard::just_created(property_type),
        })
    }

    /// Close the modal and append the new property's card.
    pub fn finish_activation(&mut self, pending: PendingActivation) {
        self.close_modal();
        self.properties.push(pending.card);
    }

    /// Escape closes the modal; Ctrl/Cmd+K opens it. Returns whether the key
    /// was handled.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        match press.key {
            Key::Escape if self.is_modal_open() => {
                self.close_modal();
                true
            }
            Key::Char('k') if press.ctrl || press.meta => {
                self.open_modal();
                true
            }
            _ => false,
        }
    }

    fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.push(Notification {
            message: message.to_string(),
            kind,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

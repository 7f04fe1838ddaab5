//! Add-property wizard state machine.
//!
//! The wizard walks an operator through five linear steps:
//!
//! ```text
//! 1 PropertyType -> 2 PlacementSetup -> 3 CreativeSettings -> 4 Integration -> 5 Summary
//! ```
//!
//! A [`WizardSession`] is an explicit value owned by whoever drives the UI.
//! Guards never panic and never partially apply: a rejected transition returns
//! a [`GuardViolation`] and leaves the session exactly as it was. The UI layer
//! treats those as silent no-ops.

use serde::{Deserialize, Serialize};

use crate::integration_code::{generate_property_id, render_integration_code, IntegrationCode};
use crate::property::{CreativeSettings, Placement, PropertyType};

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The five steps of the add-property wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PropertyType,
    PlacementSetup,
    CreativeSettings,
    Integration,
    Summary,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 5;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 5;

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; TOTAL_STEPS as usize] = [
        WizardStep::PropertyType,
        WizardStep::PlacementSetup,
        WizardStep::CreativeSettings,
        WizardStep::Integration,
        WizardStep::Summary,
    ];

    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, GuardViolation> {
        match n {
            1 => Ok(Self::PropertyType),
            2 => Ok(Self::PlacementSetup),
            3 => Ok(Self::CreativeSettings),
            4 => Ok(Self::Integration),
            5 => Ok(Self::Summary),
            _ => Err(GuardViolation::StepOutOfRange(n)),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::PropertyType => 1,
            Self::PlacementSetup => 2,
            Self::CreativeSettings => 3,
            Self::Integration => 4,
            Self::Summary => 5,
        }
    }

    /// Human-readable label for the progress indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::PropertyType => "Property Type",
            Self::PlacementSetup => "Placements",
            Self::CreativeSettings => "Creative Settings",
            Self::Integration => "Integration",
            Self::Summary => "Summary",
        }
    }
}

// ---------------------------------------------------------------------------
// Guards
// ---------------------------------------------------------------------------

/// Why a wizard action was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GuardViolation {
    #[error("Select a property type before continuing")]
    PropertyTypeNotSelected,

    #[error("Step {0} is out of range ({MIN_STEP}..={MAX_STEP})")]
    StepOutOfRange(u8),

    #[error("A property can only be activated from the summary step")]
    NotOnSummary,
}

// ---------------------------------------------------------------------------
// Property identifier policy
// ---------------------------------------------------------------------------

/// Whether the integration step reuses one property identifier per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyIdPolicy {
    /// A new identifier every time the integration step is entered.
    #[default]
    Ephemeral,
    /// One identifier, drawn on first entry, reused for the whole session.
    SessionStable,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// State of one open add-property wizard.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSession {
    current_step: WizardStep,
    selected_property_type: Option<PropertyType>,
    placements: Vec<Placement>,
    creative_settings: CreativeSettings,
    integration_code: Option<IntegrationCode>,
    property_id_policy: PropertyIdPolicy,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// A fresh session on step 1 with nothing selected.
    pub fn new() -> Self {
        Self::with_policy(PropertyIdPolicy::default())
    }

    pub fn with_policy(property_id_policy: PropertyIdPolicy) -> Self {
        Self {
            current_step: WizardStep::PropertyType,
            selected_property_type: None,
            placements: Vec::new(),
            creative_settings: CreativeSettings::default(),
            integration_code: None,
            property_id_policy,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn selected_property_type(&self) -> Option<PropertyType> {
        self.selected_property_type
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn creative_settings(&self) -> &CreativeSettings {
        &self.creative_settings
    }

    pub fn integration_code(&self) -> Option<&IntegrationCode> {
        self.integration_code.as_ref()
    }

    pub fn property_id_policy(&self) -> PropertyIdPolicy {
        self.property_id_policy
    }

    /// Whether the "Next" control on step 1 is enabled.
    pub fn can_advance(&self) -> bool {
        self.selected_property_type.is_some()
    }

    /// Select the property type. Placements configured for a different type
    /// are dropped, since their vocabulary no longer applies.
    pub fn select_property_type(&mut self, property_type: PropertyType) {
        if self.selected_property_type != Some(property_type) {
            self.placements.clear();
        }
        self.selected_property_type = Some(property_type);
    }

    /// Move to the 1-based step `target` and load its content.
    ///
    /// Any step past the first requires a selected property type.
    pub fn advance(&mut self, target: u8) -> Result<WizardStep, GuardViolation> {
        let step = WizardStep::from_number(target)?;
        if step != WizardStep::PropertyType && self.selected_property_type.is_none() {
            return Err(GuardViolation::PropertyTypeNotSelected);
        }
        self.enter(step);
        Ok(step)
    }

    /// Go back one step. Stays on step 1 when already there.
    pub fn go_back(&mut self) -> WizardStep {
        let current = self.current_step.to_number();
        if current > MIN_STEP {
            // The previous step of a reachable step always has its precondition met.
            if let Ok(step) = WizardStep::from_number(current - 1) {
                self.enter(step);
            }
        }
        self.current_step
    }

    /// Append another default placement for the selected type.
    pub fn add_placement(&mut self) -> Result<&Placement, GuardViolation> {
        let property_type = self
            .selected_property_type
            .ok_or(GuardViolation::PropertyTypeNotSelected)?;
        let index = self.placements.len() + 1;
        self.placements.push(Placement::default_for(property_type, index));
        Ok(&self.placements[index - 1])
    }

    /// The property type to activate, provided the wizard is on its last step.
    pub fn ready_to_activate(&self) -> Result<PropertyType, GuardViolation> {
        if self.current_step != WizardStep::Summary {
            return Err(GuardViolation::NotOnSummary);
        }
        self.selected_property_type
            .ok_or(GuardViolation::PropertyTypeNotSelected)
    }

    fn enter(&mut self, step: WizardStep) {
        self.current_step = step;
        let Some(property_type) = self.selected_property_type else {
            return;
        };
        match step {
            WizardStep::PlacementSetup if self.placements.is_empty() => {
                self.placements.push(Placement::default_for(property_type, 1));
            }
            WizardStep::Integration => {
                let property_id = match (&self.integration_code, self.property_id_policy) {
                    (Some(code), PropertyIdPolicy::SessionStable) => code.property_id.clone(),
                    _ => generate_property_id(&mut rand::rng()),
                };
                self.integration_code = Some(render_integration_code(property_type, property_id));
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

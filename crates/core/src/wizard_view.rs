//! Pure view model for the add-property wizard.
//!
//! [`render`] maps a [`WizardSession`] to everything a front end needs to
//! draw the current step. It holds no rendering technology of its own, so
//! the wizard can be driven and inspected headlessly.

use serde::Serialize;

use crate::property::{
    CreativeSettings, FrequencyCap, Placement, PropertyType, BLOCKABLE_CATEGORIES,
    CREATIVE_FORMATS, CREATIVE_SIZE_CHOICES_KB, VIDEO_LENGTH_CHOICES_SECS,
};
use crate::property_wizard::{WizardSession, WizardStep};

/// Summary status shown for a freshly configured property.
pub const PENDING_ACTIVATION: &str = "Pending Activation";

const INTEGRATION_TIPS: [&str; 3] = [
    "Place the code before the closing </body> tag",
    "Test on a staging environment first",
    "Monitor console for any errors",
];

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// Position of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    pub number: u8,
    pub label: &'static str,
    pub state: StepState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeOption {
    pub property_type: PropertyType,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyCapOption {
    pub value: FrequencyCap,
    pub label: &'static str,
}

/// Content of the visible step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepContent {
    PropertyType {
        options: Vec<TypeOption>,
        next_enabled: bool,
    },
    PlacementSetup {
        placements: Vec<Placement>,
        placement_types: Vec<&'static str>,
        size_label: &'static str,
        size_options: Vec<&'static str>,
        frequency_caps: Vec<FrequencyCapOption>,
    },
    CreativeSettings {
        settings: CreativeSettings,
        format_choices: Vec<&'static str>,
        video_length_choices_secs: Vec<u32>,
        creative_size_choices_kb: Vec<u32>,
        blockable_categories: Vec<&'static str>,
    },
    Integration {
        format_label: &'static str,
        target_noun: &'static str,
        code: String,
        tips: Vec<&'static str>,
    },
    Summary {
        property_type_label: &'static str,
        placement_count: usize,
        status: &'static str,
        integration: &'static str,
        next_steps: Vec<String>,
    },
}

/// Everything needed to draw the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    pub progress: Vec<ProgressStep>,
    pub content: StepContent,
    pub back_enabled: bool,
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Build the view model for the session's current step.
pub fn render(session: &WizardSession) -> WizardView {
    let current = session.current_step();
    let progress = WizardStep::ALL
        .iter()
        .map(|&step| ProgressStep {
            number: step.to_number(),
            label: step.label(),
            state: match step.cmp(&current) {
                std::cmp::Ordering::Less => StepState::Completed,
                std::cmp::Ordering::Equal => StepState::Active,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            },
        })
        .collect();

    WizardView {
        progress,
        content: step_content(session),
        back_enabled: current != WizardStep::PropertyType,
    }
}

fn step_content(session: &WizardSession) -> StepContent {
    let selected = session.selected_property_type();
    // Steps past the first are unreachable without a type; fall back to the
    // chooser if a caller hands us an inconsistent session anyway.
    let property_type = match (session.current_step(), selected) {
        (WizardStep::PropertyType, _) | (_, None) => return type_choice(selected),
        (_, Some(t)) => t,
    };

    match session.current_step() {
        WizardStep::PropertyType => type_choice(selected),
        WizardStep::PlacementSetup => StepContent::PlacementSetup {
            placements: session.placements().to_vec(),
            placement_types: property_type.placement_types().to_vec(),
            size_label: property_type.size_label(),
            size_options: property_type.size_options().to_vec(),
            frequency_caps: FrequencyCap::ALL
                .iter()
                .map(|&value| FrequencyCapOption {
                    value,
                    label: value.label(),
                })
                .collect(),
        },
        WizardStep::CreativeSettings => StepContent::CreativeSettings {
            settings: session.creative_settings().clone(),
            format_choices: CREATIVE_FORMATS.to_vec(),
            video_length_choices_secs: VIDEO_LENGTH_CHOICES_SECS.to_vec(),
            creative_size_choices_kb: CREATIVE_SIZE_CHOICES_KB.to_vec(),
            blockable_categories: BLOCKABLE_CATEGORIES.to_vec(),
        },
        WizardStep::Integration => StepContent::Integration {
            format_label: crate::integration_code::format_label(property_type),
            target_noun: match property_type {
                PropertyType::Website => "website",
                _ => "application",
            },
            code: session
                .integration_code()
                .map(|c| c.snippet.clone())
                .unwrap_or_default(),
            tips: INTEGRATION_TIPS.to_vec(),
        },
        WizardStep::Summary => StepContent::Summary {
            property_type_label: property_type.label(),
            placement_count: session.placements().len(),
            status: PENDING_ACTIVATION,
            integration: if session.integration_code().is_some() {
                "Code generated"
            } else {
                "Not generated"
            },
            next_steps: vec![
                format!(
                    "Implement the integration code on your {}",
                    property_type.label()
                ),
                "Property will be reviewed within 24 hours".to_string(),
                "You'll receive email confirmation once approved".to_string(),
            ],
        },
    }
}

fn type_choice(selected: Option<PropertyType>) -> StepContent {
    StepContent::PropertyType {
        options: PropertyType::ALL
            .iter()
            .map(|&t| TypeOption {
                property_type: t,
                label: t.label(),
                selected: selected == Some(t),
            })
            .collect(),
        next_enabled: selected.is_some(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn states(view: &WizardView) -> Vec<StepState> {
        view.progress.iter().map(|p| p.state).collect()
    }

    #[test]
    fn fresh_session_shows_type_chooser_with_next_disabled() {
        let view = render(&WizardSession::new());
        assert!(!view.back_enabled);
        assert_matches!(
            view.content,
            StepContent::PropertyType { ref options, next_enabled: false }
                if options.len() == 4 && options.iter().all(|o| !o.selected)
        );
        assert_eq!(
            states(&view),
            [
                StepState::Active,
                StepState::Upcoming,
                StepState::Upcoming,
                StepState::Upcoming,
                StepState::Upcoming
            ]
        );
    }

    #[test]
    fn selection_is_reflected_in_chooser() {
        let mut s = WizardSession::new();
        s.select_property_type(PropertyType::MobileApp);
        let StepContent::PropertyType { options, next_enabled } = render(&s).content else {
            panic!("expected property type step");
        };
        assert!(next_enabled);
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].property_type, PropertyType::MobileApp);
    }

    #[test]
    fn ctv_placement_step_uses_ctv_vocabulary() {
        let mut s = WizardSession::new();
        s.select_property_type(PropertyType::Ctv);
        s.advance(2).unwrap();
        let view = render(&s);
        assert_eq!(
            states(&view)[..2],
            [StepState::Completed, StepState::Active]
        );
        let StepContent::PlacementSetup {
            placement_types,
            size_options,
            size_label,
            placements,
            frequency_caps,
        } = view.content
        else {
            panic!("expected placement step");
        };
        assert_eq!(placement_types, ["Pre-roll", "Mid-roll", "Post-roll", "Ad Pod"]);
        assert_eq!(size_options, ["15s", "30s", "60s", "Custom"]);
        assert_eq!(size_label, "Duration");
        assert_eq!(placements.len(), 1);
        assert_eq!(frequency_caps.len(), 4);
    }

    #[test]
    fn creative_step_exposes_defaults() {
        let mut s = WizardSession::new();
        s.select_property_type(PropertyType::Website);
        s.advance(3).unwrap();
        let StepContent::CreativeSettings { settings, .. } = render(&s).content else {
            panic!("expected creative settings step");
        };
        assert_eq!(settings.max_video_length_secs, 30);
        assert_eq!(settings.max_creative_size_kb, 500);
        assert!(!settings.manual_review);
    }

    #[test]
    fn integration_step_shows_generated_code() {
        let mut s = WizardSession::new();
        s.select_property_type(PropertyType::Website);
        s.advance(4).unwrap();
        let expected = s.integration_code().unwrap().snippet.clone();
        let StepContent::Integration { code, format_label, target_noun, .. } = render(&s).content
        else {
            panic!("expected integration step");
        };
        assert_eq!(code, expected);
        assert_eq!(format_label, "JavaScript Tag");
        assert_eq!(target_noun, "website");
    }

    #[test]
    fn summary_counts_placements() {
        let mut s = WizardSession::new();
        s.select_property_type(PropertyType::Dooh);
        s.advance(2).unwrap();
        s.add_placement().unwrap();
        s.advance(4).unwrap();
        s.advance(5).unwrap();
        let view = render(&s);
        assert!(view.back_enabled);
        assert_matches!(
            view.content,
            StepContent::Summary {
                property_type_label: "DOOH",
                placement_count: 2,
                status: PENDING_ACTIVATION,
                integration: "Code generated",
                ..
            }
        );
    }

    #[test]
    fn view_serializes_with_step_tag() {
        let json = serde_json::to_value(render(&WizardSession::new())).unwrap();
        assert_eq!(json["content"]["step"], "property_type");
        assert_eq!(json["progress"][0]["state"], "active");
    }
}

//! Property types and the per-type placement vocabulary.
//!
//! A property is an ad-serving surface being onboarded. Each of the four
//! property types carries a fixed table of placement types and size (or
//! duration) options that the placement step offers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Property type
// ---------------------------------------------------------------------------

/// The kind of ad-serving surface being onboarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Website,
    MobileApp,
    Ctv,
    Dooh,
}

impl PropertyType {
    /// All property types in the order the wizard presents them.
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Website,
        PropertyType::MobileApp,
        PropertyType::Ctv,
        PropertyType::Dooh,
    ];

    /// Parse a kebab-case slug (`website`, `mobile-app`, `ctv`, `dooh`).
    pub fn from_slug(s: &str) -> Result<Self, CoreError> {
        match s {
            "website" => Ok(Self::Website),
            "mobile-app" => Ok(Self::MobileApp),
            "ctv" => Ok(Self::Ctv),
            "dooh" => Ok(Self::Dooh),
            _ => Err(CoreError::Validation(format!(
                "Invalid property type '{s}'. Must be one of: website, mobile-app, ctv, dooh"
            ))),
        }
    }

    /// Kebab-case slug, identical to the serialized form.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::MobileApp => "mobile-app",
            Self::Ctv => "ctv",
            Self::Dooh => "dooh",
        }
    }

    /// Human-readable label used on cards and in the summary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::MobileApp => "Mobile App",
            Self::Ctv => "CTV",
            Self::Dooh => "DOOH",
        }
    }

    /// Placement types offered for this property type.
    pub fn placement_types(self) -> &'static [&'static str] {
        match self {
            Self::Website => &["Banner", "Native", "Video", "Sticky", "Outstream"],
            Self::MobileApp => &["Banner", "Interstitial", "Native", "Rewarded Video", "Playable"],
            Self::Ctv => &["Pre-roll", "Mid-roll", "Post-roll", "Ad Pod"],
            Self::Dooh => &["Screen Zone", "Loop Slot", "Takeover"],
        }
    }

    /// Size (or, for CTV, duration) options offered for this property type.
    pub fn size_options(self) -> &'static [&'static str] {
        match self {
            Self::Website => &["728x90", "300x250", "320x50", "160x600", "970x250"],
            Self::MobileApp => &["320x50", "300x250", "728x90", "Fullscreen", "300x600"],
            Self::Ctv => &["15s", "30s", "60s", "Custom"],
            Self::Dooh => &["1920x1080", "1080x1920", "3840x2160", "Custom"],
        }
    }

    /// Form label for the size column: CTV slots are sized by duration.
    pub fn size_label(self) -> &'static str {
        match self {
            Self::Ctv => "Duration",
            _ => "Size/Format",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

// ---------------------------------------------------------------------------
// Frequency caps
// ---------------------------------------------------------------------------

/// How often a single user may be shown a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyCap {
    #[default]
    NoLimit,
    #[serde(rename = "1-per-session")]
    OnePerSession,
    #[serde(rename = "3-per-hour")]
    ThreePerHour,
    #[serde(rename = "5-per-day")]
    FivePerDay,
}

impl FrequencyCap {
    pub const ALL: [FrequencyCap; 4] = [
        FrequencyCap::NoLimit,
        FrequencyCap::OnePerSession,
        FrequencyCap::ThreePerHour,
        FrequencyCap::FivePerDay,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::NoLimit => "No Limit",
            Self::OnePerSession => "1 per Session",
            Self::ThreePerHour => "3 per Hour",
            Self::FivePerDay => "5 per Day",
        }
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// A single ad slot definition within a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub placement_type: String,
    pub size: String,
    pub frequency_cap: FrequencyCap,
}

impl Placement {
    /// The default placement for a property type: first placement type,
    /// first size option, no frequency cap. `index` is 1-based.
    pub fn default_for(property_type: PropertyType, index: usize) -> Self {
        Self {
            name: format!("Placement #{index}"),
            placement_type: property_type.placement_types()[0].to_string(),
            size: property_type.size_options()[0].to_string(),
            frequency_cap: FrequencyCap::NoLimit,
        }
    }
}

// ---------------------------------------------------------------------------
// Creative settings
// ---------------------------------------------------------------------------

/// Creative constraints for a property. Only the defaults are ever used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreativeSettings {
    pub allowed_formats: Vec<&'static str>,
    pub max_video_length_secs: u32,
    pub max_creative_size_kb: u32,
    pub blocked_categories: Vec<&'static str>,
    pub manual_review: bool,
}

/// Creative formats a property can allow.
pub const CREATIVE_FORMATS: [&str; 4] = ["Banner Ads", "Video Ads", "Native Ads", "Playable Ads"];

/// Max video length choices, in seconds.
pub const VIDEO_LENGTH_CHOICES_SECS: [u32; 4] = [15, 30, 60, 120];

/// Max creative size choices, in kilobytes.
pub const CREATIVE_SIZE_CHOICES_KB: [u32; 4] = [150, 500, 1000, 3000];

/// Content categories a property can block.
pub const BLOCKABLE_CATEGORIES: [&str; 4] = ["Gambling", "Politics", "Adult Content", "Alcohol"];

impl Default for CreativeSettings {
    fn default() -> Self {
        Self {
            allowed_formats: vec!["Banner Ads", "Video Ads"],
            max_video_length_secs: 30,
            max_creative_size_kb: 500,
            blocked_categories: Vec::new(),
            manual_review: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

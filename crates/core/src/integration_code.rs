//! Integration snippet generation.
//!
//! Each property type gets one fixed template (ad tag, SDK call, VAST URLs or
//! an API request example) with a property identifier interpolated.

use rand::Rng;
use serde::Serialize;

use crate::property::PropertyType;

/// Prefix of every generated property identifier.
pub const PROPERTY_ID_PREFIX: &str = "prop_";

/// Number of random characters after the prefix.
pub const PROPERTY_ID_SUFFIX_LENGTH: usize = 9;

const PROPERTY_ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A generated snippet together with the identifier baked into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrationCode {
    pub property_id: String,
    pub format_label: &'static str,
    pub snippet: String,
}

/// Generate a property identifier of the form `prop_[a-z0-9]{9}`.
pub fn generate_property_id<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..PROPERTY_ID_SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..PROPERTY_ID_CHARSET.len());
            PROPERTY_ID_CHARSET[idx] as char
        })
        .collect();
    format!("{PROPERTY_ID_PREFIX}{suffix}")
}

/// Generate integration code for `property_type` with a fresh identifier.
///
/// Every call draws a new identifier, so two calls for the same type never
/// share one (barring a 36^9 collision).
pub fn generate_integration_code(property_type: PropertyType) -> IntegrationCode {
    let property_id = generate_property_id(&mut rand::rng());
    render_integration_code(property_type, property_id)
}

/// Render the template for `property_type` around an existing identifier.
pub fn render_integration_code(property_type: PropertyType, property_id: String) -> IntegrationCode {
    let snippet = match property_type {
        PropertyType::Website => website_tag(&property_id),
        PropertyType::MobileApp => mobile_sdk(&property_id),
        PropertyType::Ctv => vast_urls(&property_id),
        PropertyType::Dooh => dooh_api_request(&property_id),
    };
    IntegrationCode {
        property_id,
        format_label: format_label(property_type),
        snippet,
    }
}

/// Heading shown above the snippet.
pub fn format_label(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::Website => "JavaScript Tag",
        PropertyType::MobileApp => "SDK Integration",
        PropertyType::Ctv => "VAST URL",
        PropertyType::Dooh => "API Endpoint",
    }
}

fn website_tag(property_id: &str) -> String {
    format!(
        r#"<!-- SSP Ad Tag -->
<script>
  window.sspConfig = {{
    propertyId: '{property_id}',
    placements: {{
      'homepage-banner': {{
        id: 'placement-1',
        size: [728, 90],
        type: 'banner'
      }}
    }}
  }};
</script>
<script src="https://cdn.ssppro.com/ssp.min.js" async></script>

<!-- Placement Container -->
<div id="ssp-placement-1"></div>"#
    )
}

fn mobile_sdk(property_id: &str) -> String {
    format!(
        r#"// iOS SDK Integration (Swift)
import SSPProSDK

// Initialize SDK in AppDelegate
func application(_ application: UIApplication,
                didFinishLaunchingWithOptions launchOptions: [UIApplication.LaunchOptionsKey: Any]?) -> Bool {{
    SSPPro.initialize(propertyId: "{property_id}")
    return true
}}

// Load Banner Ad
let bannerAd = SSPBannerAd(placementId: "placement-1")
bannerAd.load()"#
    )
}

fn vast_urls(property_id: &str) -> String {
    format!(
        "<!-- VAST Tag URL -->\n\
         https://ad.ssppro.com/vast?property={property_id}&placement=placement-1\n\
         \n\
         <!-- VMAP URL for Ad Pods -->\n\
         https://ad.ssppro.com/vmap?property={property_id}&duration=30&pods=3"
    )
}

fn dooh_api_request(property_id: &str) -> String {
    format!(
        r#"// DOOH API Integration
const sspConfig = {{
  propertyId: '{property_id}',
  screenId: 'screen-001',
  location: {{
    lat: 40.7128,
    lng: -74.0060
  }}
}};

// Fetch ad content
fetch('https://api.ssppro.com/dooh/ad-request', {{
  method: 'POST',
  headers: {{ 'Content-Type': 'application/json' }},
  body: JSON.stringify(sspConfig)
}})
.then(response => response.json())
.then(ad => displayAd(ad));"#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

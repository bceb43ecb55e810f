//! Practice (tenant) records and their selection.
//!
//! A practice is one clinic's branding, service menu and scripted assistant
//! behavior. Records are compiled into the binary as `'static` values and are
//! never mutated; selecting a tenant is a lookup in [`PracticeRegistry`].
//!
//! # Modules
//! - `catalog`: the static practice records
//! - `registry`: lookup by id/subdomain, default fallback and pinning

pub mod catalog;
pub mod registry;

pub use catalog::{ARENA_FYSIO_AMSTERDAM, CATALOG, SHAFER_CLINIC};
pub use registry::{DEFAULT_PRACTICE_ID, PracticeRegistry, subdomain_from_host};

use serde::Serialize;

/// Kind of practice, used for copy and styling choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeType {
    Chiropractic,
    Wellness,
    Beauty,
    Cosmetic,
}

impl PracticeType {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chiropractic => "chiropractic",
            Self::Wellness => "wellness",
            Self::Beauty => "beauty",
            Self::Cosmetic => "cosmetic",
        }
    }
}

impl std::fmt::Display for PracticeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chat assistant script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatConfig {
    /// Display name of the assistant (e.g., "Robin")
    pub assistant_name: &'static str,
    /// Greeting shown when the chat widget opens
    pub initial_message: &'static str,
    /// System prompt handed to the conversational AI vendor
    pub system_prompt: &'static str,
}

/// Telephone/voice channel script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// First utterance of the voice agent when a call connects
    pub first_message: &'static str,
}

/// One entry of the service menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    /// CSS color, e.g. "#1a365d"
    pub primary_color: &'static str,
    pub tagline: &'static str,
    pub focus: &'static str,
}

/// Complete configuration of one practice.
///
/// Serializes with the camelCase field names the browser widgets expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub doctor: &'static str,
    pub location: &'static str,
    /// Identifier of the voice agent at the conversational AI vendor
    pub agent_id: &'static str,
    #[serde(rename = "type")]
    pub practice_type: PracticeType,
    /// Port the practice was historically served on
    pub port: u16,
    pub subdomain: &'static str,
    pub chat: ChatConfig,
    pub voice: VoiceConfig,
    /// Service menu, in display order
    pub services: &'static [Service],
    pub branding: Branding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_type_display() {
        assert_eq!(PracticeType::Wellness.to_string(), "wellness");
        assert_eq!(PracticeType::Cosmetic.as_str(), "cosmetic");
    }

    #[test]
    fn test_practice_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(&SHAFER_CLINIC).unwrap();

        assert_eq!(value["id"], "shafer-clinic");
        assert_eq!(value["type"], "cosmetic");
        assert_eq!(value["agentId"], "agent_shafer_clinic_manhattan");
        assert_eq!(value["chat"]["assistantName"], "Robin");
        assert!(value["chat"]["systemPrompt"].is_string());
        assert!(value["voice"]["firstMessage"].is_string());
        assert_eq!(value["branding"]["primaryColor"], "#1a365d");
        assert_eq!(value["services"][0]["duration"], "60 minutes");
    }

    #[test]
    fn test_service_without_duration_omits_field() {
        let service = Service {
            name: "Intake",
            description: "First visit",
            duration: None,
        };
        let value = serde_json::to_value(&service).unwrap();
        assert!(value.get("duration").is_none());
    }
}

//! Wire shapes of the SmartLearn API.

use serde::Deserialize;
use serde_json::Value;

use sl_core::onboarding::{AgeRange, Grade, OnboardingProfile};

/// `GET/POST /onboarding/me/info` response. The server sends empty strings
/// or nulls for fields that were never saved.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InfoResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
}

impl InfoResponse {
    /// `None` when no name has been saved yet. Unknown age ranges fall back
    /// to the default and unknown grades to none.
    pub fn into_profile(self) -> Option<OnboardingProfile> {
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        let age_range = self
            .age_range
            .and_then(|raw| raw.parse::<AgeRange>().ok())
            .unwrap_or_default();
        let grade = self
            .grade
            .and_then(|raw| Grade::parse(&raw).ok())
            .flatten();
        Some(OnboardingProfile {
            name,
            age_range,
            grade,
        })
    }
}

/// Message from an error body: `detail` first, then `message`.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["detail", "message"]
        .into_iter()
        .find_map(|field| value.get(field).and_then(Value::as_str))
        .map(str::to_string)
}

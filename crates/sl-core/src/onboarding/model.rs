//! Onboarding records.
//!
//! Field names serialize in camelCase so the stored JSON keeps the shape the
//! web client and the remote API agree on (`ageRange`, `handsOn`).

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use super::OnboardingError;

/// Age bracket chosen at step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "6-8")]
    SixToEight,
    #[serde(rename = "9-11")]
    NineToEleven,
    #[serde(rename = "11-14")]
    ElevenToFourteen,
    #[serde(rename = "15+")]
    FifteenPlus,
}

impl AgeRange {
    pub const ALL: [AgeRange; 4] = [
        AgeRange::SixToEight,
        AgeRange::NineToEleven,
        AgeRange::ElevenToFourteen,
        AgeRange::FifteenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeRange::SixToEight => "6-8",
            AgeRange::NineToEleven => "9-11",
            AgeRange::ElevenToFourteen => "11-14",
            AgeRange::FifteenPlus => "15+",
        }
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        AgeRange::NineToEleven
    }
}

impl FromStr for AgeRange {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeRange::ALL
            .into_iter()
            .find(|range| range.as_str() == s.trim())
            .ok_or_else(|| OnboardingError::InvalidAgeRange(s.to_string()))
    }
}

impl Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grades offered by the step-1 picker, in order.
pub const GRADES: [&str; 13] = [
    "Kindergarten",
    "1st",
    "2nd",
    "3rd",
    "4th",
    "5th",
    "6th",
    "7th",
    "8th",
    "9th",
    "10th",
    "11th",
    "12th",
];

/// School grade from the fixed picker list. Stored as plain text.
///
/// Stored values are read back through [`Grade::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grade(String);

impl Grade {
    /// Parse picker input. Empty input means "no grade selected".
    pub fn parse(input: &str) -> Result<Option<Grade>, OnboardingError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        GRADES
            .iter()
            .find(|grade| grade.eq_ignore_ascii_case(trimmed))
            .map(|grade| Some(Grade((*grade).to_string())))
            .ok_or_else(|| OnboardingError::InvalidGrade(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored grade: `null`, empty or off-list text all read as no grade.
fn deserialize_grade<'de, D>(deserializer: D) -> Result<Option<Grade>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| Grade::parse(&value).ok().flatten()))
}

/// Step-1 record: who the student is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age_range: AgeRange,
    #[serde(default, deserialize_with = "deserialize_grade")]
    pub grade: Option<Grade>,
}

impl OnboardingProfile {
    /// Returns the record as it is persisted: name trimmed, rejected when blank.
    pub fn validated(&self) -> Result<OnboardingProfile, OnboardingError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(OnboardingError::NameRequired);
        }
        Ok(OnboardingProfile {
            name: name.to_string(),
            age_range: self.age_range,
            grade: self.grade.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Reading,
    Science,
    English,
    Math,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Reading,
        Subject::Science,
        Subject::English,
        Subject::Math,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Subject::Reading => "reading",
            Subject::Science => "science",
            Subject::English => "english",
            Subject::Math => "math",
        }
    }
}

impl FromStr for Subject {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.key() == s)
            .ok_or_else(|| OnboardingError::UnknownSubject(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningStyle {
    Visual,
    Audio,
    HandsOn,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::Audio,
        LearningStyle::HandsOn,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Audio => "audio",
            LearningStyle::HandsOn => "handsOn",
        }
    }
}

impl FromStr for LearningStyle {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LearningStyle::ALL
            .into_iter()
            .find(|style| style.key() == s)
            .ok_or_else(|| OnboardingError::UnknownStyle(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFlags {
    pub reading: bool,
    pub science: bool,
    pub english: bool,
    pub math: bool,
}

impl Default for SubjectFlags {
    fn default() -> Self {
        Self {
            reading: true,
            science: true,
            english: true,
            math: false,
        }
    }
}

impl SubjectFlags {
    pub fn get(&self, subject: Subject) -> bool {
        match subject {
            Subject::Reading => self.reading,
            Subject::Science => self.science,
            Subject::English => self.english,
            Subject::Math => self.math,
        }
    }

    fn slot(&mut self, subject: Subject) -> &mut bool {
        match subject {
            Subject::Reading => &mut self.reading,
            Subject::Science => &mut self.science,
            Subject::English => &mut self.english,
            Subject::Math => &mut self.math,
        }
    }

    pub fn toggle(&mut self, subject: Subject) {
        let slot = self.slot(subject);
        *slot = !*slot;
    }

    /// Copy known keys from a saved partial map; unknown keys are ignored.
    fn apply(&mut self, saved: &BTreeMap<String, bool>) {
        for (key, value) in saved {
            if let Ok(subject) = key.parse::<Subject>() {
                *self.slot(subject) = *value;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFlags {
    pub visual: bool,
    pub audio: bool,
    pub hands_on: bool,
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self {
            visual: true,
            audio: false,
            hands_on: true,
        }
    }
}

impl StyleFlags {
    pub fn get(&self, style: LearningStyle) -> bool {
        match style {
            LearningStyle::Visual => self.visual,
            LearningStyle::Audio => self.audio,
            LearningStyle::HandsOn => self.hands_on,
        }
    }

    fn slot(&mut self, style: LearningStyle) -> &mut bool {
        match style {
            LearningStyle::Visual => &mut self.visual,
            LearningStyle::Audio => &mut self.audio,
            LearningStyle::HandsOn => &mut self.hands_on,
        }
    }

    pub fn toggle(&mut self, style: LearningStyle) {
        let slot = self.slot(style);
        *slot = !*slot;
    }

    fn apply(&mut self, saved: &BTreeMap<String, bool>) {
        for (key, value) in saved {
            if let Ok(style) = key.parse::<LearningStyle>() {
                *self.slot(style) = *value;
            }
        }
    }
}

/// Step-2 record: what and how the student likes to learn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingPreferences {
    pub subjects: SubjectFlags,
    pub styles: StyleFlags,
}

impl OnboardingPreferences {
    /// Overlay a saved record onto the current values.
    ///
    /// An empty sub-record leaves its counterpart untouched, so a saved `{}`
    /// never resets the defaults.
    pub fn apply_saved(&mut self, saved: &StoredPreferences) {
        if !saved.subjects.is_empty() {
            self.subjects.apply(&saved.subjects);
        }
        if !saved.styles.is_empty() {
            self.styles.apply(&saved.styles);
        }
    }
}

/// Step-2 record as read back from storage or the API: both sub-records are
/// open maps and either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default)]
    pub subjects: BTreeMap<String, bool>,
    #[serde(default)]
    pub styles: BTreeMap<String, bool>,
}

impl StoredPreferences {
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty() && self.styles.is_empty()
    }

    /// Reject keys outside the allowed subject and style sets.
    pub fn validate(&self) -> Result<(), OnboardingError> {
        for key in self.subjects.keys() {
            key.parse::<Subject>()?;
        }
        for key in self.styles.keys() {
            key.parse::<LearningStyle>()?;
        }
        Ok(())
    }
}

impl From<&OnboardingPreferences> for StoredPreferences {
    fn from(preferences: &OnboardingPreferences) -> Self {
        Self {
            subjects: Subject::ALL
                .into_iter()
                .map(|s| (s.key().to_string(), preferences.subjects.get(s)))
                .collect(),
            styles: LearningStyle::ALL
                .into_iter()
                .map(|s| (s.key().to_string(), preferences.styles.get(s)))
                .collect(),
        }
    }
}

/// Combined profile record keyed by the session email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_grade"
    )]
    pub grade: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<SubjectFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleFlags>,
}

impl UserProfile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn merge_profile(&mut self, profile: &OnboardingProfile) {
        self.name = Some(profile.name.clone());
        self.age_range = Some(profile.age_range);
        self.grade = profile.grade.clone();
    }

    pub fn merge_preferences(&mut self, preferences: &OnboardingPreferences) {
        self.subjects = Some(preferences.subjects);
        self.styles = Some(preferences.styles);
    }
}

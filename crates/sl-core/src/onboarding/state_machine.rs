//! Onboarding wizard state machine.
//!
//! Defines a pure state transition function for the three-step student
//! wizard. Persistence and navigation are returned as actions; the caller
//! executes them and reports save outcomes back as events.

use super::model::{
    AgeRange, Grade, LearningStyle, OnboardingPreferences, OnboardingProfile, StoredPreferences,
    Subject,
};
use super::OnboardingError;
use crate::route::Route;

/// The three screens of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Step1,
    Step2,
    Step3,
}

impl WizardStep {
    pub fn route(&self) -> Route {
        match self {
            WizardStep::Step1 => Route::OnboardingStep1,
            WizardStep::Step2 => Route::OnboardingStep2,
            WizardStep::Step3 => Route::OnboardingStep3,
        }
    }

    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::OnboardingStep1 => Some(WizardStep::Step1),
            Route::OnboardingStep2 => Some(WizardStep::Step2),
            Route::OnboardingStep3 => Some(WizardStep::Step3),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Step1 => 1,
            WizardStep::Step2 => 2,
            WizardStep::Step3 => 3,
        }
    }
}

/// Wizard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingState {
    /// Profile capture.
    Step1 {
        form: OnboardingProfile,
        error: Option<OnboardingError>,
    },
    /// Preference capture.
    Step2 {
        preferences: OnboardingPreferences,
        error: Option<OnboardingError>,
    },
    /// Next-steps summary.
    Step3,
    /// Wizard finished.
    Complete { destination: Route },
    /// User backed out of step 1.
    Exited { destination: Route },
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    EditName { name: String },
    SelectAgeRange { age_range: AgeRange },
    SelectGrade { grade: Option<Grade> },
    ToggleSubject { subject: Subject },
    ToggleStyle { style: LearningStyle },
    Continue,
    Back,
    /// The save requested by `Continue` was accepted.
    Saved,
    /// The save requested by `Continue` was rejected.
    SaveFailed { message: String },
    /// "Start Learning" on step 3.
    StartLearning,
    /// "Customize settings later" on step 3.
    CustomizeLater,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    SaveProfile { profile: OnboardingProfile },
    SavePreferences { preferences: OnboardingPreferences },
    Navigate { route: Route },
}

impl OnboardingState {
    /// Step 1 as mounted, pre-filled from a saved record when there is one.
    pub fn step1(saved: Option<OnboardingProfile>) -> Self {
        OnboardingState::Step1 {
            form: saved.unwrap_or_default(),
            error: None,
        }
    }

    /// Step 2 as mounted: defaults overlaid with the non-empty parts of a
    /// saved record.
    pub fn step2(saved: Option<&StoredPreferences>) -> Self {
        let mut preferences = OnboardingPreferences::default();
        if let Some(saved) = saved {
            preferences.apply_saved(saved);
        }
        OnboardingState::Step2 {
            preferences,
            error: None,
        }
    }

    pub fn step(&self) -> Option<WizardStep> {
        match self {
            OnboardingState::Step1 { .. } => Some(WizardStep::Step1),
            OnboardingState::Step2 { .. } => Some(WizardStep::Step2),
            OnboardingState::Step3 => Some(WizardStep::Step3),
            OnboardingState::Complete { .. } | OnboardingState::Exited { .. } => None,
        }
    }

    /// Route the client is on while in this state.
    pub fn route(&self) -> Route {
        match self {
            OnboardingState::Complete { destination } | OnboardingState::Exited { destination } => {
                destination.clone()
            }
            other => other
                .step()
                .map(|step| step.route())
                .unwrap_or(Route::OnboardingStep1),
        }
    }

    pub fn error(&self) -> Option<&OnboardingError> {
        match self {
            OnboardingState::Step1 { error, .. } | OnboardingState::Step2 { error, .. } => {
                error.as_ref()
            }
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            OnboardingState::Complete { .. } | OnboardingState::Exited { .. }
        )
    }
}

/// Pure wizard state machine.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    /// Step actually shown when `requested` is entered directly.
    ///
    /// Steps 2 and 3 require a saved step-1 record; without one the wizard
    /// starts over at step 1.
    pub fn entry_step(requested: WizardStep, has_saved_profile: bool) -> WizardStep {
        match requested {
            WizardStep::Step1 => WizardStep::Step1,
            _ if !has_saved_profile => WizardStep::Step1,
            other => other,
        }
    }

    pub fn transition(
        state: OnboardingState,
        event: OnboardingEvent,
    ) -> (OnboardingState, Vec<OnboardingAction>) {
        match (state, event) {
            (OnboardingState::Step1 { mut form, .. }, OnboardingEvent::EditName { name }) => {
                form.name = name;
                (OnboardingState::Step1 { form, error: None }, Vec::new())
            }
            (
                OnboardingState::Step1 { mut form, .. },
                OnboardingEvent::SelectAgeRange { age_range },
            ) => {
                form.age_range = age_range;
                (OnboardingState::Step1 { form, error: None }, Vec::new())
            }
            (OnboardingState::Step1 { mut form, .. }, OnboardingEvent::SelectGrade { grade }) => {
                form.grade = grade;
                (OnboardingState::Step1 { form, error: None }, Vec::new())
            }
            (OnboardingState::Step1 { form, .. }, OnboardingEvent::Continue) => {
                match form.validated() {
                    Ok(profile) => (
                        OnboardingState::Step1 {
                            form: profile.clone(),
                            error: None,
                        },
                        vec![OnboardingAction::SaveProfile { profile }],
                    ),
                    Err(error) => (
                        OnboardingState::Step1 {
                            form,
                            error: Some(error),
                        },
                        Vec::new(),
                    ),
                }
            }
            (OnboardingState::Step1 { form, error }, OnboardingEvent::Saved) => {
                if form.validated().is_err() {
                    return (OnboardingState::Step1 { form, error }, Vec::new());
                }
                (
                    OnboardingState::step2(None),
                    vec![OnboardingAction::Navigate {
                        route: Route::OnboardingStep2,
                    }],
                )
            }
            (OnboardingState::Step1 { form, .. }, OnboardingEvent::SaveFailed { message }) => (
                OnboardingState::Step1 {
                    form,
                    error: Some(OnboardingError::SaveFailed(message)),
                },
                Vec::new(),
            ),
            (OnboardingState::Step1 { .. }, OnboardingEvent::Back) => (
                OnboardingState::Exited {
                    destination: Route::RoleSelect,
                },
                vec![OnboardingAction::Navigate {
                    route: Route::RoleSelect,
                }],
            ),
            (
                OnboardingState::Step2 {
                    mut preferences, ..
                },
                OnboardingEvent::ToggleSubject { subject },
            ) => {
                preferences.subjects.toggle(subject);
                (
                    OnboardingState::Step2 {
                        preferences,
                        error: None,
                    },
                    Vec::new(),
                )
            }
            (
                OnboardingState::Step2 {
                    mut preferences, ..
                },
                OnboardingEvent::ToggleStyle { style },
            ) => {
                preferences.styles.toggle(style);
                (
                    OnboardingState::Step2 {
                        preferences,
                        error: None,
                    },
                    Vec::new(),
                )
            }
            (OnboardingState::Step2 { preferences, .. }, OnboardingEvent::Continue) => (
                OnboardingState::Step2 {
                    preferences,
                    error: None,
                },
                vec![OnboardingAction::SavePreferences { preferences }],
            ),
            (OnboardingState::Step2 { .. }, OnboardingEvent::Saved) => (
                OnboardingState::Step3,
                vec![OnboardingAction::Navigate {
                    route: Route::OnboardingStep3,
                }],
            ),
            (
                OnboardingState::Step2 { preferences, .. },
                OnboardingEvent::SaveFailed { message },
            ) => (
                OnboardingState::Step2 {
                    preferences,
                    error: Some(OnboardingError::SaveFailed(message)),
                },
                Vec::new(),
            ),
            (OnboardingState::Step2 { .. }, OnboardingEvent::Back) => (
                OnboardingState::step1(None),
                vec![OnboardingAction::Navigate {
                    route: Route::OnboardingStep1,
                }],
            ),
            (OnboardingState::Step3, OnboardingEvent::StartLearning) => (
                OnboardingState::Complete {
                    destination: Route::App,
                },
                vec![OnboardingAction::Navigate { route: Route::App }],
            ),
            (OnboardingState::Step3, OnboardingEvent::CustomizeLater) => (
                OnboardingState::Complete {
                    destination: Route::Home,
                },
                vec![OnboardingAction::Navigate { route: Route::Home }],
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}

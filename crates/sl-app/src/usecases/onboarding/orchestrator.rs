//! Onboarding orchestrator.
//!
//! Drives [`OnboardingStateMachine`] and executes the actions it returns:
//! saves go through the configured [`StepPersistence`], and navigation to a
//! wizard step re-mounts that step from its saved record.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

use sl_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine, WizardStep,
};
use sl_core::Route;

use crate::persistence::{SaveOutcome, StepPersistence};

pub struct OnboardingOrchestrator {
    state: Mutex<OnboardingState>,
    persistence: Arc<dyn StepPersistence>,
}

impl OnboardingOrchestrator {
    pub fn new(persistence: Arc<dyn StepPersistence>) -> Self {
        Self {
            state: Mutex::new(OnboardingState::step1(None)),
            persistence,
        }
    }

    pub async fn state(&self) -> OnboardingState {
        self.state.lock().await.clone()
    }

    /// Enter `requested` directly, as on a page load.
    ///
    /// Step 2 and step 3 need a saved step-1 record; without one the wizard
    /// lands on step 1 instead.
    pub async fn mount(&self, requested: WizardStep) -> OnboardingState {
        let span = info_span!("usecase.onboarding.mount", step = requested.number());
        async {
            let saved_profile = self.persistence.load_profile().await;
            let step = OnboardingStateMachine::entry_step(requested, saved_profile.is_some());
            if step != requested {
                info!(
                    requested = requested.number(),
                    "No saved step-1 record, starting onboarding at step 1"
                );
            }

            let mounted = match step {
                WizardStep::Step1 => OnboardingState::step1(saved_profile),
                _ => self.load_step(step).await,
            };
            debug!(state = ?mounted, "onboarding step mounted");

            *self.state.lock().await = mounted.clone();
            mounted
        }
        .instrument(span)
        .await
    }

    pub async fn dispatch(&self, event: OnboardingEvent) -> OnboardingState {
        let mut guard = self.state.lock().await;

        let span = info_span!("usecase.onboarding.dispatch", event = ?event);
        async {
            let mut current = guard.clone();
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.route();
                let event_name = format!("{:?}", event);
                let (next, actions) = OnboardingStateMachine::transition(current, event);
                debug!(from = %from, to = %next.route(), event = %event_name, "onboarding transition");

                current = next;
                for action in actions {
                    match action {
                        OnboardingAction::SaveProfile { profile } => {
                            let outcome = self.persistence.save_profile(&profile).await;
                            pending_events.push(Self::outcome_event(outcome));
                        }
                        OnboardingAction::SavePreferences { preferences } => {
                            let outcome = self.persistence.save_preferences(&preferences).await;
                            pending_events.push(Self::outcome_event(outcome));
                        }
                        OnboardingAction::Navigate { route } => {
                            info!(route = %route, "onboarding navigate");
                            if let Some(step) = WizardStep::from_route(&route) {
                                current = self.load_step(step).await;
                            }
                        }
                    }
                }
            }

            *guard = current.clone();
            current
        }
        .instrument(span)
        .await
    }

    /// Screen for `step` pre-filled from its saved record. No ordering check:
    /// in-flow navigation has already passed through the earlier steps.
    async fn load_step(&self, step: WizardStep) -> OnboardingState {
        match step {
            WizardStep::Step1 => OnboardingState::step1(self.persistence.load_profile().await),
            WizardStep::Step2 => {
                let saved = self.persistence.load_preferences().await;
                OnboardingState::step2(saved.as_ref())
            }
            WizardStep::Step3 => OnboardingState::Step3,
        }
    }

    fn outcome_event(outcome: SaveOutcome) -> OnboardingEvent {
        match outcome {
            SaveOutcome::Saved => OnboardingEvent::Saved,
            SaveOutcome::Blocked { message } => OnboardingEvent::SaveFailed { message },
        }
    }

    /// Route the wizard currently shows.
    pub async fn route(&self) -> Route {
        self.state.lock().await.route()
    }
}

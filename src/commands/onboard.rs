use std::io::Write;

use anyhow::bail;
use sl_app::usecases::OnboardingOrchestrator;
use sl_app::App;
use sl_core::onboarding::{AgeRange, Grade, LearningStyle, OnboardingError, Subject};
use sl_core::{OnboardingEvent, OnboardingState, WizardStep};
use tracing::{info_span, Instrument};

use crate::cli::OnboardCommand;

pub(super) async fn run(
    app: &App,
    action: OnboardCommand,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let span = info_span!("command.onboarding", action = ?action);
    async {
        let wizard = app.usecases().onboarding();
        match action {
            OnboardCommand::Show { step } => {
                let state = wizard.mount(step_from(step)).await;
                render(&state, out)?;
            }
            OnboardCommand::Step1 {
                name,
                age_range,
                grade,
            } => {
                let mut events = vec![OnboardingEvent::EditName { name }];
                if let Some(raw) = age_range {
                    events.push(OnboardingEvent::SelectAgeRange {
                        age_range: raw.parse::<AgeRange>()?,
                    });
                }
                if let Some(raw) = grade {
                    events.push(OnboardingEvent::SelectGrade {
                        grade: Grade::parse(&raw)?,
                    });
                }
                events.push(OnboardingEvent::Continue);
                submit(&wizard, WizardStep::Step1, events, out).await?;
            }
            OnboardCommand::Step2 { toggles } => {
                let mut events = toggles
                    .iter()
                    .map(|key| toggle_event(key))
                    .collect::<Result<Vec<_>, _>>()?;
                events.push(OnboardingEvent::Continue);
                submit(&wizard, WizardStep::Step2, events, out).await?;
            }
            OnboardCommand::Finish { later } => {
                let event = if later {
                    OnboardingEvent::CustomizeLater
                } else {
                    OnboardingEvent::StartLearning
                };
                submit(&wizard, WizardStep::Step3, vec![event], out).await?;
            }
            OnboardCommand::Back { step } => {
                submit(&wizard, step_from(step), vec![OnboardingEvent::Back], out).await?;
            }
        }
        Ok(())
    }
    .instrument(span)
    .await
}

/// Mount `step`, then feed `events` unless the wizard redirected elsewhere.
async fn submit(
    wizard: &OnboardingOrchestrator,
    step: WizardStep,
    events: Vec<OnboardingEvent>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mounted = wizard.mount(step).await;
    if mounted.step() != Some(step) {
        writeln!(out, "Step {} needs step 1 first.", step.number())?;
        writeln!(out, "-> {}", mounted.route())?;
        return Ok(());
    }

    let mut state = mounted;
    for event in events {
        state = wizard.dispatch(event).await;
    }

    if let Some(error) = state.error() {
        bail!("{error}");
    }
    writeln!(out, "-> {}", state.route())?;
    Ok(())
}

fn step_from(number: u8) -> WizardStep {
    match number {
        1 => WizardStep::Step1,
        2 => WizardStep::Step2,
        _ => WizardStep::Step3,
    }
}

fn toggle_event(key: &str) -> Result<OnboardingEvent, OnboardingError> {
    if let Ok(subject) = key.parse::<Subject>() {
        return Ok(OnboardingEvent::ToggleSubject { subject });
    }
    key.parse::<LearningStyle>()
        .map(|style| OnboardingEvent::ToggleStyle { style })
        .map_err(|_| OnboardingError::UnknownPreference(key.to_string()))
}

fn check(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn render(state: &OnboardingState, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{}", state.route())?;
    match state {
        OnboardingState::Step1 { form, .. } => {
            writeln!(out, "name: {}", form.name)?;
            writeln!(out, "age range: {}", form.age_range)?;
            match &form.grade {
                Some(grade) => writeln!(out, "grade: {grade}")?,
                None => writeln!(out, "grade: (none)")?,
            }
        }
        OnboardingState::Step2 { preferences, .. } => {
            writeln!(out, "subjects:")?;
            for subject in Subject::ALL {
                let on = preferences.subjects.get(subject);
                writeln!(out, "  {} {}", check(on), subject.key())?;
            }
            writeln!(out, "styles:")?;
            for style in LearningStyle::ALL {
                let on = preferences.styles.get(style);
                writeln!(out, "  {} {}", check(on), style.key())?;
            }
        }
        OnboardingState::Step3 => {
            writeln!(out, "You're all set. Start Learning (/app) or customize later (/).")?;
        }
        OnboardingState::Complete { .. } | OnboardingState::Exited { .. } => {}
    }
    Ok(())
}

//! End-to-end onboarding flows over the file-backed client store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use sl_app::{App, AppDeps};
use sl_core::auth::AccessToken;
use sl_core::onboarding::{
    AgeRange, Grade, OnboardingProfile, StoredPreferences, Subject,
};
use sl_core::ports::{AuthPort, ClientStoragePort, OnboardingRemotePort, RemoteError};
use sl_core::{
    GuardDecision, OnboardingError, OnboardingEvent, OnboardingState, PersistenceStrategy, Role,
    Route, StorageKey, WizardStep,
};
use sl_infra::JsonFileStore;

/// Remote API stand-in: answers every call with `reply`.
struct ScriptedApi {
    reply: Mutex<Result<(), RemoteError>>,
    info: Mutex<Option<OnboardingProfile>>,
}

impl ScriptedApi {
    fn ok() -> Self {
        Self {
            reply: Mutex::new(Ok(())),
            info: Mutex::new(None),
        }
    }

    fn failing(err: RemoteError) -> Self {
        Self {
            reply: Mutex::new(Err(err)),
            info: Mutex::new(None),
        }
    }

    fn reply(&self) -> Result<(), RemoteError> {
        self.reply.lock().unwrap().clone()
    }
}

#[async_trait]
impl OnboardingRemotePort for ScriptedApi {
    async fn save_info(
        &self,
        _token: Option<&str>,
        profile: &OnboardingProfile,
    ) -> Result<OnboardingProfile, RemoteError> {
        self.reply()?;
        *self.info.lock().unwrap() = Some(profile.clone());
        Ok(profile.clone())
    }

    async fn load_info(&self, _token: Option<&str>) -> Result<Option<OnboardingProfile>, RemoteError> {
        self.reply()?;
        Ok(self.info.lock().unwrap().clone())
    }

    async fn save_preferences(
        &self,
        _token: Option<&str>,
        preferences: &StoredPreferences,
    ) -> Result<StoredPreferences, RemoteError> {
        self.reply()?;
        Ok(preferences.clone())
    }

    async fn load_preferences(&self, _token: Option<&str>) -> Result<StoredPreferences, RemoteError> {
        self.reply()?;
        Ok(StoredPreferences::default())
    }
}

#[async_trait]
impl AuthPort for ScriptedApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<AccessToken, RemoteError> {
        self.reply()?;
        Ok(AccessToken {
            access_token: "tok".to_string(),
            token_type: None,
        })
    }

    async fn register(&self, _email: &str, _password: &str) -> Result<(), RemoteError> {
        self.reply()
    }
}

fn app(store: Arc<JsonFileStore>, api: Arc<ScriptedApi>, strategy: PersistenceStrategy) -> App {
    App::new(AppDeps {
        storage: store,
        onboarding_remote: api.clone(),
        auth: api,
        strategy,
    })
}

fn local_app(dir: &TempDir) -> (App, Arc<JsonFileStore>) {
    let store = Arc::new(JsonFileStore::with_defaults(dir.path()));
    (
        app(store.clone(), Arc::new(ScriptedApi::ok()), PersistenceStrategy::Local),
        store,
    )
}

async fn stored_json(store: &JsonFileStore, key: StorageKey) -> serde_json::Value {
    let raw = store.get(key).await.unwrap().expect("record present");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn student_completes_onboarding_end_to_end() {
    let dir = TempDir::new().unwrap();
    let (app, store) = local_app(&dir);
    let usecases = app.usecases();

    let route = usecases.select_role().execute(Some(Role::Student)).await;
    assert_eq!(route, Route::OnboardingStep1);

    let wizard = usecases.onboarding();
    wizard.mount(WizardStep::Step1).await;
    wizard
        .dispatch(OnboardingEvent::EditName {
            name: "Lee".to_string(),
        })
        .await;
    wizard
        .dispatch(OnboardingEvent::SelectAgeRange {
            age_range: AgeRange::ElevenToFourteen,
        })
        .await;
    wizard
        .dispatch(OnboardingEvent::SelectGrade {
            grade: Grade::parse("").unwrap(),
        })
        .await;
    let state = wizard.dispatch(OnboardingEvent::Continue).await;
    assert_eq!(state.step(), Some(WizardStep::Step2));

    wizard
        .dispatch(OnboardingEvent::ToggleSubject {
            subject: Subject::Math,
        })
        .await;
    let state = wizard.dispatch(OnboardingEvent::Continue).await;
    assert_eq!(state, OnboardingState::Step3);

    let state = wizard.dispatch(OnboardingEvent::StartLearning).await;
    assert_eq!(state.route(), Route::App);

    assert_eq!(
        store.get(StorageKey::UserType).await.unwrap().as_deref(),
        Some("student")
    );
    assert_eq!(
        stored_json(&store, StorageKey::OnboardingStep1).await,
        serde_json::json!({"name": "Lee", "ageRange": "11-14", "grade": null})
    );
    assert_eq!(
        stored_json(&store, StorageKey::OnboardingStep2).await,
        serde_json::json!({
            "subjects": {"reading": true, "science": true, "english": true, "math": true},
            "styles": {"visual": true, "audio": false, "handsOn": true}
        })
    );
}

#[tokio::test]
async fn restart_resumes_with_saved_records() {
    let dir = TempDir::new().unwrap();
    {
        let (app, _store) = local_app(&dir);
        let wizard = app.usecases().onboarding();
        wizard.mount(WizardStep::Step1).await;
        wizard
            .dispatch(OnboardingEvent::EditName {
                name: "  Ada ".to_string(),
            })
            .await;
        wizard
            .dispatch(OnboardingEvent::SelectGrade {
                grade: Grade::parse("5th").unwrap(),
            })
            .await;
        wizard.dispatch(OnboardingEvent::Continue).await;
    }

    let (app, _store) = local_app(&dir);
    let wizard = app.usecases().onboarding();
    let state = wizard.mount(WizardStep::Step1).await;

    assert_eq!(
        state,
        OnboardingState::step1(Some(OnboardingProfile {
            name: "Ada".to_string(),
            age_range: AgeRange::NineToEleven,
            grade: Grade::parse("5th").unwrap(),
        }))
    );
}

#[tokio::test]
async fn partial_step2_record_keeps_defaults_for_missing_half() {
    let dir = TempDir::new().unwrap();
    let (app, store) = local_app(&dir);
    store
        .set(
            StorageKey::OnboardingStep1,
            r#"{"name": "Ada", "ageRange": "6-8", "grade": null}"#,
        )
        .await
        .unwrap();
    store
        .set(
            StorageKey::OnboardingStep2,
            r#"{"subjects": {"math": true}, "styles": {}}"#,
        )
        .await
        .unwrap();

    let state = app.usecases().onboarding().mount(WizardStep::Step2).await;

    let OnboardingState::Step2 { preferences, .. } = state else {
        panic!("expected step 2, got {state:?}");
    };
    assert!(preferences.subjects.get(Subject::Math));
    assert_eq!(preferences.styles, Default::default());
}

#[tokio::test]
async fn direct_entry_to_later_step_without_profile_starts_over() {
    let dir = TempDir::new().unwrap();
    let (app, _store) = local_app(&dir);

    let state = app.usecases().onboarding().mount(WizardStep::Step3).await;

    assert_eq!(state.route(), Route::OnboardingStep1);
}

#[tokio::test]
async fn remote_rejection_keeps_student_on_step1() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::with_defaults(dir.path()));
    let api = Arc::new(ScriptedApi::failing(RemoteError::rejected(
        401,
        Some("Not authenticated".to_string()),
    )));
    let app = app(store.clone(), api, PersistenceStrategy::Remote);

    let wizard = app.usecases().onboarding();
    wizard.mount(WizardStep::Step1).await;
    wizard
        .dispatch(OnboardingEvent::EditName {
            name: "Lee".to_string(),
        })
        .await;
    let state = wizard.dispatch(OnboardingEvent::Continue).await;

    assert_eq!(state.step(), Some(WizardStep::Step1));
    assert_eq!(
        state.error(),
        Some(&OnboardingError::SaveFailed("Not authenticated".to_string()))
    );
    assert_eq!(store.get(StorageKey::OnboardingStep1).await.unwrap(), None);
}

#[tokio::test]
async fn remote_success_resumes_from_api() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonFileStore::with_defaults(dir.path()));
    let api = Arc::new(ScriptedApi::ok());
    let app = app(store, api.clone(), PersistenceStrategy::Remote);

    let wizard = app.usecases().onboarding();
    wizard.mount(WizardStep::Step1).await;
    wizard
        .dispatch(OnboardingEvent::EditName {
            name: "Lee".to_string(),
        })
        .await;
    let state = wizard.dispatch(OnboardingEvent::Continue).await;
    assert_eq!(state.step(), Some(WizardStep::Step2));

    let state = app.usecases().onboarding().mount(WizardStep::Step2).await;
    assert_eq!(state.step(), Some(WizardStep::Step2));
    assert_eq!(api.info.lock().unwrap().as_ref().map(|p| p.name.as_str()), Some("Lee"));
}

#[tokio::test]
async fn signed_up_student_gets_combined_profile() {
    let dir = TempDir::new().unwrap();
    let (app, store) = local_app(&dir);
    store
        .set(StorageKey::SessionEmail, "lee@example.com")
        .await
        .unwrap();

    let wizard = app.usecases().onboarding();
    wizard.mount(WizardStep::Step1).await;
    wizard
        .dispatch(OnboardingEvent::EditName {
            name: "Lee".to_string(),
        })
        .await;
    wizard.dispatch(OnboardingEvent::Continue).await;
    wizard.dispatch(OnboardingEvent::Continue).await;

    let combined = app.records().user_profile().await.unwrap().unwrap();
    assert_eq!(combined.email, "lee@example.com");
    assert_eq!(combined.name.as_deref(), Some("Lee"));
    assert!(combined.subjects.is_some());
}

#[tokio::test]
async fn guard_follows_role_changes_and_logout() {
    let dir = TempDir::new().unwrap();
    let (app, _store) = local_app(&dir);
    let usecases = app.usecases();
    let teacher_area = Route::parse("/teacher/classes");

    assert_eq!(
        usecases.enter_route().execute(&teacher_area).await,
        GuardDecision::Redirect { to: Route::SignIn }
    );

    usecases.select_role().execute(Some(Role::Teacher)).await;
    assert!(usecases.enter_route().execute(&teacher_area).await.is_allowed());

    usecases.logout().execute().await.unwrap();
    assert!(!usecases.enter_route().execute(&teacher_area).await.is_allowed());
}

//! Wired application: one shared set of records and persistence, and
//! accessors that hand out use cases over them.

use std::sync::Arc;

use sl_core::PersistenceStrategy;
use tracing::debug;

use crate::deps::AppDeps;
use crate::persistence::{LocalStepPersistence, RemoteStepPersistence, StepPersistence};
use crate::records::ClientRecords;
use crate::usecases::{EnterRoute, Logout, OnboardingOrchestrator, SelectRole, SignIn, SignUp};

pub struct App {
    records: ClientRecords,
    persistence: Arc<dyn StepPersistence>,
    deps: AppDeps,
}

impl App {
    pub fn new(deps: AppDeps) -> Self {
        let records = ClientRecords::new(deps.storage.clone());
        let persistence: Arc<dyn StepPersistence> = match deps.strategy {
            PersistenceStrategy::Local => Arc::new(LocalStepPersistence::new(records.clone())),
            PersistenceStrategy::Remote => Arc::new(RemoteStepPersistence::new(
                records.clone(),
                deps.onboarding_remote.clone(),
            )),
        };
        debug!(strategy = %deps.strategy, "application wired");
        Self {
            records,
            persistence,
            deps,
        }
    }

    pub fn strategy(&self) -> PersistenceStrategy {
        self.persistence.strategy()
    }

    pub fn records(&self) -> &ClientRecords {
        &self.records
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { app: self }
    }
}

/// Use case accessor, borrowed from [`App`].
pub struct UseCases<'a> {
    app: &'a App,
}

impl UseCases<'_> {
    pub fn select_role(&self) -> SelectRole {
        SelectRole::new(self.app.records.clone())
    }

    pub fn onboarding(&self) -> OnboardingOrchestrator {
        OnboardingOrchestrator::new(self.app.persistence.clone())
    }

    pub fn enter_route(&self) -> EnterRoute {
        EnterRoute::new(self.app.records.clone())
    }

    pub fn sign_in(&self) -> SignIn {
        SignIn::new(self.app.deps.auth.clone(), self.app.records.clone())
    }

    pub fn sign_up(&self) -> SignUp {
        SignUp::new(self.app.deps.auth.clone(), self.app.records.clone())
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.app.records.clone())
    }
}

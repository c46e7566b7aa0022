#![deny(clippy::all, clippy::pedantic)]

use std::sync::Arc;

use catalog_admin::application::error::AppError;
use catalog_admin::application::manager::ResourceManager;
use catalog_admin::application::notify::Notifier;
use catalog_admin::application::resource::Resource;
use catalog_admin::application::session::{AuthError, AuthGuard, Credentials, Session};
use catalog_admin::config::{LoadError, Settings};
use catalog_admin::infra::error::InfraError;
use catalog_admin::infra::http::{ApiClient, ApiError};
use catalog_admin::infra::token_file::FileTokenStore;
use catalog_admin_types::Language;
use thiserror::Error;

use crate::console::ConsoleNotifier;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to render output: {0}")]
    Output(String),
}

/// Everything a handler needs, built once per invocation.
#[derive(Clone)]
pub struct Ctx {
    pub api: Arc<ApiClient>,
    pub guard: AuthGuard,
    pub notifier: Arc<dyn Notifier>,
    pub language: Language,
}

impl Ctx {
    pub fn new(
        settings: &Settings,
        session: Arc<Session>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, CliError> {
        let api = ApiClient::new(&settings.api, session.clone())?;
        let guard = AuthGuard::new(
            session,
            Credentials {
                username: settings.auth.username.clone(),
                password: settings.auth.password.clone(),
            },
        );
        Ok(Self {
            api: Arc::new(api),
            guard,
            notifier,
            language: settings.display.language,
        })
    }

    pub fn manager<R: Resource>(&self) -> ResourceManager<R> {
        ResourceManager::new(self.api.clone(), self.notifier.clone(), self.language)
    }

    /// Admin commands run only inside an established session.
    pub fn require_session(&self) -> Result<(), CliError> {
        self.guard.require().map_err(CliError::from)
    }
}

pub fn build_ctx(settings: &Settings) -> Result<Ctx, CliError> {
    let store = FileTokenStore::new(settings.session.token_path.clone());
    let session = Session::initialize(Arc::new(store))?;
    Ctx::new(settings, session, Arc::new(ConsoleNotifier))
}

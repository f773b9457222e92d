//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all drugai operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the catalog, the service transport, the credential provider and
//!   one in-flight guard per hosted endpoint
//! - **Loads** the catalog on first use, so commands that never read it
//!   (`config`, `status`, the service calls) work with a broken `catalog-path`
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and no formatting. The presentation layer owns the
//! mutable [`ViewState`] and hands the facade an immutable snapshot.
//!
//! ## Generic Over Transport and Credentials
//!
//! `DrugaiApi<T: Transport, C: CredentialProvider>`:
//! - Production: `HttpTransport` (or `Unconfigured`) with `EnvCredentials`
//! - Testing: `CannedTransport` with `StaticCredentials`
//!
//! This enables testing every operation without a network or an identity
//! provider.

use crate::auth::CredentialProvider;
use crate::catalog::Catalog;
use crate::commands;
use crate::config::DrugaiConfig;
use crate::error::Result;
use crate::layout::Layout;
use crate::pipeline::ViewState;
use crate::service::guard::InFlight;
use crate::service::Transport;
use chrono::NaiveDate;
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};

pub struct DrugaiApi<T: Transport, C: CredentialProvider> {
    catalog: OnceCell<Catalog>,
    transport: T,
    credentials: C,
    config: DrugaiConfig,
    config_dir: PathBuf,
    invoke_guard: InFlight,
    checkout_guard: InFlight,
}

impl<T: Transport, C: CredentialProvider> DrugaiApi<T, C> {
    /// A facade over an already loaded catalog.
    pub fn new(
        catalog: Catalog,
        transport: T,
        credentials: C,
        config: DrugaiConfig,
        config_dir: PathBuf,
    ) -> Self {
        let api = Self::from_config(transport, credentials, config, config_dir);
        let _ = api.catalog.set(catalog);
        api
    }

    /// A facade that reads the catalog named by `config` the first time an
    /// operation needs it.
    pub fn from_config(
        transport: T,
        credentials: C,
        config: DrugaiConfig,
        config_dir: PathBuf,
    ) -> Self {
        Self {
            catalog: OnceCell::new(),
            transport,
            credentials,
            config,
            config_dir,
            invoke_guard: InFlight::new(),
            checkout_guard: InFlight::new(),
        }
    }

    pub fn catalog(&self) -> Result<&Catalog> {
        self.catalog.get_or_try_init(|| load_catalog(&self.config))
    }

    pub fn settings(&self) -> &DrugaiConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// A fresh view sized for a terminal of `width` columns, using the
    /// configured default sort.
    pub fn initial_view(&self, width: Option<u16>) -> ViewState {
        let layout = Layout::for_width(width, self.config.narrow_below);
        ViewState::new(layout.page_size(&self.config.page_sizes())).with_sort(self.config.sort())
    }

    pub fn browse(
        &self,
        view: ViewState,
        page: usize,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::browse::run(self.catalog()?, view, page, today)
    }

    pub fn tags(&self) -> Result<commands::CmdResult> {
        commands::tags::run(self.catalog()?)
    }

    pub fn pricing(&self) -> Result<commands::CmdResult> {
        commands::pricing::run()
    }

    pub fn subscribe(&self, email: Option<&str>) -> Result<commands::CmdResult> {
        commands::subscribe::run(
            &self.transport,
            &self.credentials,
            &self.checkout_guard,
            email,
        )
    }

    pub fn invoke(&self, prompt: &str) -> Result<commands::CmdResult> {
        commands::invoke::run(&self.transport, &self.credentials, &self.invoke_guard, prompt)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.credentials, &self.config)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

/// The configured catalog file, or the built-in catalog when none is set.
pub fn load_catalog(config: &DrugaiConfig) -> Result<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

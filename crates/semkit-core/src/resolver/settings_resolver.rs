//! Credential resolution from settings sources
//!
//! The resolver is given the location of its settings explicitly and opens
//! it afresh on every call: dotenv files are re-read each time, so an edit
//! between two calls is always observed and concurrent callers never share
//! a cached copy.
//!
//! Required keys are checked in a fixed order. With the default
//! [`ValidationMode::FailFast`] only the first missing key is reported;
//! [`ValidationMode::Accumulate`] reports all of them, in the same order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::settings::{
    ChainSettingsSource, DotenvSource, EnvSettingsSource, SettingsError, SettingsResult,
    SettingsSource,
};
use crate::types::{AzureOpenAICredentials, CredentialKey, OpenAICredentials};

/// Conventional settings file name, relative to the working directory
pub const DEFAULT_DOTENV_FILE: &str = ".env";

/// Where a resolver reads its settings from
#[derive(Clone)]
pub enum SettingsLocation {
    /// Dotenv file, re-read on every resolution
    Dotenv(PathBuf),
    /// The process environment
    Environment,
    /// A caller-owned source
    Source(Arc<dyn SettingsSource>),
    /// Ordered fallback; the first location with a non-empty value wins
    Chain(Vec<SettingsLocation>),
}

impl SettingsLocation {
    /// Build a fresh source for one resolution
    pub fn open(&self) -> SettingsResult<Arc<dyn SettingsSource>> {
        Ok(match self {
            SettingsLocation::Dotenv(path) => Arc::new(DotenvSource::load(path)?),
            SettingsLocation::Environment => Arc::new(EnvSettingsSource::new()),
            SettingsLocation::Source(source) => Arc::clone(source),
            SettingsLocation::Chain(locations) => {
                let sources = locations
                    .iter()
                    .map(SettingsLocation::open)
                    .collect::<SettingsResult<Vec<_>>>()?;
                Arc::new(ChainSettingsSource::new(sources))
            }
        })
    }
}

impl std::fmt::Debug for SettingsLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsLocation::Dotenv(path) => f.debug_tuple("Dotenv").field(path).finish(),
            SettingsLocation::Environment => f.write_str("Environment"),
            SettingsLocation::Source(source) => {
                f.debug_tuple("Source").field(&source.describe()).finish()
            }
            SettingsLocation::Chain(locations) => f.debug_tuple("Chain").field(locations).finish(),
        }
    }
}

/// How missing required keys are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first missing key
    #[default]
    FailFast,
    /// Check every required key and report all that are missing
    Accumulate,
}

/// Resolves OpenAI and Azure OpenAI credentials
///
/// # Example
///
/// ```no_run
/// use semkit_core::resolver::SettingsResolver;
///
/// let resolver = SettingsResolver::dotenv("/srv/app/.env");
/// let openai = resolver.resolve_openai()?;
/// let azure = resolver.resolve_azure_openai(false)?;
/// # Ok::<(), semkit_core::settings::SettingsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    location: SettingsLocation,
    mode: ValidationMode,
}

impl SettingsResolver {
    pub fn new(location: SettingsLocation) -> Self {
        Self {
            location,
            mode: ValidationMode::default(),
        }
    }

    /// Read from the dotenv file at `path`
    pub fn dotenv(path: impl Into<PathBuf>) -> Self {
        Self::new(SettingsLocation::Dotenv(path.into()))
    }

    /// Read `.env` in the current working directory
    pub fn current_dir() -> Self {
        Self::dotenv(DEFAULT_DOTENV_FILE)
    }

    /// Read `.env` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::dotenv(dir.as_ref().join(DEFAULT_DOTENV_FILE))
    }

    /// Read the per-user settings file (`<config dir>/semkit/.env`)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::dotenv(config_dir.join("semkit").join(DEFAULT_DOTENV_FILE))
    }

    /// Read from the process environment
    pub fn environment() -> Self {
        Self::new(SettingsLocation::Environment)
    }

    pub fn with_source(source: Arc<dyn SettingsSource>) -> Self {
        Self::new(SettingsLocation::Source(source))
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn location(&self) -> &SettingsLocation {
        &self.location
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Resolve `OPENAI_API_KEY` (required) and `OPENAI_ORG_ID` (optional)
    ///
    /// An empty organization id resolves to `None`.
    pub fn resolve_openai(&self) -> SettingsResult<OpenAICredentials> {
        let source = self.location.open()?;
        let mut check = RequiredKeys::new(self.mode);

        let api_key = check.require(source.as_ref(), CredentialKey::OpenAiApiKey)?;
        let org_id = source.get_non_empty(CredentialKey::OpenAiOrgId.as_str());
        check.finish(source.as_ref())?;

        crate::debug_log!(
            "resolved OpenAI credentials from {} (org id {})",
            source.describe(),
            if org_id.is_some() { "set" } else { "unset" }
        );

        Ok(OpenAICredentials {
            api_key: api_key.unwrap_or_default(),
            org_id,
        })
    }

    /// Resolve the Azure OpenAI deployment name, API key and endpoint
    ///
    /// Checked in that order. The deployment name is only required when
    /// `include_deployment` is set; otherwise a missing one resolves to `""`.
    pub fn resolve_azure_openai(&self, include_deployment: bool) -> SettingsResult<AzureOpenAICredentials> {
        let source = self.location.open()?;
        let mut check = RequiredKeys::new(self.mode);

        let deployment_name = if include_deployment {
            check.require(source.as_ref(), CredentialKey::AzureDeploymentName)?
        } else {
            source.get(CredentialKey::AzureDeploymentName.as_str())
        };
        let api_key = check.require(source.as_ref(), CredentialKey::AzureApiKey)?;
        let endpoint = check.require(source.as_ref(), CredentialKey::AzureEndpoint)?;
        check.finish(source.as_ref())?;

        crate::debug_log!(
            "resolved Azure OpenAI credentials from {} (deployment required: {})",
            source.describe(),
            include_deployment
        );

        Ok(AzureOpenAICredentials {
            deployment_name: deployment_name.unwrap_or_default(),
            api_key: api_key.unwrap_or_default(),
            endpoint: endpoint.unwrap_or_default(),
        })
    }
}

impl Default for SettingsResolver {
    fn default() -> Self {
        Self::current_dir()
    }
}

/// Tracks required keys for one resolution
///
/// `require` returns `Ok(None)` only in accumulate mode, where `finish`
/// then turns the collected keys into an error; a successful `finish`
/// therefore guarantees every required value was `Some`.
struct RequiredKeys {
    mode: ValidationMode,
    missing: Vec<CredentialKey>,
}

impl RequiredKeys {
    fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            missing: Vec::new(),
        }
    }

    fn require(&mut self, source: &dyn SettingsSource, key: CredentialKey) -> SettingsResult<Option<String>> {
        if let Some(value) = source.get_non_empty(key.as_str()) {
            return Ok(Some(value));
        }

        crate::warn_log!("{} missing from {}", key, source.describe());
        match self.mode {
            ValidationMode::FailFast => Err(SettingsError::missing(vec![key], source.describe())),
            ValidationMode::Accumulate => {
                self.missing.push(key);
                Ok(None)
            }
        }
    }

    fn finish(self, source: &dyn SettingsSource) -> SettingsResult<()> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::missing(self.missing, source.describe()))
        }
    }
}

use std::sync::Arc;

use tickerdash_core::{DashConnector, DashError, DashboardConfig};

/// Orchestrator that routes one render pass across registered providers.
pub struct Dashboard {
    pub(crate) connectors: Vec<Arc<dyn DashConnector>>,
    pub(crate) cfg: DashboardConfig,
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    connectors: Vec<Arc<dyn DashConnector>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with defaults: no connectors, 5s provider
    /// timeout, 10 news cards per pass.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DashboardConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the priority order: the first connector that
    /// supports a capability is tried first, and the next is consulted only
    /// when it fails.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DashConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set how many news cards a render pass requests.
    ///
    /// The rendered count is bounded by what the provider returns; fewer
    /// available articles is not an error.
    #[must_use]
    pub const fn news_count(mut self, count: usize) -> Self {
        self.cfg.news_count = count;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Dashboard` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`Self::with_connector`].
    pub fn build(self) -> Result<Dashboard, DashError> {
        if self.connectors.is_empty() {
            return Err(DashError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Dashboard {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl core::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dashboard")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

pub(crate) fn tag_err(connector: &str, e: DashError) -> DashError {
    match e {
        e @ (DashError::NotFound { .. }
        | DashError::NoData { .. }
        | DashError::ProviderTimeout { .. }
        | DashError::Connector { .. }
        | DashError::AllProvidersFailed(_)) => e,
        other => DashError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Dashboard {
    /// Start building a new `Dashboard` instance.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The configured news card count per render pass.
    #[must_use]
    pub const fn news_count(&self) -> usize {
        self.cfg.news_count
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, DashError>
    where
        Fut: core::future::Future<Output = Result<T, DashError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(DashError::provider_timeout(connector_name, capability)))
    }

    /// Generic single-capability fetch: walk connectors in registration
    /// order, apply the per-provider timeout, fall back on failure, and
    /// aggregate errors.
    ///
    /// `NotFound` from every attempted provider collapses into a single
    /// `NotFound` for `not_found_label`; any other mix of failures is
    /// returned as `AllProvidersFailed`.
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability_label: &'static str,
        not_found_label: &str,
        call: F,
    ) -> Result<T, DashError>
    where
        T: Send,
        F: Fn(Arc<dyn DashConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, DashError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<DashError> = Vec::new();

        for c in &self.connectors {
            if let Some(fut) = call(c.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability_label,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (DashError::NotFound { .. } | DashError::ProviderTimeout { .. })) => {
                        tracing::debug!(
                            connector = c.name(),
                            capability = capability_label,
                            error = %e,
                            "provider skipped, falling back"
                        );
                        errors.push(e);
                    }
                    Err(e) => {
                        let tagged = tag_err(c.name(), e);
                        tracing::warn!(
                            connector = c.name(),
                            capability = capability_label,
                            error = %tagged,
                            "provider failed, falling back"
                        );
                        errors.push(tagged);
                    }
                }
            }
        }

        if !attempted_any {
            return Err(DashError::unsupported(capability_label));
        }

        if !errors.is_empty()
            && errors
                .iter()
                .all(|e| matches!(e, DashError::NotFound { .. }))
        {
            return Err(DashError::not_found(not_found_label.to_string()));
        }

        Err(DashError::AllProvidersFailed(errors))
    }
}

//! Kubernetes API backed implementation of [`TriggersClient`].
//!
//! The `kube` client is async; each [`KubeTriggersClient`] owns a
//! current-thread tokio runtime and blocks on every request so callers stay
//! synchronous.

use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use kube::Client;
use kube::Config;
use kube::api::Api;
use kube::api::ListParams;
use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use tokio::runtime::Runtime;

use crate::ClientError;
use crate::Clock;
use crate::Params;
use crate::Result;
use crate::SystemClock;
use crate::TriggerBinding;
use crate::TriggerBindingList;
use crate::TriggersClient;

/// How to reach the cluster.
///
/// Every field is optional; unset fields fall back to `KUBECONFIG`, the
/// default kubeconfig location or the in-cluster service account, in the
/// order `kube` infers them.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    /// Explicit kubeconfig file.
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one.
    pub context: Option<String>,
    /// Namespace overriding the one configured for the context.
    pub namespace: Option<String>,
}

impl ConnectionOptions {
    fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            ..KubeConfigOptions::default()
        }
    }
}

/// Blocking Triggers client over a `kube::Client`.
pub struct KubeTriggersClient {
    runtime: Runtime,
    client: Client,
}

impl KubeTriggersClient {
    /// Loads configuration and builds a client.
    ///
    /// No request is sent; an unreachable server only surfaces on the first
    /// call.
    pub fn connect(options: &ConnectionOptions) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ClientError::Runtime)?;

        let config = runtime.block_on(load_config(options))?;
        let client = runtime.block_on(async { Client::try_from(config) })?;
        tracing::debug!(namespace = client.default_namespace(), "connected to cluster");

        Ok(Self { runtime, client })
    }

    fn api(&self, namespace: &str) -> Api<TriggerBinding> {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }
}

async fn load_config(options: &ConnectionOptions) -> Result<Config> {
    let mut config = match (&options.kubeconfig, &options.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &options.kubeconfig_options()).await?
        }
        (None, Some(_)) => Config::from_kubeconfig(&options.kubeconfig_options()).await?,
        (None, None) => Config::infer().await?,
    };

    if let Some(namespace) = &options.namespace {
        config.default_namespace.clone_from(namespace);
    }

    Ok(config)
}

impl TriggersClient for KubeTriggersClient {
    fn namespace(&self) -> &str {
        self.client.default_namespace()
    }

    fn list_trigger_bindings(&self, namespace: &str) -> Result<TriggerBindingList> {
        let api = self.api(namespace);
        let list = self.runtime.block_on(api.list(&ListParams::default()))?;

        Ok(TriggerBindingList {
            metadata: list.metadata,
            items: list.items,
            ..TriggerBindingList::default()
        })
    }
}

/// [`Params`] resolving clients from kubeconfig.
pub struct KubeParams<C = SystemClock> {
    options: ConnectionOptions,
    clock: C,
}

impl KubeParams {
    /// Parameters using the wall clock.
    pub fn new(options: ConnectionOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<C: Clock> KubeParams<C> {
    fn with_clock(options: ConnectionOptions, clock: C) -> Self {
        Self { options, clock }
    }
}

impl<C: Clock> Params for KubeParams<C> {
    fn triggers(&self) -> Result<Box<dyn TriggersClient>> {
        Ok(Box::new(KubeTriggersClient::connect(&self.options)?))
    }

    fn time(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::TimeZone;
    use std::io::Write;

    #[test]
    fn test_kubeconfig_options_carry_context() {
        let options = ConnectionOptions {
            context: Some("staging".to_string()),
            ..ConnectionOptions::default()
        };
        let kco = options.kubeconfig_options();
        assert_eq!(kco.context.as_deref(), Some("staging"));
        assert!(kco.cluster.is_none());
        assert!(kco.user.is_none());
    }

    #[test]
    fn test_params_time_uses_clock() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let params = KubeParams::with_clock(ConnectionOptions::default(), FixedClock(now));
        assert_eq!(params.time(), now);
    }

    #[test]
    fn test_connect_missing_kubeconfig_fails() {
        let options = ConnectionOptions {
            kubeconfig: Some(PathBuf::from("/nonexistent/tkn/kubeconfig")),
            ..ConnectionOptions::default()
        };
        let err = KubeTriggersClient::connect(&options).err().unwrap();
        assert!(matches!(err, ClientError::Kubeconfig(_)));
    }

    fn load(options: &ConnectionOptions) -> Result<Config> {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(load_config(options))
    }

    #[test]
    fn test_load_config_applies_namespace_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r"apiVersion: v1
kind: Config
current-context: dev
clusters:
- name: dev
  cluster:
    server: https://127.0.0.1:6443
    insecure-skip-tls-verify: true
contexts:
- name: dev
  context:
    cluster: dev
    user: dev
    namespace: team-a
users:
- name: dev
  user:
    token: abc
"
        )
        .unwrap();

        let options = ConnectionOptions {
            kubeconfig: Some(file.path().to_path_buf()),
            ..ConnectionOptions::default()
        };
        let config = load(&options).unwrap();
        assert_eq!(config.default_namespace, "team-a");

        let options = ConnectionOptions {
            namespace: Some("bar".to_string()),
            ..options
        };
        let config = load(&options).unwrap();
        assert_eq!(config.default_namespace, "bar");
    }
}

//! Error types for cluster access and printing.

use std::io;
use thiserror::Error;

/// Result type alias using `ClientError`.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised while talking to the cluster.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The kubeconfig file could not be loaded or is invalid.
    #[error("invalid kubeconfig: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    /// Neither in-cluster nor kubeconfig configuration could be found.
    #[error("unable to load cluster configuration: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    /// The API server answered with an error status.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the server.
        code: u16,
        /// Machine readable reason, e.g. `NotFound` or `Forbidden`.
        reason: String,
        /// Human readable message from the server.
        message: String,
    },

    /// Transport or decoding failure inside the client.
    #[error(transparent)]
    Kube(kube::Error),

    /// The async runtime driving the client could not be started.
    #[error("failed to start client runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl From<kube::Error> for ClientError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(response) => Self::Api {
                code: response.code,
                reason: response.reason,
                message: response.message,
            },
            other => Self::Kube(other),
        }
    }
}

/// Errors raised by the structured printer.
#[derive(Error, Debug)]
pub enum PrintError {
    /// The requested output format has no printer.
    #[error(
        "unable to match a printer suitable for the output format \"{format}\", allowed formats are: {allowed}"
    )]
    UnsupportedFormat {
        /// The format that was requested.
        format: String,
        /// Comma separated list of accepted formats.
        allowed: &'static str,
    },

    /// JSON serialization failed.
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

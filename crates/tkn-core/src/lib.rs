//! Tekton Triggers resource types, cluster access and output helpers.
//!
//! `tkn-core` holds everything the `tkn` command line needs that is not
//! argument parsing: the `TriggerBinding` resource model, a blocking client
//! for listing those resources from a Kubernetes API server, and the
//! printing building blocks (human readable ages and a structured JSON/YAML
//! printer).
//!
//! # Examples
//!
//! ```no_run
//! use tkn_core::ConnectionOptions;
//! use tkn_core::KubeParams;
//! use tkn_core::Params;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = KubeParams::new(ConnectionOptions::default());
//! let client = params.triggers()?;
//! let bindings = client.list_trigger_bindings(client.namespace())?;
//! for binding in &bindings.items {
//!     println!("{}", binding.name());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod clock;
pub mod cluster;
pub mod error;
pub mod formatted;
pub mod printer;
pub mod resource;

// Re-export main API types
pub use client::Params;
pub use client::TriggersClient;
pub use clock::Clock;
pub use clock::SystemClock;
pub use cluster::ConnectionOptions;
pub use cluster::KubeParams;
pub use cluster::KubeTriggersClient;
pub use error::ClientError;
pub use error::PrintError;
pub use error::Result;
pub use printer::print_object;
pub use resource::TriggerBinding;
pub use resource::TriggerBindingList;

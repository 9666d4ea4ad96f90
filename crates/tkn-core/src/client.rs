//! Client abstractions consumed by commands.

use chrono::DateTime;
use chrono::Utc;

use crate::Result;
use crate::TriggerBindingList;

/// Read access to Tekton Triggers resources.
pub trait TriggersClient {
    /// Namespace the client targets when the caller does not pick one.
    fn namespace(&self) -> &str;

    /// Lists every `TriggerBinding` in `namespace`, or across all namespaces
    /// when `namespace` is empty.
    ///
    /// The returned list is whatever the server sent; its `apiVersion` and
    /// `kind` may be empty.
    fn list_trigger_bindings(&self, namespace: &str) -> Result<TriggerBindingList>;
}

/// Execution parameters handed to every command.
pub trait Params {
    /// Resolves a connected Triggers client.
    fn triggers(&self) -> Result<Box<dyn TriggersClient>>;

    /// The "now" reference for age columns.
    fn time(&self) -> DateTime<Utc>;
}

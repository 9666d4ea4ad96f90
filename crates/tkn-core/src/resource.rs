//! Tekton Triggers `TriggerBinding` resource model.

use std::borrow::Cow;

use chrono::DateTime;
use chrono::Utc;
use k8s_openapi::NamespaceResourceScope;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use kube::Resource;
use serde::Deserialize;
use serde::Serialize;

/// API group of the Tekton Triggers resources.
pub const GROUP: &str = "triggers.tekton.dev";

/// API version served for `TriggerBinding`.
pub const VERSION: &str = "v1alpha1";

/// `apiVersion` stamped on listed collections.
pub const LIST_API_VERSION: &str = "triggers.tekton.dev/v1alpha1";

/// `kind` stamped on listed collections.
pub const LIST_KIND: &str = "TriggerBindingList";

/// A binding of event payload fields to named parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerBinding {
    /// `apiVersion`, usually empty on list items.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// `kind`, usually empty on list items.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Standard object metadata.
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Binding parameters.
    #[serde(default)]
    pub spec: TriggerBindingSpec,
}

/// Desired state of a [`TriggerBinding`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerBindingSpec {
    /// Parameters extracted from the incoming event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

/// A single named binding parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Value expression, e.g. `$(body.head_commit.id)`.
    pub value: String,
}

impl TriggerBinding {
    /// Creates a binding with the given name and namespace.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            metadata: ObjectMeta {
                name: Some(name.into()),
                namespace: Some(namespace.into()),
                ..ObjectMeta::default()
            },
            ..Self::default()
        }
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.metadata.creation_timestamp = Some(Time(timestamp));
        self
    }

    /// Object name, empty if unset.
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Object namespace, empty if unset.
    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    /// Time the server created the object.
    pub fn creation_timestamp(&self) -> Option<DateTime<Utc>> {
        self.metadata.creation_timestamp.as_ref().map(|t| t.0)
    }
}

impl Resource for TriggerBinding {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        Cow::Borrowed("TriggerBinding")
    }

    fn group(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(GROUP)
    }

    fn version(_: &()) -> Cow<'_, str> {
        Cow::Borrowed(VERSION)
    }

    fn plural(_: &()) -> Cow<'_, str> {
        Cow::Borrowed("triggerbindings")
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

/// An ordered collection of [`TriggerBinding`]s as returned by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerBindingList {
    /// `apiVersion` of the collection.
    #[serde(default)]
    pub api_version: String,

    /// `kind` of the collection.
    #[serde(default)]
    pub kind: String,

    /// List metadata (resource version, continue token).
    #[serde(default)]
    pub metadata: ListMeta,

    /// Items in server order.
    #[serde(default)]
    pub items: Vec<TriggerBinding>,
}

impl TriggerBindingList {
    /// Creates an untagged list holding `items`.
    pub fn new(items: Vec<TriggerBinding>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Overwrites the collection's `apiVersion` and `kind`.
    pub fn set_group_version_kind(&mut self, api_version: &str, kind: &str) {
        api_version.clone_into(&mut self.api_version);
        kind.clone_into(&mut self.kind);
    }
}

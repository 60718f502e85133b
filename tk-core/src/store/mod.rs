mod kube_store;

use async_trait::async_trait;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;

pub use kube_store::KubeStore;

use crate::errors::*;
use crate::kinds::TektonKind;

/// The only two things the delete engine needs from the cluster: remove one named object, and
/// list the names of objects of a kind matching a label selector.  Implementations issue exactly
/// one remote call per invocation and never retry.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn delete(&self, kind: TektonKind, name: &str) -> EmptyResult;
    async fn list(&self, kind: TektonKind, selector: &str) -> anyhow::Result<Vec<String>>;
}

#[cfg(test)]
mod tests;

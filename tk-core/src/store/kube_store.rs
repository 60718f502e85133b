use std::fmt::Debug;

use async_trait::async_trait;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{
    DeleteParams,
    ListParams,
};
use serde::de::DeserializeOwned;
use tracing::*;

use super::ResourceStore;
use crate::prelude::*;

// Typed API handles for the Tekton custom resources, all scoped to a single namespace.
#[derive(Clone)]
pub struct KubeStore {
    client: kube::Client,
    namespace: String,
}

impl KubeStore {
    pub fn new(client: kube::Client, namespace: &str) -> KubeStore {
        KubeStore { client, namespace: namespace.into() }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn api<K>(&self) -> kube::Api<K>
    where
        K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()>,
    {
        kube::Api::namespaced(self.client.clone(), &self.namespace)
    }

    async fn delete_named<K>(&self, name: &str) -> EmptyResult
    where
        K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()> + Clone + Debug + DeserializeOwned,
    {
        // We don't care whether the apiserver hands back the object (foreground deletion in
        // progress) or a Status; either way the request was accepted.
        self.api::<K>().delete(name, &DeleteParams::default()).await?;
        Ok(())
    }

    async fn list_names<K>(&self, selector: &str) -> anyhow::Result<Vec<String>>
    where
        K: kube::Resource<Scope = NamespaceResourceScope, DynamicType = ()> + Clone + Debug + DeserializeOwned,
    {
        let objs = self.api::<K>().list(&ListParams::default().labels(selector)).await?;
        Ok(objs.items.iter().map(|obj| obj.name_any()).collect())
    }
}

#[async_trait]
impl ResourceStore for KubeStore {
    async fn delete(&self, kind: TektonKind, name: &str) -> EmptyResult {
        debug!("deleting {kind} {}/{name}", self.namespace);
        match kind {
            TektonKind::Task => self.delete_named::<Task>(name).await,
            TektonKind::TaskRun => self.delete_named::<TaskRun>(name).await,
            TektonKind::TriggerTemplate => self.delete_named::<TriggerTemplate>(name).await,
        }
    }

    async fn list(&self, kind: TektonKind, selector: &str) -> anyhow::Result<Vec<String>> {
        debug!("listing {kind} objects in {} matching {selector}", self.namespace);
        match kind {
            TektonKind::Task => self.list_names::<Task>(selector).await,
            TektonKind::TaskRun => self.list_names::<TaskRun>(selector).await,
            TektonKind::TriggerTemplate => self.list_names::<TriggerTemplate>(selector).await,
        }
    }
}

use std::path::PathBuf;

use anyhow::Context;
use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use tracing::*;

const CLIENT_ERR_MSG: &str = "failed to create tekton client";

// Connection settings shared by every command that talks to the cluster
#[derive(clap::Args, Clone, Debug, Default)]
pub struct Params {
    #[arg(short = 'k', long, long_help = "kubectl config file (default: $HOME/.kube/config)")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(short = 'c', long, long_help = "name of the kubeconfig context to use (default: current-context)")]
    pub context: Option<String>,

    #[arg(short = 'n', long, long_help = "namespace to use (default: from the kubeconfig context)")]
    pub namespace: Option<String>,
}

impl Params {
    async fn config(&self) -> anyhow::Result<kube::Config> {
        let opts = KubeConfigOptions { context: self.context.clone(), ..Default::default() };
        let config = match &self.kubeconfig {
            Some(path) => kube::Config::from_custom_kubeconfig(Kubeconfig::read_from(path)?, &opts).await?,
            None if self.context.is_some() => kube::Config::from_kubeconfig(&opts).await?,
            None => kube::Config::infer().await?,
        };
        Ok(config)
    }

    // If we can't get a client there's no point in going any further, so nothing gets deleted
    pub async fn clients(&self) -> anyhow::Result<(kube::Client, String)> {
        let config = self.config().await.context(CLIENT_ERR_MSG)?;
        let namespace = self.namespace.clone().unwrap_or_else(|| config.default_namespace.clone());
        debug!("using cluster {} and namespace {namespace}", config.cluster_url);

        let client = kube::Client::try_from(config).context(CLIENT_ERR_MSG)?;
        Ok((client, namespace))
    }
}

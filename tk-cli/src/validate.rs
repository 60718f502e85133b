use tk_core::prelude::*;

use crate::errors::TknError;

pub async fn namespace_exists(client: kube::Client, namespace: &str) -> EmptyResult {
    let ns_api = kube::Api::<corev1::Namespace>::all(client);
    match ns_api.get_opt(namespace).await? {
        Some(_) => Ok(()),
        None => Err(TknError::namespace_not_found(namespace)),
    }
}

pub mod constants;
pub mod delete;
pub mod errors;
pub mod kinds;
pub mod logging;
pub mod store;

pub mod prelude {
    pub use k8s_openapi::api::core::v1 as corev1;
    pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
    pub use kube::ResourceExt;
    pub use tk_api::v1alpha1::{
        Task,
        TaskRun,
        TriggerTemplate,
    };

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
    pub use crate::kinds::{
        DeletePlan,
        TektonKind,
    };
}

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::ParamSpec;

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub name: Option<String>,
    pub image: String,
    pub command: Option<Vec<String>>,
    pub args: Option<Vec<String>>,
    pub script: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "tekton.dev", version = "v1alpha1", kind = "Task", namespaced)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    pub description: Option<String>,
    pub params: Option<Vec<ParamSpec>>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

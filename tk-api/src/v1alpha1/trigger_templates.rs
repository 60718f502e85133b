use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::ParamSpec;

// Resource templates are arbitrary kubernetes objects with $(params.foo) placeholders, so we
// don't try to type them.
#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "triggers.tekton.dev", version = "v1alpha1", kind = "TriggerTemplate", namespaced)]
#[kube(shortname = "tt")]
#[serde(rename_all = "camelCase")]
pub struct TriggerTemplateSpec {
    pub params: Option<Vec<ParamSpec>>,

    #[serde(default, rename = "resourcetemplates")]
    pub resource_templates: Vec<serde_json::Value>,
}

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

use super::Param;

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub name: String,
    pub kind: Option<String>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(group = "tekton.dev", version = "v1alpha1", kind = "TaskRun", namespaced)]
#[kube(shortname = "tr", shortname = "trs")]
#[kube(status = "TaskRunStatus")]
#[kube(
    printcolumn = r#"{"name":"start time", "type":"string", "description":"taskrun start time", "jsonPath":".status.startTime"}"#,
    printcolumn = r#"{"name":"completion time", "type":"string", "description":"taskrun completion time", "jsonPath":".status.completionTime"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunSpec {
    pub task_ref: Option<TaskRef>,
    pub params: Option<Vec<Param>>,
    pub service_account_name: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRunStatus {
    pub pod_name: Option<String>,
    pub start_time: Option<String>,
    pub completion_time: Option<String>,
}

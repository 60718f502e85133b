use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use rstest::fixture;
use tk_api::v1alpha1::*;

use crate::constants::*;

#[fixture]
pub fn test_namespace(#[default(TEST_NAMESPACE)] name: &str) -> corev1::Namespace {
    corev1::Namespace {
        metadata: metav1::ObjectMeta { name: Some(name.into()), ..Default::default() },
        ..Default::default()
    }
}

#[fixture]
pub fn test_task(#[default(TEST_TASK_NAME)] name: &str) -> Task {
    let mut task = Task::new(
        name,
        TaskSpec {
            steps: vec![Step {
                name: Some("echo".into()),
                image: "alpine:3".into(),
                script: Some("echo hello".into()),
                ..Default::default()
            }],
            ..Default::default()
        },
    );
    task.metadata.namespace = Some(TEST_NAMESPACE.into());
    task
}

#[fixture]
pub fn test_task_run(#[default(TEST_TASK_RUN_NAME)] name: &str, #[default(TEST_TASK_NAME)] task_name: &str) -> TaskRun {
    let mut task_run = TaskRun::new(
        name,
        TaskRunSpec {
            task_ref: Some(TaskRef { name: task_name.into(), kind: None }),
            ..Default::default()
        },
    );
    task_run.metadata.namespace = Some(TEST_NAMESPACE.into());
    task_run.metadata.labels = Some([("tekton.dev/task".to_string(), task_name.to_string())].into());
    task_run
}

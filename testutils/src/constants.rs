pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_TASK_NAME: &str = "test-task";
pub const TEST_TASK_RUN_NAME: &str = "test-task-run";
pub const TEST_TRIGGER_TEMPLATE_NAME: &str = "test-trigger-template";

pub const TEKTON_API_PREFIX: &str = "/apis/tekton.dev/v1alpha1";
pub const TRIGGERS_API_PREFIX: &str = "/apis/triggers.tekton.dev/v1alpha1";

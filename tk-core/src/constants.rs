// Ownership labels; the controllers stamp these on objects created on behalf of a parent
pub const TASK_LABEL_KEY: &str = "tekton.dev/task";
pub const TASK_RUN_LABEL_KEY: &str = "tekton.dev/taskRun";
pub const TRIGGER_TEMPLATE_LABEL_KEY: &str = "triggers.tekton.dev/triggertemplate";

// Defaults
pub const DEFAULT_VERBOSITY: &str = "warn";

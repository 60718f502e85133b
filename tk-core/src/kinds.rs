use std::fmt;

use crate::constants::*;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TektonKind {
    Task,
    TaskRun,
    TriggerTemplate,
}

impl TektonKind {
    // Lower-case form used in prompts and error messages
    pub fn singular(&self) -> &'static str {
        match self {
            TektonKind::Task => "task",
            TektonKind::TaskRun => "taskrun",
            TektonKind::TriggerTemplate => "triggertemplate",
        }
    }

    // Title-case plural used in the deletion report
    pub fn plural(&self) -> &'static str {
        match self {
            TektonKind::Task => "Tasks",
            TektonKind::TaskRun => "TaskRuns",
            TektonKind::TriggerTemplate => "TriggerTemplates",
        }
    }

    pub fn owner_label_key(&self) -> &'static str {
        match self {
            TektonKind::Task => TASK_LABEL_KEY,
            TektonKind::TaskRun => TASK_RUN_LABEL_KEY,
            TektonKind::TriggerTemplate => TRIGGER_TEMPLATE_LABEL_KEY,
        }
    }
}

impl fmt::Display for TektonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular())
    }
}

/// The kinds a single batch delete operates on: the primary kind named on the command line, and
/// optionally the kind of the objects it owns, which are removed when cascading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeletePlan {
    pub primary: TektonKind,
    pub dependent: Option<TektonKind>,
}

impl DeletePlan {
    pub fn new(primary: TektonKind) -> DeletePlan {
        DeletePlan { primary, dependent: None }
    }

    pub fn with_dependents(mut self, dependent: TektonKind) -> DeletePlan {
        self.dependent = Some(dependent);
        self
    }
}

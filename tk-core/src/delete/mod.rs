// The cascading batch delete engine.
//
// A `BatchDeleter` walks the requested primary names in order, deleting each one and (when
// cascading) every dependent that carries the primary's ownership label.  A failure on one object
// never stops the batch: every attempt is recorded as a `DeleteOutcome` in the returned
// `BatchResult`, which carries both the successes and the aggregate failure, if any.
mod batch;
mod executor;
mod resolver;
mod selector;

pub mod report;

use std::fmt;

pub use batch::BatchDeleter;
pub use executor::DeleteExecutor;
pub use resolver::DependentResolver;
pub use selector::dependent_selector;

use crate::errors::*;
use crate::kinds::{
    DeletePlan,
    TektonKind,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeleteRequest {
    primary_names: Vec<String>,
    cascade: bool,
    force_confirmed: bool,
}

impl DeleteRequest {
    pub fn new(primary_names: Vec<String>, cascade: bool, force_confirmed: bool) -> DeleteRequest {
        DeleteRequest { primary_names, cascade, force_confirmed }
    }

    pub fn primary_names(&self) -> &[String] {
        &self.primary_names
    }

    pub fn cascade(&self) -> bool {
        self.cascade
    }

    pub fn force_confirmed(&self) -> bool {
        self.force_confirmed
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RefKind {
    Primary,
    Dependent,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRef {
    pub kind: RefKind,
    pub name: String,
}

impl ResourceRef {
    pub fn primary(name: &str) -> ResourceRef {
        ResourceRef { kind: RefKind::Primary, name: name.into() }
    }

    pub fn dependent(name: &str) -> ResourceRef {
        ResourceRef { kind: RefKind::Dependent, name: name.into() }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FailureDetail {
    #[error("failed to delete {kind} {name:?}: {cause}")]
    Delete { kind: TektonKind, name: String, cause: String },

    #[error("failed to look up {dependent}s owned by {kind} {name:?}: {cause}")]
    DependentLookup {
        kind: TektonKind,
        name: String,
        dependent: TektonKind,
        cause: String,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeleteOutcome {
    pub target: ResourceRef,
    pub error: Option<FailureDetail>,
}

impl DeleteOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchResult {
    plan: DeletePlan,
    outcomes: Vec<DeleteOutcome>,
    successful_primary: Vec<String>,
    successful_dependent: Vec<String>,
}

impl BatchResult {
    pub(crate) fn new(plan: DeletePlan) -> BatchResult {
        BatchResult {
            plan,
            outcomes: vec![],
            successful_primary: vec![],
            successful_dependent: vec![],
        }
    }

    pub(crate) fn record(&mut self, target: ResourceRef, res: Result<(), FailureDetail>) {
        if res.is_ok() {
            match target.kind {
                RefKind::Primary => self.successful_primary.push(target.name.clone()),
                RefKind::Dependent => self.successful_dependent.push(target.name.clone()),
            }
        }
        self.outcomes.push(DeleteOutcome { target, error: res.err() });
    }

    pub fn plan(&self) -> DeletePlan {
        self.plan
    }

    pub fn outcomes(&self) -> &[DeleteOutcome] {
        &self.outcomes
    }

    pub fn successful_primary(&self) -> &[String] {
        &self.successful_primary
    }

    pub fn successful_dependent(&self) -> &[String] {
        &self.successful_dependent
    }

    pub fn failures(&self) -> impl Iterator<Item = &FailureDetail> {
        self.outcomes.iter().filter_map(|o| o.error.as_ref())
    }

    pub fn combined_error(&self) -> Option<BatchError> {
        let failures: Vec<_> = self.failures().cloned().collect();
        if failures.is_empty() { None } else { Some(BatchError { failures }) }
    }
}

// Every failure from a batch, in the order they happened
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub struct BatchError {
    failures: Vec<FailureDetail>,
}

impl BatchError {
    pub fn failures(&self) -> &[FailureDetail] {
        &self.failures
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msgs: Vec<_> = self.failures.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", msgs.join("; "))
    }
}

#[cfg(test)]
mod tests;

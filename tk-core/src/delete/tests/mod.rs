
use assertables::*;
use mockall::Sequence;
use mockall::predicate::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::store::MockResourceStore;

const NOT_FOUND: &str = "not found";

#[fixture]
fn task_plan() -> DeletePlan {
    DeletePlan::new(TektonKind::Task).with_dependents(TektonKind::TaskRun)
}

#[fixture]
fn trigger_template_plan() -> DeletePlan {
    DeletePlan::new(TektonKind::TriggerTemplate)
}

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn expect_delete(
    store: &mut MockResourceStore,
    seq: &mut Sequence,
    kind: TektonKind,
    name: &'static str,
    failure: Option<&'static str>,
) {
    store
        .expect_delete()
        .with(eq(kind), eq(name))
        .times(1)
        .in_sequence(seq)
        .returning(move |_, _| match failure {
            None => Ok(()),
            Some(msg) => Err(anyhow!(msg)),
        });
}

fn expect_list(store: &mut MockResourceStore, seq: &mut Sequence, selector: &'static str, found: Vec<&'static str>) {
    store
        .expect_list()
        .with(eq(TektonKind::TaskRun), eq(selector))
        .times(1)
        .in_sequence(seq)
        .returning(move |_, _| Ok(names(&found)));
}

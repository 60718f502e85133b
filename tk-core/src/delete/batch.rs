use tracing::*;

use super::*;
use crate::store::ResourceStore;

struct Cascade<'a, S: ?Sized> {
    resolver: DependentResolver<'a, S>,
    executor: DeleteExecutor<'a, S>,
}

pub struct BatchDeleter<'a, S: ?Sized> {
    plan: DeletePlan,
    primary: DeleteExecutor<'a, S>,
    cascade: Option<Cascade<'a, S>>,
}

impl<'a, S: ResourceStore + ?Sized> BatchDeleter<'a, S> {
    pub fn new(store: &'a S, plan: DeletePlan) -> BatchDeleter<'a, S> {
        let cascade = plan.dependent.map(|kind| Cascade {
            resolver: DependentResolver::new(store, kind),
            executor: DeleteExecutor::new(store, kind),
        });

        BatchDeleter {
            plan,
            primary: DeleteExecutor::new(store, plan.primary),
            cascade,
        }
    }

    // Every name is attempted, in order, no matter what happened to the ones before it.  A
    // primary's dependents are only touched once the primary itself is gone, and they're all
    // attempted before moving on to the next primary.
    pub async fn run(&self, request: &DeleteRequest) -> BatchResult {
        info!(
            "deleting {} {}(s) (cascade: {}, forced: {})",
            request.primary_names().len(),
            self.plan.primary,
            request.cascade(),
            request.force_confirmed(),
        );

        let mut result = BatchResult::new(self.plan);
        for name in request.primary_names() {
            let target = ResourceRef::primary(name);
            let res = self.primary.delete_one(&target).await;
            let deleted = res.is_ok();
            result.record(target, res);

            if !deleted || !request.cascade() {
                continue;
            }

            let Some(cascade) = &self.cascade else {
                debug!("{}s have no dependents, nothing to cascade to", self.plan.primary);
                continue;
            };
            self.delete_dependents(cascade, name, &mut result).await;
        }

        result
    }

    async fn delete_dependents(&self, cascade: &Cascade<'a, S>, primary_name: &str, result: &mut BatchResult) {
        let selector = dependent_selector(self.plan.primary, primary_name);
        let dependents = match cascade.resolver.resolve(&selector).await {
            Ok(names) => names,
            Err(err) => {
                // The primary delete already went through and stays recorded as a success; the
                // lookup failure is charged to it as a separate outcome.
                result.record(
                    ResourceRef::primary(primary_name),
                    Err(FailureDetail::DependentLookup {
                        kind: self.plan.primary,
                        name: primary_name.into(),
                        dependent: cascade.resolver.kind(),
                        cause: format!("{err:#}"),
                    }),
                );
                return;
            },
        };

        for name in &dependents {
            let target = ResourceRef::dependent(name);
            let res = cascade.executor.delete_one(&target).await;
            result.record(target, res);
        }
    }
}

use tracing::*;

use super::{
    FailureDetail,
    ResourceRef,
};
use crate::kinds::TektonKind;
use crate::store::ResourceStore;

// Issues exactly one delete call per target; "not found" is surfaced like any other error.
pub struct DeleteExecutor<'a, S: ?Sized> {
    store: &'a S,
    kind: TektonKind,
}

impl<'a, S: ResourceStore + ?Sized> DeleteExecutor<'a, S> {
    pub fn new(store: &'a S, kind: TektonKind) -> DeleteExecutor<'a, S> {
        DeleteExecutor { store, kind }
    }

    pub async fn delete_one(&self, target: &ResourceRef) -> Result<(), FailureDetail> {
        match self.store.delete(self.kind, &target.name).await {
            Ok(()) => {
                info!("deleted {} {}", self.kind, target.name);
                Ok(())
            },
            Err(err) => {
                debug!("could not delete {} {}: {err:#}", self.kind, target.name);
                Err(FailureDetail::Delete {
                    kind: self.kind,
                    name: target.name.clone(),
                    cause: format!("{err:#}"),
                })
            },
        }
    }
}

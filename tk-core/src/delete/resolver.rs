use tracing::*;

use crate::errors::*;
use crate::kinds::TektonKind;
use crate::store::ResourceStore;

pub struct DependentResolver<'a, S: ?Sized> {
    store: &'a S,
    kind: TektonKind,
}

impl<'a, S: ResourceStore + ?Sized> DependentResolver<'a, S> {
    pub fn new(store: &'a S, kind: TektonKind) -> DependentResolver<'a, S> {
        DependentResolver { store, kind }
    }

    pub fn kind(&self) -> TektonKind {
        self.kind
    }

    // No matches is a normal outcome and comes back as an empty list; names are returned in
    // whatever order the store lists them.
    pub async fn resolve(&self, selector: &str) -> anyhow::Result<Vec<String>> {
        ensure!(!selector.is_empty(), "cannot look up {}s with an empty label selector", self.kind);

        let names = self.store.list(self.kind, selector).await?;
        debug!("found {} {}(s) matching {selector}", names.len(), self.kind);
        Ok(names)
    }
}

use crate::kinds::TektonKind;

// Dependents carry their owner's name under the owner kind's label key, so an equality selector
// on that key matches exactly the objects owned by this primary.
pub fn dependent_selector(primary_kind: TektonKind, primary_name: &str) -> String {
    format!("{}={}", primary_kind.owner_label_key(), primary_name)
}

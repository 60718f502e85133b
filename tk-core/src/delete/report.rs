use super::BatchResult;

pub fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<_> = names.iter().map(|name| format!("'{name}'")).collect();
    quoted.join(", ")
}

// Children are reported before their parents; failures are left to the caller, who gets them
// from `BatchResult::failures` or `BatchResult::combined_error`.
pub fn render(result: &BatchResult) -> Vec<String> {
    let mut lines = vec![];
    if let Some(dependent) = result.plan().dependent {
        if !result.successful_dependent().is_empty() {
            lines.push(format!("{} deleted: {}", dependent.plural(), quoted_list(result.successful_dependent())));
        }
    }

    if !result.successful_primary().is_empty() {
        lines.push(format!(
            "{} deleted: {}",
            result.plan().primary.plural(),
            quoted_list(result.successful_primary())
        ));
    }

    lines
}

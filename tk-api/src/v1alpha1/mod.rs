mod params;
mod task_runs;
mod tasks;
mod trigger_templates;

pub use params::*;
pub use task_runs::*;
pub use tasks::*;
pub use trigger_templates::*;

use clap::Subcommand;
use tk_core::prelude::*;

use crate::delete;

const DELETE_EXAMPLE: &str = r#"Delete Tasks with names 'foo' and 'bar' in namespace 'quux':

    tkn task delete foo bar -n quux

or

    tkn t rm foo bar -n quux
"#;

#[derive(Subcommand)]
pub enum TaskSubcommand {
    #[command(about = "delete task resources in a namespace", visible_alias = "rm", after_help = DELETE_EXAMPLE)]
    Delete(DeleteArgs),
}

#[derive(clap::Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub common: delete::Args,

    #[arg(short = 'a', long = "all", long_help = "whether to delete related resources (taskruns)")]
    pub all: bool,
}

pub fn delete_plan() -> DeletePlan {
    DeletePlan::new(TektonKind::Task).with_dependents(TektonKind::TaskRun)
}

pub async fn cmd(subcommand: &TaskSubcommand) -> EmptyResult {
    match subcommand {
        TaskSubcommand::Delete(args) => delete::cmd(&args.common, delete_plan(), args.all).await,
    }
}

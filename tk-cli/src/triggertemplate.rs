use clap::Subcommand;
use tk_core::prelude::*;

use crate::delete;

const DELETE_EXAMPLE: &str = r#"Delete TriggerTemplates with names 'foo' and 'bar' in namespace 'quux':

    tkn triggertemplate delete foo bar -n quux

or

    tkn tt rm foo bar -n quux
"#;

#[derive(Subcommand)]
pub enum TriggerTemplateSubcommand {
    #[command(about = "delete triggertemplates in a namespace", visible_alias = "rm", after_help = DELETE_EXAMPLE)]
    Delete(delete::Args),
}

pub fn delete_plan() -> DeletePlan {
    DeletePlan::new(TektonKind::TriggerTemplate)
}

pub async fn cmd(subcommand: &TriggerTemplateSubcommand) -> EmptyResult {
    match subcommand {
        TriggerTemplateSubcommand::Delete(args) => delete::cmd(args, delete_plan(), false).await,
    }
}

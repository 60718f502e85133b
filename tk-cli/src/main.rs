mod completions;
mod delete;
mod errors;
mod options;
mod params;
mod task;
mod triggertemplate;
mod validate;

use clap::{
    CommandFactory,
    Parser,
    Subcommand,
    crate_version,
};
use tk_core::logging;
use tk_core::prelude::*;

#[derive(Parser)]
#[command(about = "CLI for interacting with Tekton", version, propagate_version = true)]
struct TknCommandRoot {
    #[command(subcommand)]
    subcommand: TknSubcommand,

    #[arg(short, long, default_value = DEFAULT_VERBOSITY)]
    verbosity: String,
}

#[derive(Subcommand)]
enum TknSubcommand {
    #[command(about = "generate shell completions for tkn")]
    Completion(completions::Args),

    #[command(subcommand, about = "manage tasks", visible_aliases = &["t", "tasks"])]
    Task(task::TaskSubcommand),

    #[command(
        subcommand,
        name = "triggertemplate",
        about = "manage triggertemplates",
        visible_aliases = &["tt", "triggertemplates"],
    )]
    TriggerTemplate(triggertemplate::TriggerTemplateSubcommand),

    #[command(about = "print the tkn version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = TknCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        TknSubcommand::Completion(args) => completions::cmd(args, TknCommandRoot::command()),
        TknSubcommand::Task(subcommand) => task::cmd(subcommand).await,
        TknSubcommand::TriggerTemplate(subcommand) => triggertemplate::cmd(subcommand).await,
        TknSubcommand::Version => {
            println!("tkn {}", crate_version!());
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests;

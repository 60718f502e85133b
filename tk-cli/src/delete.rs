use std::io::{
    self,
    BufRead,
    Write,
};

use tk_core::delete::{
    BatchDeleter,
    DeleteRequest,
    report,
};
use tk_core::prelude::*;
use tk_core::store::{
    KubeStore,
    ResourceStore,
};
use tracing::*;

use crate::options::DeleteOptions;
use crate::params::Params;
use crate::validate;

// Flags shared by every `<resource> delete` command
#[derive(clap::Args)]
pub struct Args {
    #[arg(required = true, long_help = "names of the resources to delete")]
    pub names: Vec<String>,

    #[arg(short, long, long_help = "skip the confirmation prompt")]
    pub force: bool,

    #[command(flatten)]
    pub params: Params,
}

pub async fn cmd(args: &Args, plan: DeletePlan, cascade: bool) -> EmptyResult {
    run(args, plan, cascade, &mut io::stdin().lock(), &mut io::stdout(), &mut io::stderr()).await
}

pub(crate) async fn run(
    args: &Args,
    plan: DeletePlan,
    cascade: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> EmptyResult {
    let (client, namespace) = args.params.clients().await?;
    validate::namespace_exists(client.clone(), &namespace).await?;

    let opts = DeleteOptions { kind: plan.primary, force: args.force, delete_all: cascade };
    opts.check_options(&args.names, input, out)?;

    let store = KubeStore::new(client, &namespace);
    debug!("deleting from namespace {}", store.namespace());
    let request = DeleteRequest::new(args.names.clone(), cascade, args.force);
    execute(&store, plan, &request, out, err).await
}

// Failures go to `err` in the order they happened, the success summary to `out`; the returned
// error carries every failure so the process exits non-zero.
pub(crate) async fn execute<S: ResourceStore + ?Sized>(
    store: &S,
    plan: DeletePlan,
    request: &DeleteRequest,
    out: &mut impl Write,
    err: &mut impl Write,
) -> EmptyResult {
    let result = BatchDeleter::new(store, plan).run(request).await;

    for failure in result.failures() {
        writeln!(err, "{failure}")?;
    }
    for line in report::render(&result) {
        writeln!(out, "{line}")?;
    }

    match result.combined_error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

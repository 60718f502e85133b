use std::io::{
    self,
    Write,
};

use clap::value_parser;
use clap_complete::{
    Shell,
    generate,
};
use tk_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        long_help = "name of the shell to generate completions for",
        value_parser = value_parser!(clap_complete::Shell),
    )]
    pub shell: Shell,
}

pub(crate) fn write_completions(shell: Shell, cmd: &mut clap::Command, out: &mut impl Write) {
    generate(shell, cmd, "tkn", out);
}

pub fn cmd(args: &Args, mut cmd: clap::Command) -> EmptyResult {
    write_completions(args.shell, &mut cmd, &mut io::stdout());
    Ok(())
}

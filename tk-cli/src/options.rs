use std::io::{
    BufRead,
    Write,
};

use tk_core::delete::report::quoted_list;
use tk_core::prelude::*;

use crate::errors::TknError;

// The confirmation gate in front of a delete; the engine itself never prompts.
pub struct DeleteOptions {
    pub kind: TektonKind,
    pub force: bool,
    pub delete_all: bool,
}

impl DeleteOptions {
    pub fn check_options(&self, names: &[String], input: &mut impl BufRead, out: &mut impl Write) -> EmptyResult {
        if self.force {
            return Ok(());
        }

        let related = if self.delete_all { " and related resources" } else { "" };
        write!(out, "Are you sure you want to delete {} {}{related} (y/n): ", self.kind, quoted_list(names))?;
        out.flush()?;

        for line in input.lines() {
            match line?.trim() {
                "y" => return Ok(()),
                "n" => break,
                _ => {
                    write!(out, "Please enter (y/n): ")?;
                    out.flush()?;
                },
            }
        }

        // Running out of input without a "y" counts as a no
        let quoted: Vec<_> = names.iter().map(|name| format!("{name:?}")).collect();
        Err(TknError::delete_canceled(format!("{} {}", self.kind, quoted.join(", "))))
    }
}

use std::io;

use anyhow::Result;

use super::context::{CommandContext, note};
use crate::cli::{args::CleanCommand, exit_status::ExitStatus, report::print_cleaned_to};

pub fn clean(cmd: CleanCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let cleaned = ctx.directives.clean(&ctx.comment);

    if ctx.verbose {
        let stripped = ctx
            .comment
            .split('\n')
            .filter(|line| ctx.directives.is_directive(line))
            .count();
        note(&format!("Stripped {} directive line(s)", stripped));
    }

    print_cleaned_to(&cleaned, &mut io::stdout().lock())?;
    Ok(ExitStatus::Success)
}

use std::io;

use anyhow::Result;

use super::context::{CommandContext, note};
use crate::cli::{args::CheckCommand, exit_status::ExitStatus, report::print_check_to};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let found = ctx.directives.has_tag(&ctx.comment, &ctx.tag);

    if ctx.verbose && !found {
        note(&format!(
            "No line starts with @{} (the tag must begin the line)",
            ctx.tag
        ));
    }
    if !cmd.quiet {
        print_check_to(found, &ctx.tag, &mut io::stdout().lock())?;
    }

    Ok(ExitStatus::from(found))
}

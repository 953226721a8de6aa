use std::io;

use anyhow::Result;

use super::context::CommandContext;
use crate::cli::{
    args::{LinesCommand, OutputFormat},
    exit_status::ExitStatus,
    report::{print_lines_json_to, print_lines_to},
};

pub fn lines(cmd: LinesCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let lines = ctx.directives.lines(&ctx.comment);

    let mut stdout = io::stdout().lock();
    match cmd.format {
        OutputFormat::Text => print_lines_to(&lines, &ctx.tag, &mut stdout)?,
        OutputFormat::Json => print_lines_json_to(&lines, &mut stdout)?,
    }

    Ok(ExitStatus::Success)
}

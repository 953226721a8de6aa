use std::{
    env, fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, load_config, validate_tag},
    directives::DirectiveSet,
};

/// Resolved settings and input shared by the comment commands.
///
/// CLI flags take precedence over the config file, which takes precedence
/// over the built-in defaults.
pub struct CommandContext {
    pub tag: String,
    pub directives: DirectiveSet,
    pub comment: String,
    pub verbose: bool,
}

impl CommandContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to resolve current directory")?;
        let config_result = load_config(&cwd)?;

        if args.verbose {
            match &config_result.path {
                Some(path) => note(&format!("Using config {}", path.display())),
                None => note(&format!(
                    "No {} found, using default configuration",
                    CONFIG_FILE_NAME
                )),
            }
        }

        let config = config_result.config;
        let tag = match &args.tag {
            Some(tag) => {
                validate_tag(tag)?;
                tag.clone()
            }
            None => config.tag.clone(),
        };
        let directives = if args.strip_prefixes.is_empty() {
            config.directive_set()
        } else {
            DirectiveSet::new(&args.strip_prefixes)
        };

        let comment = read_comment(args.input.as_deref())?;

        if args.verbose {
            note(&format!("Marker tag: @{}", tag));
            note(&format!(
                "Literal prefixes: [{}]",
                directives.literal_prefixes().join(", ")
            ));
            note(&format!(
                "Read {} line(s) from {}",
                comment.split('\n').count(),
                input_name(args.input.as_deref())
            ));
        }

        Ok(Self {
            tag,
            directives,
            comment,
            verbose: args.verbose,
        })
    }
}

/// Read the comment from `input`, or from stdin when absent or `-`.
pub fn read_comment(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read comment file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read comment from stdin")?;
            Ok(buf)
        }
    }
}

fn input_name(input: Option<&Path>) -> String {
    match input {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// Print a verbose diagnostic to stderr.
pub fn note(message: &str) {
    eprintln!("{} {}", "note:".bold().cyan(), message.dimmed());
}

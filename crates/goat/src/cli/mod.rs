//! The `goat` command line.
//!
//! Flags are parsed into [`Args`], frozen into a [`Config`], and handed to
//! [`execute`], which drives one pipeline run:
//!
//! ```text
//! read template → resolve format → read input → Pipeline::render → write once
//! ```
//!
//! Stdin and stdout are parameters so the whole run can be driven from tests
//! with [`MockStdin`] and an in-memory buffer.

mod args;
mod config;
mod input;
mod output;

use std::io::Write;

use anyhow::Context;

use crate::{resolve_format, Pipeline};

pub use args::Args;
pub use config::Config;
pub use input::{InputError, InputSource, MockStdin, RealStdin, StdinReader};
pub use output::OutputDestination;

/// Runs the command described by `args` against the real stdin and stdout.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    if args.list_formats {
        return list_formats(&Pipeline::new(), &mut handle)
            .context("failed to write format list");
    }

    // clap enforces --template unless --list-formats was given
    let config = Config::from_args(args).context("no template given (use --template)")?;
    execute(&config, &RealStdin, &mut handle)
}

/// Executes one render described by `config`.
///
/// The format is resolved before the input is read, so stdin without
/// `--informat` fails without blocking on the stream. Output is written only
/// after the render succeeded.
pub fn execute<R, W>(config: &Config, stdin: &R, stdout: &mut W) -> anyhow::Result<()>
where
    R: StdinReader + ?Sized,
    W: Write + ?Sized,
{
    let template = std::fs::read_to_string(&config.template).with_context(|| {
        format!("failed to read template {}", config.template.display())
    })?;
    log::debug!(
        "template {} ({} bytes)",
        config.template.display(),
        template.len()
    );

    let source_name = config.source_name();
    let format = resolve_format(config.input_format.as_deref(), source_name.as_deref())?;
    log::debug!(
        "input {} as {:?}",
        source_name.as_deref().unwrap_or("<stdin>"),
        format
    );

    let input = config.input_source().read(stdin)?;
    log::debug!("read {} bytes of input", input.len());

    let pipeline = Pipeline::new().with_template_dir(config.template_dir());
    let output = pipeline.render(&format, &input, &template, &config.output_format)?;
    log::info!(
        "rendered {} bytes of {} output",
        output.len(),
        config.output_format
    );

    let destination = config.destination();
    log::debug!("writing to {:?}", destination);
    destination.write(&output, stdout).with_context(|| match &destination {
        OutputDestination::Stdout => "failed to write to stdout".to_string(),
        OutputDestination::File(path) => format!("failed to write {}", path.display()),
    })?;
    Ok(())
}

/// Prints the registered input formats, one per line.
pub fn list_formats<W: Write + ?Sized>(pipeline: &Pipeline, out: &mut W) -> std::io::Result<()> {
    for format in pipeline.parsers().formats() {
        writeln!(out, "{}", format)?;
    }
    Ok(())
}

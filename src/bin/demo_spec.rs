//! Synthesizes the sample Users/Guilds document, prints it, and optionally
//! writes it to a file and pipes it through an external linter.

use clap::Parser;
use routedoc::demo::demo_registry;
use routedoc::linter::{run_external_linter, ExternalLinter};
use routedoc::logging::{init_logging, LogConfig};
use routedoc::output::{to_json, write_document, OutputFormat};
use routedoc::SpecOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "demo-spec")]
#[command(about = "Print the sample Users/Guilds OpenAPI document", long_about = None)]
struct Args {
    /// Also write the document here (e.g. demo.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pipe the document into an external linter
    #[arg(long, num_args = 0..=1, default_missing_value = "npx @redocly/cli lint /dev/stdin")]
    external: Option<ExternalLinter>,
}

fn main() -> anyhow::Result<()> {
    init_logging(&LogConfig::from_env())?;
    let args = Args::parse();

    let document = demo_registry().generate_spec(&SpecOptions::default());
    println!("{}", to_json(&document)?);

    if let Some(path) = &args.output {
        write_document(&document, path, OutputFormat::from_path(path))?;
    }
    if let Some(linter) = &args.external {
        let status = run_external_linter(&document, linter)?;
        if !status.success() {
            std::process::exit(status.code().unwrap_or(1));
        }
    }
    Ok(())
}

// Import everything from the lib version of ourselves
use bundlesign::{do_sign, SignRequest};
use clap::Parser;
use miette::Report;

use cli::{Cli, OutputFormat};

mod cli;

fn main() {
    let config = Cli::parse();
    axocli::CliAppBuilder::new("bundlesign")
        .verbose(config.verbose)
        .json_errors(config.output_format == OutputFormat::Json)
        .start(config, run);
}

fn run(app: &axocli::CliApp<Cli>) -> Result<(), Report> {
    let config = &app.config;
    let req = SignRequest {
        file: config.file.clone(),
        target: config.target.map(|t| t.to_lib()),
        bundle: config.bundle.clone(),
        organisation: config.organisation.clone(),
        binname: config.binname.clone(),
        prefs: config.prefs.clone(),
        builddir: config.builddir.clone(),
    };
    do_sign(&req)?;
    Ok(())
}

use clap::Parser;
use std::process::ExitCode;

use concept_cli::cli::CreateClassArgs;
use concept_cli::commands::{self, create_class};
use concept_cli::config::Settings;
use concept_cli::fs::LocalFs;
use concept_cli::logging;
use concept_cli::report::Reporter;
use concept_cli::ScaffoldError;

fn main() -> ExitCode {
    let args = CreateClassArgs::parse();
    logging::init_tracing(args.common.verbose);

    let mut reporter = Reporter::stdio();
    let result = Settings::from_env(&LocalFs, args.common.project_root.clone())
        .map_err(ScaffoldError::io("reading working directory"))
        .and_then(|settings| create_class::run(&LocalFs, &settings, &args.request(), &mut reporter));

    commands::finish(result, &mut reporter)
}

use clap::Parser;
use std::process::ExitCode;

use concept_cli::cli::CreateConceptArgs;
use concept_cli::commands::{self, create_concept};
use concept_cli::config::Settings;
use concept_cli::fs::LocalFs;
use concept_cli::logging;
use concept_cli::report::Reporter;
use concept_cli::ScaffoldError;

fn main() -> ExitCode {
    let args = CreateConceptArgs::parse();
    logging::init_tracing(args.common.verbose);

    let mut reporter = Reporter::stdio();
    let result = Settings::from_env(&LocalFs, args.common.project_root.clone())
        .map_err(ScaffoldError::io("reading working directory"))
        .and_then(|settings| create_concept::run(&LocalFs, &settings, &args.request(), &mut reporter));

    commands::finish(result, &mut reporter)
}

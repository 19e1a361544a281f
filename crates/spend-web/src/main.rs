use std::path::Path;
use std::process::ExitCode;

use spend_core::constants::{CONFIG_FILENAME, VERSION};
use spend_core::tracing_setup::init_tracing;
use spend_core::{SpendConfig, SpendResult};
use spend_model::ModelLoader;
use spend_web::{App, PredictionService, Server};
use tracing::{error, info};

fn main() -> ExitCode {
    let config = match SpendConfig::load_or_default(Path::new(CONFIG_FILENAME)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("spend-forecast: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.observability);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "fatal");
            ExitCode::FAILURE
        }
    }
}

fn run(config: SpendConfig) -> SpendResult<()> {
    info!(version = VERSION, "starting spend-forecast");

    // No model, no service: a load failure ends the process here.
    let loader = ModelLoader::new(config.model.clone());
    let model = loader.load()?;

    let app = App::new(PredictionService::new(model));
    let server = Server::bind(&config.server, app)?;
    server.run()
}

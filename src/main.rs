use anyhow::Context;
use clap::Parser;
use modal_facade::utils::{logger, validation::Validate};
use modal_facade::{
    CliConfig, ConsoleHost, ImplementationUpdate, ModalHandle, ServiceConfig, ServicesManager,
    UiModalService,
};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => ServiceConfig::default(),
    };

    let filter = logger::log_filter(config.log_level(), cli.verbose);
    if cli.json_logs {
        logger::init_json_logger(filter);
    } else {
        logger::init_cli_logger_with(filter);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut services = ServicesManager::new();
    services.register(&UiModalService::REGISTRATION)?;
    let modals: Arc<UiModalService> = services.get("UIModalService")?;
    modals.set_defaults(config.modal_defaults());

    if cli.no_host {
        tracing::info!("No host installed; calls go to the default implementation");
    } else {
        let host = Arc::new(ConsoleHost::stdout());
        modals.set_service_implementation(ImplementationUpdate::from_host(host));
    }

    let options = cli.modal_options()?;
    let outcome = modals.show(options);
    match outcome.as_ref().and_then(|o| o.downcast_ref::<ModalHandle>()) {
        Some(handle) => tracing::info!("Modal #{} shown", handle.0),
        None => tracing::info!("Modal was not shown"),
    }

    modals.hide();
    Ok(())
}

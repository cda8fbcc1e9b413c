//! IntakeBot Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;

use teloxide::dispatching::UpdateHandler;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info};

use intake_bot::{
    config::Settings,
    handlers::handle_message,
    middleware::LoggingMiddleware,
    services::ServiceFactory,
    state::IntakeMachine,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", intake_bot::info());

    let bot = Bot::new(&settings.bot.token);

    info!("Initializing services...");
    let services = ServiceFactory::new(bot.clone(), &settings)?;

    let machine = Arc::new(IntakeMachine::new(
        services.dispatcher.clone(),
        services.exporter.clone(),
        Duration::from_secs(settings.intake.reprompt_delay_seconds),
    ));
    let logging_middleware = Arc::new(LoggingMiddleware::from_config(&settings.logging));

    // Updates from one chat are handled sequentially, which keeps each
    // user's history in arrival order.
    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![machine, logging_middleware])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("IntakeBot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry().branch(Update::filter_message().endpoint(handle_messages))
}

/// Handle regular messages
async fn handle_messages(
    msg: Message,
    machine: Arc<IntakeMachine>,
    logging_middleware: Arc<LoggingMiddleware>,
) -> HandlerResult {
    if let Err(e) = handle_message(msg, machine, logging_middleware).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

use crate::configuration::Settings;
use crate::constant::FORM_PAYLOAD_LIMIT;
use crate::error::BizErrorEnum;
use crate::routes;
use crate::telegram_client::TelegramClient;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
    telegram_client: web::Data<TelegramClient>,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let telegram_client = web::Data::new(config.telegram.client()?);

        // 0.0.0.0 as host to instruct our application to accept connections from any network interface,
        // not just the local one.
        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::BindTcpListenerError)?
            .port();

        let server = run(listener, telegram_client.clone())?;

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self {
            port,
            server,
            telegram_client,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Calls `getMe` once so a wrong bot token shows up in the logs at start-up.
    ///
    /// Never fails: the form endpoint reports relay problems per request.
    #[tracing::instrument(name = "Check Telegram credentials", skip(self))]
    pub async fn check_relay_credentials(&self) {
        match self.telegram_client.get_me().await {
            Ok(bot) => tracing::info!(
                "Telegram bot {} (id {}) will relay forms to chat {}",
                bot.username.as_deref().unwrap_or(&bot.first_name),
                bot.id,
                self.telegram_client.recipient()
            ),
            Err(e) => tracing::warn!(error.cause_chain = ?e, "Telegram credentials check failed"),
        }
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

fn run(
    listener: TcpListener,
    telegram_client: web::Data<TelegramClient>,
) -> Result<Server, BizErrorEnum> {
    let server = HttpServer::new(move || {
        App::new()
            // The landing page may be served from any origin
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            // Re-use the same HTTP client across multiple requests
            .app_data(telegram_client.clone())
            // A larger body fails extraction and is answered as an internal error
            .app_data(web::PayloadConfig::new(FORM_PAYLOAD_LIMIT))
            .route("/", web::get().to(routes::home))
            .service(
                web::scope("/api")
                    .route("/send-form", web::post().to(routes::send_form))
                    .route("/health", web::get().to(routes::health_check)),
            )
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}

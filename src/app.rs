use crate::{collaborators::Collaborators, config::Settings, routes::*};
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{cookie::Key, dev::Server, web::Data, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use anyhow::Context;
use core::net::SocketAddr;
use secrecy::{ExposeSecret, SecretString};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct App {
    server: Server,
    socket_addr: SocketAddr,
}

impl App {
    pub async fn build(config: &Settings) -> anyhow::Result<Self> {
        let collaborators = config
            .collaborators
            .collaborators()
            .map_err(anyhow::Error::msg)?;
        Self::build_with(config, collaborators).await
    }

    /// Build the app around the given collaborators instead of the configured ones.
    pub async fn build_with(
        config: &Settings,
        collaborators: Collaborators,
    ) -> anyhow::Result<Self> {
        let listener =
            TcpListener::bind((config.application.host.clone(), config.application.port))?;
        let socket_addr = listener
            .local_addr()
            .context("Failed to read the bound address.")?;

        let server = Self::get_server_runner(
            listener,
            collaborators,
            config.application.hmac_secret.clone(),
            config.application.secure_cookies,
        )?;

        Ok(Self {
            server,
            socket_addr,
        })
    }

    fn get_server_runner(
        listener: TcpListener,
        collaborators: Collaborators,
        hmac_secret: SecretString,
        secure_cookies: bool,
    ) -> anyhow::Result<Server> {
        let collaborators = Data::new(collaborators);
        let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
            .context("The HMAC secret must be at least 64 bytes long.")?;
        let message_framework = {
            let store = CookieMessageStore::builder(secret_key.clone()).build();
            FlashMessagesFramework::builder(store).build()
        };
        let server = HttpServer::new(move || {
            actix_web::App::new()
                .wrap(message_framework.clone())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                        .cookie_secure(secure_cookies)
                        .build(),
                )
                .wrap(TracingLogger::default())
                .service(health_check)
                .service(home)
                .service(simulate_login)
                .service(clear_session)
                .service(run_tests)
                .service(run_final_test)
                .service(api_simulate_login)
                .service(api_check_admin_access)
                .service(api_clear_session)
                .service(api_run_tests)
                .service(api_run_final_test)
                .app_data(Data::clone(&collaborators))
        })
        .listen(listener)?
        .run();

        Ok(server)
    }

    pub fn addr(&self) -> SocketAddr {
        self.socket_addr
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        self.server.await?;
        Ok(())
    }
}

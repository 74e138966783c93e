use admin_smoke::{app::App, collaborators::Collaborators, config, telemetry};
use reqwest::{redirect, Client, Response};
use std::{env, io, sync::LazyLock};

const RQST_FAIL: &str = "Failed to execute request.";

const LOGGER_NAME: &str = "test";
const LOGGER_FILTER_LEVEL: &str = "info";

static TRACING: LazyLock<()> = LazyLock::new(TestApp::init_logging);

pub struct TestApp {
    pub addr: String,
    /// Keeps the session cookie between requests, like a browser tab.
    pub api_client: Client,
}

impl TestApp {
    /// Runs the app in the background at a random port with the configured collaborators.
    pub async fn spawn() -> TestApp {
        Self::spawn_with(None).await
    }

    /// Runs the app in the background at a random port around the given collaborators.
    pub async fn spawn_with(collaborators: Option<Collaborators>) -> TestApp {
        LazyLock::force(&TRACING);

        // Randomise configuration to ensure test isolation
        let config = {
            let mut raw = config::get().expect("Failed to read configuration");
            raw.application.port = 0;
            raw.application.secure_cookies = false;
            raw
        };

        let app = match collaborators {
            Some(c) => App::build_with(&config, c).await,
            None => App::build(&config).await,
        }
        .expect("Failed to build application.");
        let addr = format!("http://127.0.0.1:{}", app.addr().port());

        // Run the application as a background task
        tokio::spawn(app.run_until_stopped());

        let api_client = Client::builder()
            .redirect(redirect::Policy::none())
            .cookie_store(true)
            .build()
            .unwrap();

        TestApp { addr, api_client }
    }

    fn init_logging() {
        let subscriber: Box<dyn tracing::subscriber::Subscriber + Send + Sync> =
            if env::var("TEST_LOG").is_ok() {
                Box::new(telemetry::get_subscriber(
                    LOGGER_NAME,
                    LOGGER_FILTER_LEVEL,
                    io::stdout,
                ))
            } else {
                Box::new(telemetry::get_subscriber(
                    LOGGER_NAME,
                    LOGGER_FILTER_LEVEL,
                    io::sink,
                ))
            };

        telemetry::init_subscriber(subscriber)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.api_client
            .get(format!("{}{path}", self.addr))
            .send()
            .await
            .expect(RQST_FAIL)
    }

    pub async fn post(&self, path: &str) -> Response {
        self.api_client
            .post(format!("{}{path}", self.addr))
            .send()
            .await
            .expect(RQST_FAIL)
    }

    pub async fn get_home_html(&self) -> String {
        self.get("/").await.text().await.unwrap()
    }

    pub async fn is_admin(&self) -> bool {
        let body: serde_json::Value = self.get("/api/session/admin").await.json().await.unwrap();
        body["isAdmin"].as_bool().unwrap()
    }

    pub async fn post_json(&self, path: &str) -> serde_json::Value {
        let resp = self.post(path).await;
        assert_eq!(resp.status().as_u16(), 200);
        resp.json().await.unwrap()
    }
}

pub fn assert_redirecting(resp: &Response, location: &str) {
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), location);
}

use super::{
    error::HarnessError,
    log::{AssertionLog, LogKind, SuiteResult},
};
use crate::{
    auth::create_fake_admin,
    collaborators::{is_structured, Collaborators, ExportKind},
    domain::{Identity, Role, FAKE_ADMIN_EMAIL},
    storage::{Storage, TEST_TOKEN_KEY, TEST_USER_KEY},
};
use std::future::Future;

/// Diagnostic sweep over the admin login flow.
///
/// All four checks always run; a failing or erroring check does not stop the others.
pub struct BasicTestSuite<'a> {
    storage: &'a dyn Storage,
    collaborators: &'a Collaborators,
    log: AssertionLog,
}

impl<'a> BasicTestSuite<'a> {
    pub fn new(storage: &'a dyn Storage, collaborators: &'a Collaborators) -> Self {
        Self {
            storage,
            collaborators,
            log: AssertionLog::new(),
        }
    }

    #[tracing::instrument(name = "Run basic admin login tests", skip(self))]
    pub async fn run_all_tests(&mut self) -> SuiteResult {
        self.log.reset();
        self.log.log("🚀 Starting admin login tests...", LogKind::Start);

        self.test_authentication().await;
        self.test_local_storage().await;
        self.test_mock_data().await;
        self.test_api_service().await;

        let summary = format!(
            "📊 Test Summary: {} passed, {} failed",
            self.log.passed(),
            self.log.failed()
        );
        self.log.log(summary, LogKind::Summary);

        self.log.summary()
    }

    pub async fn test_authentication(&mut self) -> bool {
        self.log.log("Testing admin authentication...", LogKind::Test);
        let login = create_fake_admin(self.storage);

        let log = &mut self.log;
        let created = log.check(!login.user.id.is_nil(), "Admin user created");
        let role = log.check(login.user.role == Role::Admin, "User has admin role");
        let email = log.check(login.user.email == FAKE_ADMIN_EMAIL, "User email is correct");
        let token = log.check(!login.token.as_ref().is_empty(), "Token generated");

        created && role && email && token
    }

    pub async fn test_local_storage(&mut self) -> bool {
        self.log.log("Testing localStorage...", LogKind::Test);
        let storage = self.storage;

        let outcome = {
            let login = create_fake_admin(storage);
            storage.set_item(TEST_TOKEN_KEY, login.token.as_ref());
            storage.set_item(TEST_USER_KEY, &login.user.to_json());

            let stored_token = storage.get_item(TEST_TOKEN_KEY);
            storage
                .get_item(TEST_USER_KEY)
                .map(|user| Identity::parse_role(&user))
                .transpose()
                .map(|role| (login, stored_token, role))
        };

        storage.remove_item(TEST_TOKEN_KEY);
        storage.remove_item(TEST_USER_KEY);

        match outcome {
            Ok((login, stored_token, role)) => {
                let token = self.log.check(
                    stored_token.as_deref() == Some(login.token.as_ref()),
                    "Token stored correctly",
                );
                let user = self
                    .log
                    .check(role == Some(Role::Admin), "User data stored correctly");
                token && user
            }
            Err(e) => self.record_error("localStorage", HarnessError::from(e)),
        }
    }

    pub async fn test_mock_data(&mut self) -> bool {
        self.log.log("Testing mock data...", LogKind::Test);
        let collaborators = self.collaborators;

        let dataset = match guard(collaborators.mock_data.load()).await {
            Ok(dataset) => dataset,
            Err(e) => return self.record_error("Mock data", e),
        };

        let log = &mut self.log;
        let exports = dataset.exports();
        let mut ok = true;
        for export in &exports {
            ok &= log.check(export.value.is_some(), &format!("{} exists", export.name));
        }
        for export in &exports {
            let (shape_ok, shape) = match export.kind {
                ExportKind::Array => (export.value.is_some_and(|v| v.is_array()), "an array"),
                ExportKind::Object => (export.value.is_some_and(is_structured), "an object"),
            };
            ok &= log.check(shape_ok, &format!("{} is {shape}", export.name));
        }
        ok
    }

    pub async fn test_api_service(&mut self) -> bool {
        self.log.log("Testing API service...", LogKind::Test);
        let collaborators = self.collaborators;
        let admin_api = collaborators.api_client.admin_api();

        let mut ok = self.log.check(admin_api.is_some(), "adminAPI exists");
        let Some(api) = admin_api else {
            for member in [
                "getAllProducts",
                "getAllOrders",
                "getAllUsers",
                "getDashboardStats",
            ] {
                self.log.check(false, &format!("adminAPI.{member} is callable"));
            }
            return false;
        };

        let calls = [
            ("getAllProducts", api.get_all_products().await.map(drop)),
            ("getAllOrders", api.get_all_orders().await.map(drop)),
            ("getAllUsers", api.get_all_users().await.map(drop)),
            ("getDashboardStats", api.get_dashboard_stats().await.map(drop)),
        ];
        for (member, outcome) in calls {
            if let Err(e) = &outcome {
                tracing::warn!(error.cause_chain = ?e, member, "Admin API call failed");
            }
            ok &= self
                .log
                .check(outcome.is_ok(), &format!("adminAPI.{member} is callable"));
        }
        ok
    }

    fn record_error(&mut self, check: &str, e: HarnessError) -> bool {
        self.log.log(format!("{check} test failed: {e}"), LogKind::Error);
        false
    }
}

/// Turn a collaborator failure into a [`HarnessError`].
async fn guard<T>(
    call: impl Future<Output = anyhow::Result<T>>,
) -> Result<T, HarnessError> {
    call.await.map_err(HarnessError::from)
}

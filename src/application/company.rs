//! Singleton company profile: one GET to hydrate, one PUT to replace.

use std::sync::Arc;

use catalog_admin_types::CompanyInfo;
use tracing::{error, info, warn};

use crate::domain::forms::CompanyInfoForm;
use crate::infra::http::ApiClient;

use super::error::AppError;
use super::manager::InFlight;
use super::notify::{Notification, Notifier};

pub const COMPANY_INFO_ENDPOINT: &str = "company-info/";

pub struct CompanyInfoManager {
    api: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    record: Option<CompanyInfo>,
    form: Option<CompanyInfoForm>,
    loading: bool,
    saving: bool,
}

impl CompanyInfoManager {
    pub fn new(api: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            record: None,
            form: None,
            loading: false,
            saving: false,
        }
    }

    /// Hydrates the stored record and the edit form from it.
    pub async fn load(&mut self) -> Result<&CompanyInfo, AppError> {
        self.loading = true;
        let result = self.api.get_json::<CompanyInfo>(COMPANY_INFO_ENDPOINT).await;
        self.loading = false;

        match result {
            Ok(info) => {
                self.form = Some(CompanyInfoForm::from_record(&info));
                Ok(self.record.insert(info))
            }
            Err(err) => {
                error!(error = %err, "failed to load company info");
                self.notifier
                    .notify(Notification::error("Failed to load company information"));
                Err(err.into())
            }
        }
    }

    pub fn record(&self) -> Option<&CompanyInfo> {
        self.record.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Editable form, present once a load has succeeded.
    pub fn form_mut(&mut self) -> Option<&mut CompanyInfoForm> {
        self.form.as_mut()
    }

    /// Replaces the whole stored record with the coerced form contents.
    pub async fn save(&mut self) -> Result<(), AppError> {
        let Some(form) = &self.form else {
            return Err(AppError::NoOpenForm);
        };
        if self.saving {
            return Err(AppError::Busy);
        }

        let record = match form.to_record() {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "company info rejected locally");
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err.into());
            }
        };

        let result = {
            let _in_flight = InFlight::start(&mut self.saving);
            self.api.put_json(COMPANY_INFO_ENDPOINT, &record).await
        };

        match result {
            Ok(()) => {
                info!("company info updated");
                self.notifier.notify(Notification::success(
                    "Company information updated successfully",
                ));
                self.record = Some(record);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to update company info");
                self.notifier
                    .notify(Notification::error("Failed to update company information"));
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::MockServer;
    use reqwest::Url;
    use serde_json::json;

    use super::*;
    use crate::application::notify::NotificationLog;
    use crate::application::session::{MemoryTokenStore, Session};
    use crate::config::ApiSettings;

    fn manager(server: &MockServer, log: &Arc<NotificationLog>) -> CompanyInfoManager {
        let session =
            Session::initialize(Arc::new(MemoryTokenStore::with_token("tok"))).expect("session");
        let settings = ApiSettings {
            base_url: Url::parse(&server.url("/api/")).expect("base url"),
            timeout: Duration::from_secs(5),
        };
        let api = ApiClient::new(&settings, session).expect("client");
        CompanyInfoManager::new(Arc::new(api), log.clone())
    }

    #[tokio::test]
    async fn save_puts_coerced_numbers() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/company-info/");
                then.status(200).json_body(json!({
                    "about_uz": "Zavod",
                    "latitude": "41.0058",
                    "longitude": "71.6436",
                    "employees_count": "120",
                    "established_year": "1995"
                }));
            })
            .await;
        let put = server
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/api/company-info/")
                    .header("authorization", "Bearer tok")
                    .json_body_includes(
                        r#"{"about_uz":"Zavod","employees_count":150,"latitude":41.0058,"established_year":1995}"#,
                    );
                then.status(200);
            })
            .await;

        let log = Arc::new(NotificationLog::default());
        let mut company = manager(&server, &log);
        company.load().await.expect("load");

        let form = company.form_mut().expect("form hydrated");
        assert_eq!(form.employees_count, "120");
        form.employees_count = " 150 ".into();

        company.save().await.expect("saved");
        put.assert_async().await;
        assert!(!company.is_saving());
        assert_eq!(
            company.record().and_then(|r| r.employees_count),
            Some(150)
        );
        assert_eq!(
            log.last().expect("notification").text,
            "Company information updated successfully"
        );
    }

    #[tokio::test]
    async fn out_of_range_latitude_is_rejected_locally() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/company-info/");
                then.status(200).json_body(json!({"about_uz": "Zavod"}));
            })
            .await;
        let put = server
            .mock_async(|when, then| {
                when.method("PUT");
                then.status(200);
            })
            .await;

        let log = Arc::new(NotificationLog::default());
        let mut company = manager(&server, &log);
        company.load().await.expect("load");
        company.form_mut().expect("form").latitude = "91".into();

        let err = company.save().await.expect_err("invalid latitude");
        assert!(err.is_validation());
        assert_eq!(put.calls_async().await, 0);
        assert!(log.last().expect("notification").is_error());
    }

    #[tokio::test]
    async fn cancelled_save_can_be_retried() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/company-info/");
                then.status(200).json_body(json!({"about_uz": "Zavod"}));
            })
            .await;
        let slow = server
            .mock_async(|when, then| {
                when.method("PUT").path("/api/company-info/");
                then.status(200).delay(Duration::from_secs(2));
            })
            .await;

        let log = Arc::new(NotificationLog::default());
        let mut company = manager(&server, &log);
        company.load().await.expect("load");

        let cancelled = tokio::time::timeout(Duration::from_millis(100), company.save()).await;
        assert!(cancelled.is_err());
        assert!(!company.is_saving());

        slow.delete_async().await;
        let fast = server
            .mock_async(|when, then| {
                when.method("PUT").path("/api/company-info/");
                then.status(200);
            })
            .await;

        company.save().await.expect("retried save");
        fast.assert_async().await;
    }

    #[tokio::test]
    async fn save_without_load_has_no_form() {
        let server = MockServer::start_async().await;
        let log = Arc::new(NotificationLog::default());
        let mut company = manager(&server, &log);

        assert!(matches!(company.save().await, Err(AppError::NoOpenForm)));
    }

    #[tokio::test]
    async fn failed_load_notifies() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/company-info/");
                then.status(502);
            })
            .await;

        let log = Arc::new(NotificationLog::default());
        let mut company = manager(&server, &log);
        assert!(company.load().await.is_err());
        assert!(company.record().is_none());
        assert!(company.form_mut().is_none());
        assert_eq!(
            log.last().expect("notification").text,
            "Failed to load company information"
        );
    }
}

//! One method per backend endpoint.

use serde_json::json;
use store::ProductFilters;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::ai::{AiAnswer, AiQuery};
use crate::models::auth::{LoginRequest, LoginResponse, RegisterRequest, User};
use crate::models::dashboard::{ClientSummary, DashboardSummary};
use crate::models::notifications::{
    EvolutionQr, EvolutionStatus, NotificationPage, SchedulerStatus, TriggerResult,
};
use crate::models::phone_numbers::{NewPhoneNumber, PhoneNumber, PhoneNumberUpdate};
use crate::models::products::{FilterOptions, ProductPage, ProductStats, RecalculateResult};
use crate::models::uploads::UploadRecord;
use crate::models::MessageResponse;
use crate::upload::SpreadsheetFile;

fn force_param(force: bool) -> [(&'static str, String); 1] {
    [("force", force.to_string())]
}

impl ApiClient {
    // Auth

    /// Exchange credentials for a token. The caller persists the session.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &body).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<User> {
        self.post("/api/auth/register", request).await
    }

    pub async fn me(&self) -> ApiResult<User> {
        self.get("/api/auth/me").await
    }

    // Products

    pub async fn products(
        &self,
        filters: &ProductFilters,
        page_size: u32,
    ) -> ApiResult<ProductPage> {
        self.get_with("/api/products", &filters.query_params(page_size))
            .await
    }

    pub async fn filter_options(&self) -> ApiResult<FilterOptions> {
        self.get("/api/products/filters").await
    }

    pub async fn product_stats(&self) -> ApiResult<ProductStats> {
        self.get("/api/products/stats").await
    }

    pub async fn recalculate_classes(&self) -> ApiResult<RecalculateResult> {
        self.post("/api/products/recalculate-classes", &json!({}))
            .await
    }

    pub async fn dashboard_summary(&self) -> ApiResult<DashboardSummary> {
        self.get("/api/dashboard/summary").await
    }

    // Uploads

    pub async fn upload_products(&self, file: SpreadsheetFile) -> ApiResult<MessageResponse> {
        tracing::info!("Uploading product spreadsheet {}", file.name());
        self.post_multipart("/api/uploads", file.into_form()?).await
    }

    pub async fn uploads(&self) -> ApiResult<Vec<UploadRecord>> {
        self.get("/api/uploads").await
    }

    /// Remove an upload and every product it imported.
    pub async fn delete_upload(&self, id: i64) -> ApiResult<MessageResponse> {
        self.delete(&format!("/api/uploads/{id}")).await
    }

    pub async fn client_uploads(&self) -> ApiResult<Vec<UploadRecord>> {
        self.get("/api/client-uploads").await
    }

    pub async fn upload_clients(&self, file: SpreadsheetFile) -> ApiResult<MessageResponse> {
        tracing::info!("Uploading client spreadsheet {}", file.name());
        self.post_multipart("/api/client-uploads", file.into_form()?)
            .await
    }

    pub async fn clients_summary(&self) -> ApiResult<ClientSummary> {
        self.get("/api/clients/summary").await
    }

    // Phone numbers

    pub async fn phone_numbers(&self) -> ApiResult<Vec<PhoneNumber>> {
        self.get("/api/phone-numbers").await
    }

    pub async fn create_phone_number(&self, phone: &NewPhoneNumber) -> ApiResult<PhoneNumber> {
        self.post("/api/phone-numbers", phone).await
    }

    pub async fn update_phone_number(
        &self,
        id: i64,
        update: &PhoneNumberUpdate,
    ) -> ApiResult<PhoneNumber> {
        self.patch(&format!("/api/phone-numbers/{id}"), update)
            .await
    }

    pub async fn delete_phone_number(&self, id: i64) -> ApiResult<()> {
        self.delete_discard(&format!("/api/phone-numbers/{id}"))
            .await
    }

    // Notifications

    pub async fn notifications(&self, page: u32) -> ApiResult<NotificationPage> {
        self.get_with("/api/notifications", &[("page", page.max(1).to_string())])
            .await
    }

    pub async fn trigger_notifications(&self, force: bool) -> ApiResult<TriggerResult> {
        self.post_with("/api/notifications/trigger", &force_param(force), &json!({}))
            .await
    }

    pub async fn trigger_client_notifications(&self, force: bool) -> ApiResult<TriggerResult> {
        self.post_with(
            "/api/notifications/trigger-clients",
            &force_param(force),
            &json!({}),
        )
        .await
    }

    pub async fn test_notification(&self, phone: &str) -> ApiResult<()> {
        self.post_discard("/api/notifications/test", &json!({ "phone": phone }))
            .await
    }

    pub async fn scheduler_status(&self) -> ApiResult<SchedulerStatus> {
        self.get("/api/notifications/scheduler-status").await
    }

    pub async fn evolution_status(&self) -> ApiResult<EvolutionStatus> {
        self.get("/api/notifications/evolution/status").await
    }

    pub async fn evolution_qr(&self) -> ApiResult<EvolutionQr> {
        self.get("/api/notifications/evolution/qr").await
    }

    // AI

    pub async fn ai_query(&self, question: &str) -> ApiResult<AiAnswer> {
        let body = AiQuery {
            question: question.to_string(),
        };
        self.post("/api/ai/query", &body).await
    }
}

//! HTTP client for the auth and food services.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use reelbite_domain::id::FoodId;

use crate::error::ClientError;

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub video_url: String,
    pub food_partner_id: String,
    pub like_count: i64,
    pub saves_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodDetail {
    #[serde(flatten)]
    pub food: Food,
    pub partner_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartnerProfile {
    #[serde(flatten)]
    pub partner: Partner,
    pub food_items: Vec<Food>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSession {
    pub message: String,
    pub user: UserAccount,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartnerSession {
    pub message: String,
    pub food_partner: Partner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LikeOutcome {
    pub message: String,
    pub like: bool,
    pub like_count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveOutcome {
    pub message: String,
    pub save: bool,
    pub saves_count: i64,
}

#[derive(Serialize)]
pub struct RegisterUser<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RegisterPartner<'a> {
    pub name: &'a str,
    pub contact_name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub address: &'a str,
}

/// Fields of a new food item. The video is read from disk at upload time.
pub struct NewFood<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: Option<&'a str>,
    pub video: &'a Path,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ToggleRequest {
    food_id: FoodId,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    kind: String,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct FoodList {
    food: Vec<Food>,
}

#[derive(Deserialize)]
struct FoodDetailEnvelope {
    food: FoodDetail,
}

#[derive(Deserialize)]
struct CreatedFood {
    food: Food,
}

#[derive(Deserialize)]
struct SavedFoods {
    saved_foods: Vec<Food>,
}

#[derive(Deserialize)]
struct PartnerEnvelope<T> {
    food_partner: T,
}

// ── ApiClient ────────────────────────────────────────────────────────────────

/// Cookie-holding client. A successful login stores the session cookie, and
/// later requests to either service send it back.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    auth_base: String,
    food_base: String,
}

impl ApiClient {
    pub fn new(auth_base_url: &str, food_base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            auth_base: auth_base_url.trim_end_matches('/').to_owned(),
            food_base: food_base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/api/auth{path}", self.auth_base)
    }

    fn food_url(&self, path: &str) -> String {
        format!("{}/api{path}", self.food_base)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json().await?);
        }
        Err(api_error(status, resp).await)
    }

    async fn send_empty(&self, req: RequestBuilder) -> Result<(), ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(api_error(status, resp).await)
    }

    // ── auth ────────────────────────────────────────────────────────────────

    pub async fn register_user(&self, body: &RegisterUser<'_>) -> Result<UserSession, ClientError> {
        self.send(self.client.post(self.auth_url("/user/register")).json(body))
            .await
    }

    pub async fn login_user(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserSession, ClientError> {
        let body = Credentials { email, password };
        self.send(self.client.post(self.auth_url("/user/login")).json(&body))
            .await
    }

    pub async fn logout_user(&self) -> Result<(), ClientError> {
        self.send_empty(self.client.get(self.auth_url("/user/logout")))
            .await
    }

    pub async fn register_partner(
        &self,
        body: &RegisterPartner<'_>,
    ) -> Result<PartnerSession, ClientError> {
        self.send(
            self.client
                .post(self.auth_url("/food-partner/register"))
                .json(body),
        )
        .await
    }

    pub async fn login_partner(
        &self,
        email: &str,
        password: &str,
    ) -> Result<PartnerSession, ClientError> {
        let body = Credentials { email, password };
        self.send(
            self.client
                .post(self.auth_url("/food-partner/login"))
                .json(&body),
        )
        .await
    }

    pub async fn logout_partner(&self) -> Result<(), ClientError> {
        self.send_empty(self.client.get(self.auth_url("/food-partner/logout")))
            .await
    }

    // ── food ────────────────────────────────────────────────────────────────

    pub async fn list_foods(&self) -> Result<Vec<Food>, ClientError> {
        let list: FoodList = self.send(self.client.get(self.food_url("/food"))).await?;
        Ok(list.food)
    }

    pub async fn get_food(&self, id: FoodId) -> Result<FoodDetail, ClientError> {
        let detail: FoodDetailEnvelope = self
            .send(self.client.get(self.food_url(&format!("/food/{id}"))))
            .await?;
        Ok(detail.food)
    }

    pub async fn create_food(&self, new: NewFood<'_>) -> Result<Food, ClientError> {
        let bytes = tokio::fs::read(new.video).await?;
        let file_name = new
            .video
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_owned());
        let video = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(video_mime(new.video))?;

        let mut form = Form::new()
            .text("name", new.name.to_owned())
            .text("description", new.description.to_owned())
            .part("video", video);
        if let Some(price) = new.price {
            form = form.text("price", price.to_owned());
        }

        let created: CreatedFood = self
            .send(self.client.post(self.food_url("/food")).multipart(form))
            .await?;
        Ok(created.food)
    }

    pub async fn delete_food(&self, id: FoodId) -> Result<(), ClientError> {
        self.send_empty(self.client.delete(self.food_url(&format!("/food/{id}"))))
            .await
    }

    pub async fn like(&self, food_id: FoodId) -> Result<LikeOutcome, ClientError> {
        self.send(
            self.client
                .post(self.food_url("/food/like"))
                .json(&ToggleRequest { food_id }),
        )
        .await
    }

    pub async fn save(&self, food_id: FoodId) -> Result<SaveOutcome, ClientError> {
        self.send(
            self.client
                .post(self.food_url("/food/save"))
                .json(&ToggleRequest { food_id }),
        )
        .await
    }

    pub async fn saved_foods(&self) -> Result<Vec<Food>, ClientError> {
        let saved: SavedFoods = self
            .send(self.client.get(self.food_url("/food/save")))
            .await?;
        Ok(saved.saved_foods)
    }

    pub async fn partner_me(&self) -> Result<Partner, ClientError> {
        let me: PartnerEnvelope<Partner> = self
            .send(self.client.get(self.food_url("/food-partner/me")))
            .await?;
        Ok(me.food_partner)
    }

    pub async fn partner_profile(&self, id: &str) -> Result<PartnerProfile, ClientError> {
        let profile: PartnerEnvelope<PartnerProfile> = self
            .send(
                self.client
                    .get(self.food_url(&format!("/food-partner/{id}"))),
            )
            .await?;
        Ok(profile.food_partner)
    }
}

async fn api_error(status: StatusCode, resp: reqwest::Response) -> ClientError {
    let body = resp.json::<ErrorBody>().await.ok();
    let (kind, message) = body.map(|b| (b.kind, b.message)).unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %kind, "service returned an error");
    ClientError::Api {
        status: status.as_u16(),
        kind,
        message,
    }
}

fn video_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

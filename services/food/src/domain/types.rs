use bytes::Bytes;
use chrono::{DateTime, Utc};

use reelbite_domain::id::{FoodId, PartnerId};
use reelbite_domain::price::Price;

/// A dish published by a food partner as a short video.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub video_url: String,
    pub food_partner_id: PartnerId,
    pub like_count: i64,
    pub saves_count: i64,
    pub created_at: DateTime<Utc>,
}

/// A food item together with the display name of its owner.
///
/// `partner_name` is `None` when the partner row no longer exists.
#[derive(Debug, Clone)]
pub struct FoodWithPartner {
    pub food: Food,
    pub partner_name: Option<String>,
}

/// Partner attributes readable by the food service.
#[derive(Debug, Clone, PartialEq)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A partner and every food item they own.
#[derive(Debug, Clone)]
pub struct PartnerProfile {
    pub partner: Partner,
    pub foods: Vec<Food>,
}

/// Raw video file received from a multipart upload.
#[derive(Debug, Clone)]
pub struct VideoUpload {
    pub original_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl VideoUpload {
    /// Extension of the original file name including the leading dot, or `""`.
    pub fn extension(&self) -> &str {
        self.original_name
            .as_deref()
            .and_then(|name| name.rfind('.').map(|i| &name[i..]))
            .filter(|ext| ext.len() > 1 && !ext.contains('/'))
            .unwrap_or("")
    }
}

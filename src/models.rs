use serde::{Deserialize, Serialize};

/// Request body accepted by create and update.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ClothingPayload {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    #[serde(rename = "imageId", default)]
    pub image_id: Option<String>,
}

impl ClothingPayload {
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub fn into_item(self, id: String) -> ClothingItem {
        ClothingItem {
            id,
            kind: self.kind,
            color: self.color,
            image_id: self.image_id,
        }
    }
}

/// API representation echoed back by create and update.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ClothingItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    #[serde(rename = "imageId")]
    pub image_id: Option<String>,
}

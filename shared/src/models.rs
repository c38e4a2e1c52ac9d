use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of website a theme image is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebsiteType {
    #[serde(rename = "E-commerce")]
    ECommerce,
    #[serde(rename = "Service-Based")]
    ServiceBased,
    Informative,
}

impl WebsiteType {
    pub const ALL: [WebsiteType; 3] = [
        WebsiteType::ECommerce,
        WebsiteType::ServiceBased,
        WebsiteType::Informative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteType::ECommerce => "E-commerce",
            WebsiteType::ServiceBased => "Service-Based",
            WebsiteType::Informative => "Informative",
        }
    }
}

impl fmt::Display for WebsiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebsiteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E-commerce" => Ok(WebsiteType::ECommerce),
            "Service-Based" => Ok(WebsiteType::ServiceBased),
            "Informative" => Ok(WebsiteType::Informative),
            other => Err(format!("unknown website type: {}", other)),
        }
    }
}

/// Visual tone of a theme image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesignTone {
    Professional,
    #[serde(rename = "Playful and Chill")]
    PlayfulAndChill,
    Relax,
}

impl DesignTone {
    pub const ALL: [DesignTone; 3] = [
        DesignTone::Professional,
        DesignTone::PlayfulAndChill,
        DesignTone::Relax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DesignTone::Professional => "Professional",
            DesignTone::PlayfulAndChill => "Playful and Chill",
            DesignTone::Relax => "Relax",
        }
    }
}

impl fmt::Display for DesignTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DesignTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Professional" => Ok(DesignTone::Professional),
            "Playful and Chill" => Ok(DesignTone::PlayfulAndChill),
            "Relax" => Ok(DesignTone::Relax),
            other => Err(format!("unknown design tone: {}", other)),
        }
    }
}

/// Approval state of a theme image. New records always start as Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ImageStatus {
    Approved,
    #[default]
    Pending,
}

impl ImageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStatus::Approved => "Approved",
            ImageStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Approved" => Ok(ImageStatus::Approved),
            "Pending" => Ok(ImageStatus::Pending),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

/// One catalog entry: a theme image with its classification tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeImage {
    pub id: i64,
    pub image_url: String,
    pub website_type: WebsiteType,
    pub design_tone: DesignTone,
    pub status: ImageStatus,
    pub upload_date: DateTime<Utc>,
}

/// Body of the add endpoint. Status and upload date are server-assigned,
/// so any such fields in the request body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewThemeImage {
    pub image_url: String,
    pub website_type: WebsiteType,
    pub design_tone: DesignTone,
}

/// Body of the update endpoint. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeImageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_type: Option<WebsiteType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_tone: Option<DesignTone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ImageStatus>,
}

/// Query parameters of the get-approved endpoint. The browsing client binds
/// raw select values, so empty strings are treated the same as absent keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub website_type: Option<WebsiteType>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub design_tone: Option<DesignTone>,
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_strings_round_trip() {
        let json = serde_json::to_string(&WebsiteType::ECommerce).unwrap();
        assert_eq!(json, "\"E-commerce\"");
        let tone: DesignTone = serde_json::from_str("\"Playful and Chill\"").unwrap();
        assert_eq!(tone, DesignTone::PlayfulAndChill);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let result = serde_json::from_str::<WebsiteType>("\"Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn new_image_ignores_caller_supplied_status() {
        let body = r#"{
            "imageUrl": "a.png",
            "websiteType": "Informative",
            "designTone": "Relax",
            "status": "Approved"
        }"#;
        let input: NewThemeImage = serde_json::from_str(body).unwrap();
        assert_eq!(input.image_url, "a.png");
        assert_eq!(input.website_type, WebsiteType::Informative);
    }

    #[test]
    fn filter_treats_empty_string_as_absent() {
        let filter: ApprovedFilter =
            serde_json::from_str(r#"{"websiteType": "", "designTone": "Relax"}"#).unwrap();
        assert_eq!(filter.website_type, None);
        assert_eq!(filter.design_tone, Some(DesignTone::Relax));
    }

    #[test]
    fn filter_rejects_invalid_value() {
        let result = serde_json::from_str::<ApprovedFilter>(r#"{"websiteType": "Portfolio"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(ImageStatus::default(), ImageStatus::Pending);
    }
}

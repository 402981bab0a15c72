use serde::{Deserialize, Serialize};

use crate::jobs::client::Listing;

fn default_page() -> u32 {
    1
}

/// Manual search by company name.
#[derive(Debug, Deserialize)]
pub struct RapidJobsRequest {
    pub company: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Serialize)]
pub struct RapidJobsResponse {
    pub found: bool,
    pub jobs: Vec<Listing>,
}

/// Auto-match search built from the user's profile fields.
#[derive(Debug, Deserialize)]
pub struct AutoJobsRequest {
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoJobsResponse {
    pub success: bool,
    pub jobs: Vec<Listing>,
    pub next_page: u32,
    pub prev_page: Option<u32>,
}

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Badge tallies as reported by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badges {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

/// One normalized profile as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub user_id: String,
    pub display_name: String,
    pub profile_url: String,
    pub avatar: String,
    pub reputation: String,
    pub badges: Badges,
    pub total_posts: u32,
    pub account_age: String,
    pub age_days: i64,
    pub bio: String,
    pub location: String,
    pub verified: String,
    pub estimation_confidence: String,
    pub accuracy_range: String,
}

/// Either a single resolved profile or an ambiguous candidate set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupReply {
    Multiple {
        users: Vec<ProfileSummary>,
        note: String,
    },
    Single(ProfileSummary),
}

/// Service health report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

pub struct ProfileClient {
    client: Client,
    base_url: String,
}

impl ProfileClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up a profile by display name.
    ///
    /// Ambiguous names come back as `LookupReply::Multiple` with a note
    /// suggesting an id lookup.
    pub async fn lookup_user(
        &self,
        username: &str,
    ) -> Result<LookupReply, Box<dyn std::error::Error>> {
        self.get_json(&format!("/api/stackoverflow/{}", username)).await
    }

    /// Look up a profile by exact numeric id.
    pub async fn lookup_user_id(
        &self,
        user_id: u64,
    ) -> Result<ProfileSummary, Box<dyn std::error::Error>> {
        self.get_json(&format!("/api/stackoverflow/id/{}", user_id)).await
    }

    /// Fetch the service health report.
    pub async fn health(&self) -> Result<HealthStatus, Box<dyn std::error::Error>> {
        self.get_json("/health").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Service returned error status {}: {}", status, text).into());
        }

        match serde_json::from_str::<T>(&text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(e.into()),
        }
    }
}

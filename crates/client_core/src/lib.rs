use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{CentreId, PublicationId, QuestionBankId, ReviewId},
    protocol::{DataEnvelope, QuestionEntry, QuestionList, Reply, ReplyList, Review, ReviewList},
};
use tracing::{debug, warn};
use url::Url;

pub mod endpoints;
pub mod error;

pub use endpoints::Endpoint;
pub use error::ClientError;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Data-fetching collaborator consumed by the view models.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn reviews(&self, publication_id: &PublicationId) -> Result<Vec<Review>, ClientError>;
    async fn replies(&self, review_id: &ReviewId) -> Result<Vec<Reply>, ClientError>;
    async fn questions(
        &self,
        centre_id: &CentreId,
        question_bank_id: &QuestionBankId,
    ) -> Result<Vec<QuestionEntry>, ClientError>;
}

pub struct HttpContentSource {
    http: Client,
    base_url: Url,
}

impl HttpContentSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let invalid = |source| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        };
        let parsed = Url::parse(base_url).map_err(invalid)?;
        if parsed.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Transport {
                path: parsed.to_string(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, ClientError> {
        let shown = endpoint.display();
        debug!(endpoint = %shown, "fetching content");
        let url = endpoint
            .url(&self.base_url)
            .map_err(|source| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })?;
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                path: shown.clone(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            warn!(endpoint = %shown, status = status.as_u16(), "content request rejected");
            return Err(ClientError::Status {
                path: shown,
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(|source| ClientError::Transport {
            path: shown.clone(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode { path: shown, source })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn reviews(&self, publication_id: &PublicationId) -> Result<Vec<Review>, ClientError> {
        let envelope: DataEnvelope<ReviewList> =
            self.get_json(&endpoints::reviews(publication_id)).await?;
        Ok(envelope.data.reviews)
    }

    async fn replies(&self, review_id: &ReviewId) -> Result<Vec<Reply>, ClientError> {
        let envelope: DataEnvelope<ReplyList> =
            self.get_json(&endpoints::replies(review_id)).await?;
        Ok(envelope.data.replies)
    }

    async fn questions(
        &self,
        centre_id: &CentreId,
        question_bank_id: &QuestionBankId,
    ) -> Result<Vec<QuestionEntry>, ClientError> {
        let envelope: DataEnvelope<QuestionList> = self
            .get_json(&endpoints::questions(centre_id, question_bank_id))
            .await?;
        Ok(envelope.data.questions)
    }
}

/// In-memory source used for offline replay and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
    reviews: HashMap<PublicationId, Vec<Review>>,
    replies: HashMap<ReviewId, Vec<Reply>>,
    questions: HashMap<(CentreId, QuestionBankId), Vec<QuestionEntry>>,
}

impl StaticContentSource {
    pub fn with_reviews(mut self, publication_id: PublicationId, reviews: Vec<Review>) -> Self {
        self.reviews.insert(publication_id, reviews);
        self
    }

    pub fn with_replies(mut self, review_id: ReviewId, replies: Vec<Reply>) -> Self {
        self.replies.insert(review_id, replies);
        self
    }

    pub fn with_questions(
        mut self,
        centre_id: CentreId,
        question_bank_id: QuestionBankId,
        questions: Vec<QuestionEntry>,
    ) -> Self {
        self.questions.insert((centre_id, question_bank_id), questions);
        self
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn reviews(&self, publication_id: &PublicationId) -> Result<Vec<Review>, ClientError> {
        self.reviews
            .get(publication_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(endpoints::reviews(publication_id).display()))
    }

    async fn replies(&self, review_id: &ReviewId) -> Result<Vec<Reply>, ClientError> {
        Ok(self.replies.get(review_id).cloned().unwrap_or_default())
    }

    async fn questions(
        &self,
        centre_id: &CentreId,
        question_bank_id: &QuestionBankId,
    ) -> Result<Vec<QuestionEntry>, ClientError> {
        self.questions
            .get(&(centre_id.clone(), question_bank_id.clone()))
            .cloned()
            .ok_or_else(|| {
                ClientError::NotFound(endpoints::questions(centre_id, question_bank_id).display())
            })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

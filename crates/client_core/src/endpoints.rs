//! REST routes consumed from the content API.

use shared::domain::{CentreId, PublicationId, QuestionBankId, ReviewId};
use url::{ParseError, Url};

const DATE_ASCENDING: [(&str, &str); 2] = [("orderBy", "date"), ("order", "asc")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, &'static str)>,
}

impl Endpoint {
    fn new(segments: Vec<String>) -> Self {
        Self {
            segments,
            query: Vec::new(),
        }
    }

    fn date_ascending(segments: Vec<String>) -> Self {
        Self {
            segments,
            query: DATE_ASCENDING.to_vec(),
        }
    }

    /// Appends the route to `base`. Each segment is percent-encoded, so an
    /// identity containing `/`, `?` or `#` stays inside its own segment.
    pub fn url(&self, base: &Url) -> Result<Url, ParseError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }

    /// Path plus query string, as it appears in logs and errors.
    pub fn display(&self) -> String {
        let path = format!("/{}", self.segments.join("/"));
        if self.query.is_empty() {
            return path;
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}

pub fn reviews(publication_id: &PublicationId) -> Endpoint {
    Endpoint::date_ascending(vec!["reviews".into(), publication_id.to_string()])
}

pub fn replies(review_id: &ReviewId) -> Endpoint {
    Endpoint::date_ascending(vec![
        "reviews".into(),
        review_id.to_string(),
        "replies".into(),
    ])
}

pub fn questions(centre_id: &CentreId, question_bank_id: &QuestionBankId) -> Endpoint {
    Endpoint::new(vec![
        "centre".into(),
        centre_id.to_string(),
        "question-bank".into(),
        question_bank_id.to_string(),
        "questions".into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reviews_are_requested_oldest_first() {
        let endpoint = reviews(&PublicationId::new("pub-9"));
        assert_eq!(endpoint.display(), "/reviews/pub-9?orderBy=date&order=asc");
    }

    #[test]
    fn question_route_nests_bank_under_centre() {
        let endpoint = questions(&CentreId::new("c1"), &QuestionBankId::new("qb2"));
        assert_eq!(endpoint.display(), "/centre/c1/question-bank/qb2/questions");
    }

    #[test]
    fn identities_are_encoded_as_single_segments() {
        let base = Url::parse("http://content.test/api/").expect("base");
        let url = reviews(&PublicationId::new("a?b#c/d"))
            .url(&base)
            .expect("url");

        assert_eq!(url.path(), "/api/reviews/a%3Fb%23c%2Fd");
        assert_eq!(url.query(), Some("orderBy=date&order=asc"));
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn unit_routes_have_no_query() {
        let base = Url::parse("http://content.test/api").expect("base");
        let url = questions(&CentreId::new("c 1"), &QuestionBankId::new("qb"))
            .url(&base)
            .expect("url");

        assert_eq!(url.as_str(), "http://content.test/api/centre/c%201/question-bank/qb/questions");
    }
}

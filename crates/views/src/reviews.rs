//! Publication review list with one expandable reply thread at a time.

use std::collections::HashMap;

use client_core::ContentSource;
use disclosure::{DisclosureList, DisclosureState};
use shared::{
    domain::{PublicationId, ReviewId, ViewerAccess},
    protocol::{Reply, Review},
};
use tracing::{debug, warn};

use crate::{events::ViewEvent, LoadState};

pub struct ReviewThreadView {
    publication_id: PublicationId,
    access: ViewerAccess,
    reviews: LoadState<DisclosureList<Review>>,
    replies: HashMap<ReviewId, LoadState<Vec<Reply>>>,
}

/// One review as the renderer sees it in a single pass.
#[derive(Debug)]
pub struct ReviewRow<'a> {
    pub review: &'a Review,
    pub open: bool,
    pub replies: Option<&'a LoadState<Vec<Reply>>>,
}

impl ReviewRow<'_> {
    /// The reply list is mounted only for an open thread that has replies.
    pub fn shows_replies(&self) -> bool {
        self.open && self.review.reply_count > 0
    }
}

impl ReviewThreadView {
    pub fn new(publication_id: PublicationId, access: ViewerAccess) -> Self {
        Self {
            publication_id,
            access,
            reviews: LoadState::Loading,
            replies: HashMap::new(),
        }
    }

    pub fn publication_id(&self) -> &PublicationId {
        &self.publication_id
    }

    pub fn state(&self) -> &LoadState<DisclosureList<Review>> {
        &self.reviews
    }

    pub fn can_post_review(&self) -> bool {
        self.access.is_publication_subscriber
    }

    /// Installs a fetched review list. A second call is a refetch: the open
    /// thread is closed and cached replies are dropped.
    pub fn set_reviews(&mut self, reviews: Vec<Review>) {
        self.replies.clear();
        match self.reviews.ready_mut() {
            Some(list) => list.replace(reviews),
            None => self.reviews = LoadState::Ready(DisclosureList::new(reviews)),
        }
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        debug!(publication = %self.publication_id, "loading reviews");
        match source.reviews(&self.publication_id).await {
            Ok(reviews) => self.set_reviews(reviews),
            Err(err) => {
                warn!(publication = %self.publication_id, error = %err, "failed to load reviews");
                self.replies.clear();
                self.reviews = LoadState::Failed(err.into());
            }
        }
    }

    /// Flips the reply thread of `review_id`.
    pub fn toggle_replies(&mut self, review_id: ReviewId) -> DisclosureState<ReviewId> {
        self.apply(ViewEvent::Toggle(review_id))
    }

    pub fn apply(&mut self, event: ViewEvent<ReviewId>) -> DisclosureState<ReviewId> {
        let Some(list) = self.reviews.ready_mut() else {
            return DisclosureState::Closed;
        };
        let state = event.apply_to_list(list);
        let open = state.open_identity();
        self.replies.retain(|id, _| Some(id) == open);
        state
    }

    pub fn is_open(&self, review_id: &ReviewId) -> bool {
        self.reviews
            .ready()
            .is_some_and(|list| list.is_open(review_id))
    }

    /// Fetches replies for the open thread, if it has any and they are not
    /// cached yet.
    pub async fn load_open_replies(&mut self, source: &dyn ContentSource) {
        let Some(review) = self.reviews.ready().and_then(|list| list.open_item()) else {
            return;
        };
        if review.reply_count == 0 || self.replies.contains_key(&review.id) {
            return;
        }
        let review_id = review.id.clone();

        debug!(review = %review_id, "loading replies");
        let loaded = match source.replies(&review_id).await {
            Ok(replies) => LoadState::Ready(replies),
            Err(err) => {
                warn!(review = %review_id, error = %err, "failed to load replies");
                LoadState::Failed(err.into())
            }
        };
        self.replies.insert(review_id, loaded);
    }

    pub fn rows(&self) -> Vec<ReviewRow<'_>> {
        let Some(list) = self.reviews.ready() else {
            return Vec::new();
        };
        list.iter_with_state()
            .map(|(review, open)| ReviewRow {
                review,
                open,
                replies: if open && review.reply_count > 0 {
                    self.replies.get(&review.id)
                } else {
                    None
                },
            })
            .collect()
    }
}

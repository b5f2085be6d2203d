use shared::{
    domain::PublicationId,
    protocol::{Author, Publication},
};

pub const DEFAULT_AVATAR: &str = "/images/avatar.png";
const NO_DOWNLOAD: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBadge {
    pub name: String,
    pub avatar_url: String,
}

/// Header section of a publication page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationHero {
    pub id: PublicationId,
    pub name: String,
    pub readers_label: String,
    pub authors: Vec<AuthorBadge>,
    pub description: String,
    pub download_url: String,
}

impl From<&Author> for AuthorBadge {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
            avatar_url: author
                .image_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
        }
    }
}

impl From<&Publication> for PublicationHero {
    fn from(publication: &Publication) -> Self {
        Self {
            id: publication.id.clone(),
            name: publication.name.clone(),
            readers_label: format!("{} Readers", publication.subscriber_count),
            authors: publication.authors.iter().map(AuthorBadge::from).collect(),
            description: publication.description.clone(),
            download_url: publication
                .file_url
                .clone()
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| NO_DOWNLOAD.to_string()),
        }
    }
}

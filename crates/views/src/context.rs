//! Server pre-fetched page data, passed explicitly to the views that need it.

use serde::Deserialize;
use shared::{
    domain::CentreId,
    protocol::{CourseFolder, Lesson, Publication, QuestionBank, QuestionEntry},
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentreSummary {
    pub id: CentreId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default)]
    pub question_bank: Option<QuestionBank>,
    #[serde(default)]
    pub questions: Option<Vec<QuestionEntry>>,
    #[serde(default)]
    pub publication: Option<Publication>,
    #[serde(default)]
    pub folders: Vec<CourseFolder>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub centre: CentreSummary,
    #[serde(default)]
    pub page_data: PageData,
}

impl PageContext {
    pub fn new(centre_id: CentreId) -> Self {
        Self {
            centre: CentreSummary {
                id: centre_id,
                name: String::new(),
            },
            page_data: PageData::default(),
        }
    }

    pub fn with_page_data(mut self, page_data: PageData) -> Self {
        self.page_data = page_data;
        self
    }

    pub fn centre_id(&self) -> &CentreId {
        &self.centre.id
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(PublicationId);
id_newtype!(ReviewId);
id_newtype!(ReplyId);
id_newtype!(CentreId);
id_newtype!(QuestionBankId);
id_newtype!(QuestionId);
id_newtype!(FolderId);
id_newtype!(CourseId);
id_newtype!(LessonId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Objective,
    Multichoice,
    Boolean,
    Range,
    #[serde(other)]
    Other,
}

impl QuestionKind {
    pub fn has_options(self) -> bool {
        matches!(self, Self::Objective | Self::Multichoice)
    }
}

/// What the signed-in viewer may do on a publication page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerAccess {
    pub is_centre_manager: bool,
    pub is_publication_subscriber: bool,
    pub is_centre_subscriber: bool,
}

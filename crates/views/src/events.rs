//! User gestures addressed to a collection, applied in delivery order.

use std::{fmt, str::FromStr};

use disclosure::{Disclosable, DisclosureController, DisclosureList, DisclosureState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent<I> {
    Toggle(I),
    Open(I),
    Close,
    /// The backing collection is about to be replaced.
    Refetch,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventParseError {
    #[error("empty event")]
    Empty,
    #[error("unknown event '{0}' (expected toggle:<id>, open:<id>, close or refetch)")]
    UnknownVerb(String),
    #[error("event '{0}' needs an identity, e.g. {0}:<id>")]
    MissingIdentity(String),
    #[error("invalid identity '{raw}': {reason}")]
    InvalidIdentity { raw: String, reason: String },
}

impl<I> ViewEvent<I> {
    pub fn map<J>(self, f: impl FnOnce(I) -> J) -> ViewEvent<J> {
        match self {
            Self::Toggle(id) => ViewEvent::Toggle(f(id)),
            Self::Open(id) => ViewEvent::Open(f(id)),
            Self::Close => ViewEvent::Close,
            Self::Refetch => ViewEvent::Refetch,
        }
    }
}

impl<I: Clone + PartialEq + fmt::Debug> ViewEvent<I> {
    /// Applies the gesture to `controller`; a refetch closes it.
    pub fn apply_to(self, controller: &mut DisclosureController<I>) -> DisclosureState<I> {
        match self {
            Self::Toggle(id) => controller.toggle(id),
            Self::Open(id) => controller.open(id),
            Self::Close | Self::Refetch => controller.close(),
        }
    }

    pub fn apply_to_list<T>(self, list: &mut DisclosureList<T>) -> DisclosureState<I>
    where
        T: Disclosable<Id = I>,
    {
        match self {
            Self::Toggle(id) => list.toggle(id),
            Self::Open(id) => list.open(id),
            Self::Close | Self::Refetch => list.close(),
        }
    }
}

impl<I> FromStr for ViewEvent<I>
where
    I: FromStr,
    I::Err: fmt::Display,
{
    type Err = EventParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(EventParseError::Empty);
        }

        let (verb, identity) = match raw.split_once(':') {
            Some((verb, identity)) => (verb, Some(identity)),
            None => (raw, None),
        };
        let verb = verb.to_ascii_lowercase();

        let parse_identity = |identity: Option<&str>| -> Result<I, EventParseError> {
            let identity = identity.ok_or_else(|| EventParseError::MissingIdentity(verb.clone()))?;
            identity
                .parse::<I>()
                .map_err(|err| EventParseError::InvalidIdentity {
                    raw: identity.to_string(),
                    reason: err.to_string(),
                })
        };

        match verb.as_str() {
            "toggle" => Ok(Self::Toggle(parse_identity(identity)?)),
            "open" => Ok(Self::Open(parse_identity(identity)?)),
            "close" => Ok(Self::Close),
            "refetch" => Ok(Self::Refetch),
            other => Err(EventParseError::UnknownVerb(other.to_string())),
        }
    }
}

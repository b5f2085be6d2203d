use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{ContentSource, HttpContentSource, StaticContentSource};
use disclosure::DisclosureList;
use serde::Deserialize;
use shared::{
    domain::{CentreId, FolderId, PublicationId, QuestionBankId, ReviewId, ViewerAccess},
    protocol::{Reply, Review},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use views::{
    LessonLayout, PageContext, PublicationHero, QuestionBankView, ReviewThreadView, ViewEvent,
};

mod config;
mod render;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(about = "Render content platform views and replay interaction events")]
struct Cli {
    #[arg(long, default_value = "viewer.toml")]
    config: PathBuf,
    /// Overrides the configured API base url.
    #[arg(long)]
    api_base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a publication's reviews and replay reply-thread events.
    Reviews {
        #[arg(long)]
        publication: String,
        /// toggle:<review id>, open:<review id>, close or refetch; repeatable.
        #[arg(long = "event")]
        events: Vec<String>,
        #[arg(long)]
        subscriber: bool,
    },
    /// Replay review events against a JSON fixture instead of the API.
    Replay {
        #[arg(long)]
        fixture: PathBuf,
        #[arg(long = "event")]
        events: Vec<String>,
    },
    /// Show a question bank as an accordion.
    Questions {
        #[arg(long)]
        bank: String,
        #[arg(long)]
        centre: Option<String>,
        /// Pre-fetched page context (JSON); skips the initial fetch.
        #[arg(long)]
        context: Option<PathBuf>,
        /// open:<n>, toggle:<n>, close or refetch, with 0-based panel numbers.
        #[arg(long = "event")]
        events: Vec<String>,
    },
    /// Lesson player drawers.
    Lesson {
        #[arg(long)]
        compact: bool,
        #[arg(long, default_value_t = 0)]
        toggles: usize,
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Course folders with their action menus.
    Folders {
        #[arg(long)]
        context: PathBuf,
        /// toggle:<folder id>, open:<folder id> or close.
        #[arg(long = "event")]
        events: Vec<String>,
    },
    /// Publication header section.
    Hero {
        #[arg(long)]
        context: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewFixture {
    publication_id: PublicationId,
    #[serde(default)]
    access: ViewerAccess,
    reviews: Vec<Review>,
    #[serde(default)]
    replies: HashMap<ReviewId, Vec<Reply>>,
}

fn parse_events<I>(raw: &[String]) -> Result<Vec<ViewEvent<I>>>
where
    I: std::str::FromStr,
    I::Err: std::fmt::Display,
{
    raw.iter()
        .map(|event| {
            event
                .parse::<ViewEvent<I>>()
                .with_context(|| format!("bad --event '{event}'"))
        })
        .collect()
}

fn read_context(path: &Path) -> Result<PageContext> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read page context '{}'", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid page context '{}'", path.display()))
}

fn http_source(settings: &Settings) -> Result<HttpContentSource> {
    HttpContentSource::new(&settings.api_base_url, settings.request_timeout())
        .context("failed to build API client")
}

async fn replay_reviews(
    view: &mut ReviewThreadView,
    source: &dyn ContentSource,
    events: Vec<ViewEvent<ReviewId>>,
) {
    view.load(source).await;
    for event in events {
        debug!(?event, "applying review event");
        let refetch = event == ViewEvent::Refetch;
        view.apply(event);
        if refetch {
            view.load(source).await;
        }
        view.load_open_replies(source).await;
    }
}

/// Seeds from the page context when given; fetches whenever the context
/// carries no question list.
async fn question_view(
    bank_id: QuestionBankId,
    centre: Option<String>,
    context: Option<PageContext>,
    source: &dyn ContentSource,
) -> Result<QuestionBankView> {
    let mut view = match (context, centre) {
        (Some(ctx), _) => QuestionBankView::from_context(&ctx, bank_id),
        (None, Some(centre)) => QuestionBankView::new(CentreId::new(centre), bank_id),
        (None, None) => bail!("questions needs --centre or --context"),
    };
    if view.state().is_loading() {
        view.load(source).await;
    }
    Ok(view)
}

async fn replay_questions(
    view: &mut QuestionBankView,
    source: &dyn ContentSource,
    events: Vec<ViewEvent<usize>>,
) {
    for event in events {
        debug!(?event, "applying question event");
        if event == ViewEvent::Refetch {
            view.load(source).await;
        } else {
            view.apply(event);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config)?;
    if let Some(url) = cli.api_base_url {
        settings.api_base_url = url;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!(api = %settings.api_base_url, "viewer starting");

    match cli.command {
        Command::Reviews {
            publication,
            events,
            subscriber,
        } => {
            let events: Vec<ViewEvent<ReviewId>> = parse_events::<String>(&events)?
                .into_iter()
                .map(|e| e.map(ReviewId))
                .collect();
            let source = http_source(&settings)?;
            let access = ViewerAccess {
                is_publication_subscriber: subscriber,
                ..ViewerAccess::default()
            };
            let mut view = ReviewThreadView::new(PublicationId::new(publication), access);
            replay_reviews(&mut view, &source, events).await;
            println!("{}", render::reviews(&view));
        }
        Command::Replay { fixture, events } => {
            let raw = fs::read_to_string(&fixture)
                .with_context(|| format!("failed to read fixture '{}'", fixture.display()))?;
            let fixture: ReviewFixture = serde_json::from_str(&raw)
                .with_context(|| format!("invalid fixture '{}'", fixture.display()))?;
            let events: Vec<ViewEvent<ReviewId>> = parse_events::<String>(&events)?
                .into_iter()
                .map(|e| e.map(ReviewId))
                .collect();

            let mut source = StaticContentSource::default()
                .with_reviews(fixture.publication_id.clone(), fixture.reviews);
            for (review_id, replies) in fixture.replies {
                source = source.with_replies(review_id, replies);
            }
            let mut view = ReviewThreadView::new(fixture.publication_id, fixture.access);
            replay_reviews(&mut view, &source, events).await;
            println!("{}", render::reviews(&view));
        }
        Command::Questions {
            bank,
            centre,
            context,
            events,
        } => {
            let events = parse_events::<usize>(&events)?;
            let context = context.as_deref().map(read_context).transpose()?;
            let source = http_source(&settings)?;
            let mut view =
                question_view(QuestionBankId::new(bank), centre, context, &source).await?;
            replay_questions(&mut view, &source, events).await;
            println!("{}", render::questions(&view));
        }
        Command::Lesson {
            compact,
            toggles,
            context,
        } => {
            let compact = compact || settings.compact_layout;
            let lessons = match context {
                Some(path) => read_context(&path)?.page_data.lessons,
                None => Vec::new(),
            };
            let mut layout = LessonLayout::new(lessons);
            for _ in 0..toggles {
                layout.toggle(compact);
            }
            println!("{}", render::lesson(&layout, compact));
        }
        Command::Folders { context, events } => {
            let folders = read_context(&context)?.page_data.folders;
            let mut list = DisclosureList::new(folders);
            for event in parse_events::<String>(&events)? {
                event.map(FolderId).apply_to_list(&mut list);
            }
            for line in list.render(&render::FolderLines) {
                println!("{line}");
            }
        }
        Command::Hero { context } => {
            let ctx = read_context(&context)?;
            let Some(publication) = ctx.page_data.publication.as_ref() else {
                bail!("page context '{}' has no publication", context.display());
            };
            println!("{}", render::hero(&PublicationHero::from(publication)));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;

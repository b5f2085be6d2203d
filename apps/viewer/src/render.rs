//! Plain-text rendering of the view models for the terminal.

use std::fmt::Write as _;

use disclosure::CollectionRenderer;
use shared::protocol::CourseFolder;
use views::{
    markup::plain_text,
    questions::{OptionView, PanelView},
    AnswerView, Chevron, FolderMenu, LessonLayout, LoadState, MenuAction, PublicationHero,
    QuestionBankView, ReviewThreadView,
};

const LOADING: &str = "... loading";
const FAILED: &str = "! Something went wrong";

fn marker(open: bool) -> &'static str {
    if open {
        "[-]"
    } else {
        "[+]"
    }
}

pub fn reviews(view: &ReviewThreadView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reviews for publication {}", view.publication_id());
    if view.can_post_review() {
        let _ = writeln!(out, "(write a review)");
    }

    match view.state() {
        LoadState::Loading => out.push_str(LOADING),
        LoadState::Failed(err) => {
            let _ = write!(out, "{FAILED} ({:?})", err.code);
        }
        LoadState::Ready(_) => {
            for row in view.rows() {
                let review = row.review;
                let _ = write!(
                    out,
                    "{} {} {}: {}",
                    marker(row.open),
                    review.id,
                    review.user.name,
                    review.comment
                );
                if review.reply_count > 0 {
                    let _ = write!(out, " ({} replies)", review.reply_count);
                }
                out.push('\n');
                if !row.shows_replies() {
                    continue;
                }
                match row.replies {
                    Some(LoadState::Ready(replies)) => {
                        for reply in replies {
                            let _ = writeln!(out, "      > {}: {}", reply.user.name, reply.comment);
                        }
                    }
                    Some(LoadState::Failed(_)) => {
                        let _ = writeln!(out, "      {FAILED}");
                    }
                    Some(LoadState::Loading) | None => {
                        let _ = writeln!(out, "      {LOADING}");
                    }
                }
            }
        }
    }
    out.trim_end().to_string()
}

fn option_line(option: &OptionView) -> String {
    let mark = if option.correct { "(*)" } else { "( )" };
    let mut line = format!("{mark} {}", plain_text(&option.html));
    if let Some(image) = &option.image {
        let _ = write!(line, " [image {image}]");
    }
    line
}

fn panel(out: &mut String, panel: &PanelView) {
    let _ = writeln!(
        out,
        "{} {}. {}",
        marker(panel.expanded),
        panel.number,
        plain_text(&panel.question_html)
    );
    if !panel.expanded {
        return;
    }
    if let Some(image) = &panel.image {
        let _ = writeln!(out, "      [image {image}]");
    }
    match &panel.answer {
        AnswerView::Options(options) => {
            for option in options {
                let _ = writeln!(out, "      {}", option_line(option));
            }
        }
        AnswerView::Boolean {
            true_selected,
            false_selected,
        } => {
            let _ = writeln!(out, "      {} True", if *true_selected { "(*)" } else { "( )" });
            let _ = writeln!(out, "      {} False", if *false_selected { "(*)" } else { "( )" });
        }
        AnswerView::Range { min, max } => {
            let show = |v: &Option<f64>| v.map(|v| v.to_string()).unwrap_or_default();
            let _ = writeln!(out, "      Expected answer: min {} max {}", show(min), show(max));
        }
        AnswerView::None => {}
    }
    if let Some(solution) = &panel.solution {
        let _ = writeln!(out, "      Solution:");
        if let Some(html) = &solution.html {
            let _ = writeln!(out, "      {}", plain_text(html));
        }
        if let Some(url) = &solution.image_url {
            let _ = writeln!(out, "      [image {url}]");
        }
    }
}

pub fn questions(view: &QuestionBankView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.breadcrumbs().render_text());
    if let Some(bank) = view.bank() {
        let _ = writeln!(out, "{}", bank.name.to_uppercase());
    }
    if let Some(description) = view.description_html() {
        let text = plain_text(&description);
        if !text.is_empty() {
            let _ = writeln!(out, "{text}");
        }
    }

    match view.state() {
        LoadState::Loading => out.push_str(LOADING),
        LoadState::Failed(err) => {
            let _ = write!(out, "{FAILED} ({:?})", err.code);
        }
        LoadState::Ready(_) if view.is_empty() => out.push_str("No questions yet"),
        LoadState::Ready(_) => {
            for p in view.panels() {
                panel(&mut out, &p);
            }
        }
    }
    out.trim_end().to_string()
}

pub fn lesson(layout: &LessonLayout, compact: bool) -> String {
    let mut out = String::new();
    let chevron = match layout.chevron(compact) {
        Chevron::Left => "<",
        Chevron::Right => ">",
    };
    let drawer = if compact { "mobile" } else { "desktop" };
    let _ = writeln!(out, "lesson list [{drawer}] toggler {chevron}");
    for lesson in layout.visible_lessons(compact) {
        let _ = writeln!(out, "  - {}", lesson.title);
    }
    let _ = write!(
        out,
        "player {}",
        if layout.main_container_open() {
            "(narrow)"
        } else {
            "(full width)"
        }
    );
    out
}

/// Folder list where at most one folder's action menu is open.
pub struct FolderLines;

impl CollectionRenderer<CourseFolder> for FolderLines {
    type Output = String;

    fn render_item(&self, folder: &CourseFolder, open: bool) -> String {
        let mut line = format!(
            "{} {} ({} courses)",
            marker(open),
            folder.name,
            folder.courses.len()
        );
        let mut menu = FolderMenu::new(folder);
        if open {
            menu.open();
        }
        for entry in menu.visible_entries() {
            let target = match entry.action {
                MenuAction::Link(href) => href,
                MenuAction::DeleteFolder { folder_id, centre_id } => {
                    format!("delete folder {folder_id} in centre {centre_id}")
                }
            };
            let _ = write!(line, "\n      {} -> {}", entry.label, target);
        }
        line
    }
}

pub fn hero(hero: &PublicationHero) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Publication ID {}", hero.id);
    let _ = writeln!(out, "{}", hero.name);
    let _ = writeln!(out, "{}", hero.readers_label);
    let authors = hero
        .authors
        .iter()
        .map(|a| format!("{} <{}>", a.name, a.avatar_url))
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(out, "Author(s): {authors}");
    if !hero.description.is_empty() {
        let _ = writeln!(out, "{}", hero.description);
    }
    let _ = write!(out, "Download: {}", hero.download_url);
    out
}

//! Admin question bank page: one accordion panel per question.

use client_core::ContentSource;
use disclosure::{Disclosable, DisclosureController, DisclosureList, DisclosureState};
use shared::{
    domain::{CentreId, QuestionBankId, QuestionKind},
    protocol::{Question, QuestionBank, QuestionEntry},
};
use tracing::{debug, warn};

use crate::{breadcrumbs::Breadcrumbs, context::PageContext, events::ViewEvent, markup, LoadState};

/// A question keyed by its position in the bank.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPanel {
    pub index: usize,
    pub entry: QuestionEntry,
}

impl Disclosable for QuestionPanel {
    type Id = usize;

    fn disclosure_id(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub html: String,
    pub image: Option<String>,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnswerView {
    Options(Vec<OptionView>),
    Boolean {
        true_selected: bool,
        false_selected: bool,
    },
    Range {
        min: Option<f64>,
        max: Option<f64>,
    },
    None,
}

impl AnswerView {
    pub fn derive(question: &Question) -> Self {
        match question.kind {
            kind if kind.has_options() => Self::Options(
                question
                    .options
                    .iter()
                    .map(|option| OptionView {
                        html: markup::sanitize_html(&option.value),
                        image: option.image.clone(),
                        correct: option.is_correct,
                    })
                    .collect(),
            ),
            QuestionKind::Boolean => Self::Boolean {
                true_selected: question.answer == Some(true),
                false_selected: question.answer == Some(false),
            },
            QuestionKind::Range => Self::Range {
                min: question.min,
                max: question.max,
            },
            _ => Self::None,
        }
    }

    pub fn correct_options(&self) -> Vec<usize> {
        match self {
            Self::Options(options) => options
                .iter()
                .enumerate()
                .filter(|(_, option)| option.correct)
                .map(|(index, _)| index)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionView {
    pub html: Option<String>,
    pub image_url: Option<String>,
}

/// Everything a renderer needs for one accordion panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub number: usize,
    pub question_html: String,
    pub image: Option<String>,
    pub expanded: bool,
    pub answer: AnswerView,
    pub solution: Option<SolutionView>,
}

pub struct QuestionBankView {
    centre_id: CentreId,
    question_bank_id: QuestionBankId,
    bank: Option<QuestionBank>,
    questions: LoadState<DisclosureList<QuestionPanel>>,
}

fn panels(entries: Vec<QuestionEntry>) -> Vec<QuestionPanel> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| QuestionPanel { index, entry })
        .collect()
}

fn initial_controller(len: usize) -> DisclosureController<usize> {
    if len > 0 {
        DisclosureController::with_open(0)
    } else {
        DisclosureController::new()
    }
}

impl QuestionBankView {
    pub fn new(centre_id: CentreId, question_bank_id: QuestionBankId) -> Self {
        Self {
            centre_id,
            question_bank_id,
            bank: None,
            questions: LoadState::Loading,
        }
    }

    /// Seeds the view from server pre-fetched page data when present.
    pub fn from_context(ctx: &PageContext, question_bank_id: QuestionBankId) -> Self {
        let mut view = Self::new(ctx.centre_id().clone(), question_bank_id);
        view.bank = ctx.page_data.question_bank.clone();
        if let Some(entries) = ctx.page_data.questions.clone() {
            view.set_questions(entries);
        }
        view
    }

    pub fn bank(&self) -> Option<&QuestionBank> {
        self.bank.as_ref()
    }

    pub fn state(&self) -> &LoadState<DisclosureList<QuestionPanel>> {
        &self.questions
    }

    pub fn breadcrumbs(&self) -> Breadcrumbs {
        Breadcrumbs::question_bank(&self.question_bank_id)
    }

    pub fn description_html(&self) -> Option<String> {
        self.bank
            .as_ref()
            .map(|bank| markup::sanitize_html(&bank.description))
    }

    /// Installs a question list; the accordion resets to its first panel.
    pub fn set_questions(&mut self, entries: Vec<QuestionEntry>) {
        let panels = panels(entries);
        let controller = initial_controller(panels.len());
        self.questions = LoadState::Ready(DisclosureList::with_controller(panels, controller));
    }

    pub async fn load(&mut self, source: &dyn ContentSource) {
        debug!(
            centre = %self.centre_id,
            bank = %self.question_bank_id,
            "loading questions"
        );
        match source
            .questions(&self.centre_id, &self.question_bank_id)
            .await
        {
            Ok(entries) => self.set_questions(entries),
            Err(err) => {
                warn!(bank = %self.question_bank_id, error = %err, "failed to load questions");
                self.questions = LoadState::Failed(err.into());
            }
        }
    }

    /// Panel header click: expands `index` without collapsing it again.
    pub fn click(&mut self, index: usize) -> DisclosureState<usize> {
        self.apply(ViewEvent::Open(index))
    }

    pub fn apply(&mut self, event: ViewEvent<usize>) -> DisclosureState<usize> {
        let Some(list) = self.questions.ready_mut() else {
            return DisclosureState::Closed;
        };
        event.apply_to_list(list)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.questions
            .ready()
            .is_some_and(|list| list.is_open(&index))
    }

    pub fn is_empty(&self) -> bool {
        self.questions.ready().is_some_and(DisclosureList::is_empty)
    }

    pub fn panels(&self) -> Vec<PanelView> {
        let Some(list) = self.questions.ready() else {
            return Vec::new();
        };
        list.iter_with_state()
            .map(|(panel, expanded)| {
                let question = &panel.entry.question;
                let solution = panel
                    .entry
                    .solution
                    .as_ref()
                    .filter(|solution| solution.is_present())
                    .map(|solution| SolutionView {
                        html: solution
                            .text
                            .as_deref()
                            .filter(|text| !text.trim().is_empty())
                            .map(markup::sanitize_html),
                        image_url: solution.image_url.clone(),
                    });
                PanelView {
                    number: panel.index + 1,
                    question_html: markup::sanitize_html(&question.question),
                    image: question.image.clone(),
                    expanded,
                    answer: AnswerView::derive(question),
                    solution,
                }
            })
            .collect()
    }
}

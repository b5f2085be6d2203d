use shared::domain::QuestionBankId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub name: String,
    pub link: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            link: link.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumbs {
    pub links: Vec<Crumb>,
    pub current: Crumb,
}

impl Breadcrumbs {
    pub fn new(links: Vec<Crumb>, current: Crumb) -> Self {
        Self { links, current }
    }

    /// Trail shown above a question bank's question list.
    pub fn question_bank(question_bank_id: &QuestionBankId) -> Self {
        Self::new(
            vec![
                Crumb::new("Dashboard", "/admin"),
                Crumb::new("Exams", "/admin/exam"),
                Crumb::new("Question bank", "/admin/question-bank"),
            ],
            Crumb::new(
                "Questions",
                format!("/admin/question-bank/{question_bank_id}/questions"),
            ),
        )
    }

    pub fn trail(&self) -> impl Iterator<Item = &Crumb> {
        self.links.iter().chain(std::iter::once(&self.current))
    }

    pub fn render_text(&self) -> String {
        self.trail()
            .map(|crumb| crumb.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

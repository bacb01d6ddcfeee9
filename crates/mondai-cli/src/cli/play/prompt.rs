use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

/// Answer prompt. The left side shows the current position in the quiz.
#[derive(Clone, Default)]
pub struct AnswerPrompt {
    pub position: String,
}

pub static DEFAULT_PROMPT_INDICATOR: &str = "〉";
pub static DEFAULT_VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub static DEFAULT_MULTILINE_INDICATOR: &str = "::: ";

impl AnswerPrompt {
    #[must_use]
    pub fn new(position: String) -> Self {
        Self { position }
    }
}

impl Prompt for AnswerPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.position)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Vi(PromptViMode::Insert) => DEFAULT_VI_INSERT_PROMPT_INDICATOR.into(),
            PromptEditMode::Custom(mode) => format!("({mode})").into(),
            _ => DEFAULT_PROMPT_INDICATOR.into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(DEFAULT_MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}reverse-search) \"{}\": ", history_search.term))
    }
}

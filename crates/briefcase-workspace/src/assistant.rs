// ABOUTME: Document assistant pane state: greeting, draft input and sent messages
// ABOUTME: No model backend is wired up; submitted messages are only recorded

pub const GREETING: &str = "how can i help you today?";
pub const PLACEHOLDER: &str = "type your message...";

#[derive(Debug, Clone, Default)]
pub struct AssistantPanel {
    draft: String,
    transcript: Vec<String>,
}

impl AssistantPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Move the trimmed draft into the transcript. Blank drafts are ignored.
    pub fn submit_draft(&mut self) -> Option<&str> {
        let message = self.draft.trim().to_string();
        self.draft.clear();
        if message.is_empty() {
            return None;
        }
        self.transcript.push(message);
        self.transcript.last().map(String::as_str)
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

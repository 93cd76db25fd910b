use super::sanitize::render_safe_html;

pub const GREETING: &str = "Hello! I'm your AI resume assistant. I can help you create a professional resume. What would you like to start with?";
pub const NEW_CONVERSATION_NOTICE: &str =
    "🆕 New conversation started! Previous conversation has been saved.";

/// Who a transcript message is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Ai,
    System,
}

impl MessageRole {
    pub fn class(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Ai => "ai",
            MessageRole::System => "system",
        }
    }
}

/// A displayed message. `html` is produced once, at append time.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptEntry {
    pub id: usize,
    pub role: MessageRole,
    pub text: String,
    pub html: String,
    pub is_error: bool,
}

/// Append-only message list for the current session, plus the counter the
/// chat heuristics read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
    next_id: usize,
    message_count: usize,
}

impl Transcript {
    /// Transcript shown on page load: the assistant greeting only.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::default();
        transcript.reset([(MessageRole::Ai, GREETING)]);
        transcript
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Messages appended since the last reset. Seeded entries don't count.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    pub fn push(&mut self, role: MessageRole, text: &str) -> usize {
        self.append(role, text, false)
    }

    /// Append an error-styled system message.
    pub fn push_error(&mut self, text: &str) -> usize {
        self.append(MessageRole::System, text, true)
    }

    /// Replace everything with `seed` and zero the counter.
    pub fn reset<'a>(&mut self, seed: impl IntoIterator<Item = (MessageRole, &'a str)>) {
        self.entries.clear();
        for (role, text) in seed {
            self.append(role, text, false);
        }
        self.message_count = 0;
    }

    fn append(&mut self, role: MessageRole, text: &str, is_error: bool) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TranscriptEntry {
            id,
            role,
            text: text.to_string(),
            html: render_safe_html(text),
            is_error,
        });
        self.message_count += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_transcript() {
        let transcript = Transcript::with_greeting();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.entries()[0].role, MessageRole::Ai);
        assert_eq!(transcript.message_count(), 0);
    }

    #[test]
    fn test_push_counts_and_orders() {
        let mut transcript = Transcript::default();
        transcript.push(MessageRole::User, "Hi");
        transcript.push(MessageRole::Ai, "Hello");
        transcript.push(MessageRole::System, "✅ Saved");

        let roles: Vec<_> = transcript.entries().iter().map(|e| e.role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Ai, MessageRole::System]);
        assert_eq!(transcript.message_count(), 3);
    }

    #[test]
    fn test_ids_stay_unique_across_resets() {
        let mut transcript = Transcript::default();
        let first = transcript.push(MessageRole::User, "one");
        transcript.reset([(MessageRole::System, "fresh")]);
        let second = transcript.push(MessageRole::User, "two");
        assert_ne!(first, second);
        assert!(transcript.entries().iter().all(|e| e.id != first));
    }

    #[test]
    fn test_reset_zeroes_counter() {
        let mut transcript = Transcript::default();
        transcript.push(MessageRole::User, "Hi");
        transcript.push(MessageRole::Ai, "Hello");
        transcript.reset([
            (MessageRole::System, NEW_CONVERSATION_NOTICE),
            (MessageRole::Ai, GREETING),
        ]);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.message_count(), 0);
    }

    #[test]
    fn test_push_error_is_flagged_system() {
        let mut transcript = Transcript::default();
        transcript.push_error("❌ Error: Rate limit");
        let entry = &transcript.entries()[0];
        assert_eq!(entry.role, MessageRole::System);
        assert!(entry.is_error);
    }

    #[test]
    fn test_html_is_sanitized_at_append() {
        let mut transcript = Transcript::default();
        transcript.push(MessageRole::Ai, "<b onclick=\"x()\">hi</b>");
        let entry = &transcript.entries()[0];
        assert!(!entry.html.contains("<b "));
        assert_eq!(entry.text, "<b onclick=\"x()\">hi</b>");
    }
}

//! Chat session state
//!
//! Client-side state for one run of the chat: an append-only transcript, the
//! selected category and a request generation counter. Every transition
//! consumes the session and returns the next one.

use crate::classifier::CategoryClassifier;
use crate::models::{Category, ChatMessage};

pub const WELCOME: &str = "Welcome to your MSME Service Assistant! 🏢\n\n**Available Categories:**\n• **Auto** - Smart routing for all queries\n• **Registration & Setup** - Udyam registration, business setup\n• **Loans & Finance** - MUDRA, Stand-Up India, funding options\n• **Compliance & Tax** - GST, labor laws, regulations\n• **Schemes & Subsidies** - Government incentives, benefits\n• **Maharashtra Dataset** - State-specific business information\n\n**I can help you with:**\n• Udyam Registration & MSME classification\n• Government schemes & subsidies\n• Loan programs & financing options\n• GST compliance & tax benefits\n• Export/Import procedures\n• State-specific business guidance\n• And much more!\n\n**💡 Tip:** Select a category for specialized assistance!\n\nWhat would you like to know about your MSME journey?";

/// Ticket for an outbound request. Only the ticket of the latest send may
/// append a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub generation: u64,
    pub message: String,
    /// Category to send on the wire: the classifier's pick in auto mode.
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    selected: Category,
    auto_detected: Option<Category>,
    generation: u64,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(WELCOME)],
            selected: Category::Auto,
            auto_detected: None,
            generation: 0,
            pending: false,
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    /// Category picked by the classifier for the last message, when it found one.
    pub fn auto_detected(&self) -> Option<Category> {
        self.auto_detected
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn select_category(self, category: Category) -> Self {
        Self {
            selected: category,
            auto_detected: None,
            ..self
        }
    }

    /// Append the user's message and issue a ticket. Blank input is ignored.
    pub fn send(mut self, text: &str) -> (Self, Option<PendingRequest>) {
        if text.trim().is_empty() {
            return (self, None);
        }

        let category = CategoryClassifier::resolve(self.selected, text);
        self.auto_detected = if self.selected.is_auto() && !category.is_auto() {
            Some(category)
        } else {
            None
        };
        self.generation += 1;
        self.pending = true;
        self.transcript.push(ChatMessage::user(text));

        let ticket = PendingRequest {
            generation: self.generation,
            message: text.to_string(),
            category,
        };
        (self, Some(ticket))
    }

    /// Append the reply for `ticket`, unless a newer send superseded it.
    pub fn receive(mut self, ticket: &PendingRequest, text: impl Into<String>) -> Self {
        if ticket.generation != self.generation {
            return self;
        }
        self.pending = false;
        self.transcript.push(ChatMessage::assistant(text));
        self
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_welcome() {
        let session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.transcript()[0].is_user);
        assert_eq!(session.selected(), Category::Auto);
    }

    #[test]
    fn test_send_and_receive() {
        let (session, ticket) = ChatSession::new().send("udyam registration steps");
        let ticket = ticket.unwrap();
        assert_eq!(ticket.category, Category::Registration);
        assert_eq!(session.auto_detected(), Some(Category::Registration));
        assert!(session.is_pending());

        let session = session.receive(&ticket, "Visit udyamregistration.gov.in");
        assert!(!session.is_pending());
        let texts: Vec<_> = session.transcript().iter().map(|m| m.is_user).collect();
        assert_eq!(texts, vec![false, true, false]);
    }

    #[test]
    fn test_stale_reply_is_discarded() {
        let (session, first) = ChatSession::new().send("first question");
        let (session, second) = session.send("second question");
        let (first, second) = (first.unwrap(), second.unwrap());

        let session = session.receive(&first, "late answer");
        assert_eq!(session.transcript().len(), 3);
        assert!(session.is_pending());

        let session = session.receive(&second, "fresh answer");
        assert_eq!(session.transcript().last().unwrap().text, "fresh answer");
    }

    #[test]
    fn test_blank_send_is_ignored() {
        let (session, ticket) = ChatSession::new().send("   ");
        assert!(ticket.is_none());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_explicit_category_is_sent_as_is() {
        let session = ChatSession::new().select_category(Category::Compliance);
        let (session, ticket) = session.send("mudra loan");
        assert_eq!(ticket.unwrap().category, Category::Compliance);
        assert_eq!(session.auto_detected(), None);
    }
}

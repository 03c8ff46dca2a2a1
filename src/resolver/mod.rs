pub mod finders;
pub mod intents;
pub mod timetable;

use strum::IntoEnumIterator;
use tracing::debug;

use crate::kb::models::KnowledgeBase;
use crate::text::normalize::normalize_text;
use crate::text::splitter::split_questions;

pub use intents::{FALLBACK_ANSWER, Intent};

/// Separator between the answers of a compound question.
pub const ANSWER_SEPARATOR: &str = "<br>";

/// Stateless query resolver over an immutable knowledge base. Safe to share
/// across threads; each `resolve` call is an independent pure computation.
pub struct Resolver {
    kb: KnowledgeBase,
}

impl Resolver {
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn kb(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Answer one user message. Compound questions are split on punctuation
    /// and "and" boundaries, resolved independently, and joined in order.
    /// The returned string may embed HTML (tables, anchors).
    pub fn resolve(&self, query: &str) -> String {
        let questions = split_questions(query);
        if questions.is_empty() {
            return self.answer_one("");
        }
        let answers: Vec<String> = questions.iter().map(|q| self.answer_one(q)).collect();
        answers.join(ANSWER_SEPARATOR)
    }

    fn answer_one(&self, question: &str) -> String {
        let q = normalize_text(question);
        debug!("Resolving question: {}", q);
        for intent in Intent::iter() {
            if let Some(answer) = intent.try_answer(&q, &self.kb) {
                debug!("Matched intent: {}", intent);
                return answer;
            }
        }
        debug!("No intent matched, returning fallback");
        FALLBACK_ANSWER.to_string()
    }
}

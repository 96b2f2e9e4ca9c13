//! Motivational phrases from a text-generation service.
//!
//! The provider never fails: with no habits it answers with a fixed
//! onboarding message, and any service failure is logged and replaced by a
//! fallback phrase.

mod board;
mod gemini;

pub use board::{QuoteBoard, QuoteTicket};
pub use gemini::GeminiClient;

use std::cell::RefCell;

use crate::error::MotivationError;
use crate::storage::MotivationConfig;

/// Shown when there are no habits yet. No request is made.
pub const ONBOARDING_QUOTE: &str =
    "Comece hoje a construir a melhor versão de si mesmo. Adicione seu primeiro hábito!";

/// The service answered without any text.
pub const EMPTY_RESPONSE_QUOTE: &str = "Continue florescendo, um dia de cada vez!";

/// The request failed.
pub const FAILURE_QUOTE: &str = "Cada pequeno passo é uma vitória. Continue firme!";

/// A one-shot prompt-to-text collaborator.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// Returns the generated text, or `None` when the service produced none.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, MotivationError>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &G {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, MotivationError> {
        (**self).generate(prompt).await
    }
}

/// Turns habit names into a motivational phrase.
pub struct MotivationProvider<G> {
    generator: G,
    language: String,
    max_words: u32,
}

impl<G: TextGenerator> MotivationProvider<G> {
    pub fn new(generator: G, config: &MotivationConfig) -> Self {
        Self {
            generator,
            language: config.language.clone(),
            max_words: config.max_words,
        }
    }

    /// One phrase for the given habit names. At most one request, no retry.
    pub async fn motivational_quote<N: AsRef<str>>(&self, names: &[N]) -> String {
        if names.is_empty() {
            return ONBOARDING_QUOTE.to_string();
        }
        let joined = names
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");

        let prompt = build_prompt(&joined, self.max_words, &self.language);
        match self.generator.generate(&prompt).await {
            Ok(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => EMPTY_RESPONSE_QUOTE.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "motivational quote request failed");
                FAILURE_QUOTE.to_string()
            }
        }
    }

    /// Fetches a phrase under a ticket from `board`.
    ///
    /// Returns whether the phrase was shown; a request that finishes after a
    /// newer one has been shown is dropped.
    pub async fn refresh<N: AsRef<str>>(&self, board: &RefCell<QuoteBoard>, names: &[N]) -> bool {
        let ticket = board.borrow_mut().begin();
        let quote = self.motivational_quote(names).await;
        board.borrow_mut().complete(ticket, quote)
    }
}

fn build_prompt(habit_names: &str, max_words: u32, language: &str) -> String {
    format!(
        "The user has the following habits: {habit_names}.\n\
         Write a short, gentle and motivational phrase (at most {max_words} words) \
         in {language} to inspire them to keep going.\n\
         The tone should be soft, welcoming and positive.\n\
         Do not use markdown formatting, plain text only."
    )
}

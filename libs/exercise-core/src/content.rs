//! Compiled-in default content set ("LLMs 101").

use crate::catalog::Catalog;
use crate::types::{BlankItem, FlashcardItem, QuizItem};

/// The built-in "Day 1 — LLMs 101" content: five quiz questions, five
/// flashcards, and three fill-in-the-blank sentences.
pub fn llm_basics() -> Catalog {
    Catalog::new(quiz_questions(), flashcards(), fill_blanks())
        .expect("built-in content should be valid")
}

fn quiz_questions() -> Vec<QuizItem> {
    vec![
        QuizItem {
            id: 1,
            prompt: "What does LLM stand for, and what is its core job?".into(),
            options: vec![
                "Large Language Model; to translate text to multiple languages".into(),
                "Large Language Model; to predict the next token in a sequence".into(),
                "Large Linear Model; to store training data".into(),
                "Long Linguistic Memory; to recall past conversations".into(),
            ],
            correct_index: 1,
            explanation: "An LLM is trained to predict the next token. Chaining predictions \
                          yields coherent text/code."
                .into(),
        },
        QuizItem {
            id: 2,
            prompt: "In LLMs, what are tokens?".into(),
            options: vec![
                "Cryptographic keys used for security".into(),
                "Small chunks of text (e.g., 'dog', 'un', 'able') that the model processes"
                    .into(),
                "Training parameters in the neural network".into(),
                "Special commands that trigger API calls".into(),
            ],
            correct_index: 1,
            explanation: "Models operate on tokens—subword units or words—rather than raw \
                          strings."
                .into(),
        },
        QuizItem {
            id: 3,
            prompt: "What is the attention mechanism in transformers?".into(),
            options: vec![
                "A way for the model to focus on the most relevant parts of the input sequence"
                    .into(),
                "A memory system that stores all past interactions permanently".into(),
                "A GPU optimization to speed up training".into(),
                "A process to remove hallucinations".into(),
            ],
            correct_index: 0,
            explanation: "Attention scores relationships among tokens, letting the model focus \
                          contextually."
                .into(),
        },
        QuizItem {
            id: 4,
            prompt: "Which of the following is a weakness of LLMs?".into(),
            options: vec![
                "They are always up-to-date with new information".into(),
                "They never hallucinate".into(),
                "They have limited memory due to context windows".into(),
                "They cannot generate text".into(),
            ],
            correct_index: 2,
            explanation: "Context windows bound how much text a model can consider at once."
                .into(),
        },
        QuizItem {
            id: 5,
            prompt: "Why do techniques like RAG or MCP exist if LLMs are powerful on their own?"
                .into(),
            options: vec![
                "To make them slower and more secure".into(),
                "To extend them with external knowledge and tools, addressing cutoff & \
                 hallucinations"
                    .into(),
                "To reduce their number of tokens".into(),
                "To stop them from predicting the next token".into(),
            ],
            correct_index: 1,
            explanation: "RAG provides fresh knowledge; MCP provides safe tool access—both \
                          augment core LLMs."
                .into(),
        },
    ]
}

fn flashcards() -> Vec<FlashcardItem> {
    vec![
        FlashcardItem {
            front: "LLM (what it does)".into(),
            back: "Predicts the next token; transformer + attention enable contextual \
                   generation."
                .into(),
        },
        FlashcardItem {
            front: "Token".into(),
            back: "A chunk of text (word/subword). Models operate over sequences of tokens."
                .into(),
        },
        FlashcardItem {
            front: "Attention".into(),
            back: "Scores relevance between tokens so the model focuses on important context."
                .into(),
        },
        FlashcardItem {
            front: "Context Window".into(),
            back: "The max number of tokens the model can consider at once.".into(),
        },
        FlashcardItem {
            front: "RAG vs MCP".into(),
            back: "RAG = knowledge grounding. MCP = tool/action standardization. Complementary."
                .into(),
        },
    ]
}

fn fill_blanks() -> Vec<BlankItem> {
    vec![
        BlankItem {
            id: "fb1".into(),
            template: "An LLM is trained to predict the next ____ in a sequence.".into(),
            expected_answer: "token".into(),
        },
        BlankItem {
            id: "fb2".into(),
            template: "Transformers rely on the ________ mechanism to focus on relevant context."
                .into(),
            expected_answer: "attention".into(),
        },
        BlankItem {
            id: "fb3".into(),
            template: "The ________ window limits how much text the model can consider at once."
                .into(),
            expected_answer: "context".into(),
        },
    ]
}

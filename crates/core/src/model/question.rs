use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Category;

/// Number of questions in the canonical diagnostic.
pub const QUESTION_COUNT: usize = 4;

/// Unique identifier for a question in the canonical bank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(u32);

impl QuestionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

/// One selectable answer: display text plus the category it votes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: &'static str,
    pub category: Category,
}

/// A single diagnostic question with its three answer options.
///
/// The canonical bank carries exactly one option per category per question;
/// the scoring contract assumes this but the type does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub options: [AnswerOption; 3],
}

/// The fixed, ordered question set for the Manager's Bottleneck Diagnostic.
#[must_use]
pub const fn question_bank() -> [Question; QUESTION_COUNT] {
    [
        Question {
            id: QuestionId::new(1),
            prompt: "Where do tasks most often slow down or pile up in your department?",
            options: [
                AnswerOption {
                    text: "At handoffs between different teams or departments",
                    category: Category::Process,
                },
                AnswerOption {
                    text: "Waiting for approval or specific individuals to sign off",
                    category: Category::Role,
                },
                AnswerOption {
                    text: "We don't realize there's a delay until a deadline is missed",
                    category: Category::Visibility,
                },
            ],
        },
        Question {
            id: QuestionId::new(2),
            prompt: "How clear are roles and responsibilities across your team?",
            options: [
                AnswerOption {
                    text: "Defined, but the workflow itself is clunky and slow",
                    category: Category::Process,
                },
                AnswerOption {
                    text: "Unclear; there is frequent overlap or confusion about who owns what",
                    category: Category::Role,
                },
                AnswerOption {
                    text: "We know who does what, but we can't see the output quality until it's \
                           too late",
                    category: Category::Visibility,
                },
            ],
        },
        Question {
            id: QuestionId::new(3),
            prompt: "Which of these issues shows up most frequently?",
            options: [
                AnswerOption {
                    text: "Repetitive manual work and redundancy",
                    category: Category::Process,
                },
                AnswerOption {
                    text: "Conflicts over decision-making authority",
                    category: Category::Role,
                },
                AnswerOption {
                    text: "Surprise fire-drills and last-minute panic",
                    category: Category::Visibility,
                },
            ],
        },
        Question {
            id: QuestionId::new(4),
            prompt: "When performance drops, how confident are you that you know why?",
            options: [
                AnswerOption {
                    text: "I suspect the process is broken, but can't pinpoint where",
                    category: Category::Process,
                },
                AnswerOption {
                    text: "It usually points to a specific person's capacity or skill gap",
                    category: Category::Role,
                },
                AnswerOption {
                    text: "I usually have a gut feeling but lack hard data to prove it",
                    category: Category::Visibility,
                },
            ],
        },
    ]
}

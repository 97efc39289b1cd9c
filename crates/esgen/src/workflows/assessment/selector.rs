use super::bank::QuestionBank;
use super::catalog::{QuestionCatalog, BANK_FLOW_VERSION};
use super::domain::{BankQuestion, CategoryCounts, EsgCategory, Question, QuestionId};
use rand::seq::SliceRandom;
use rand::{rng, Rng};

/// Draw a random, non-repeating subset of the bank.
///
/// Each category is shuffled independently and truncated to its requested
/// count (or to the whole category when the bank is smaller). Segments are
/// concatenated environmental, social, governance and renumbered from 1.
pub fn select_questions<R>(
    bank: &QuestionBank,
    counts: CategoryCounts,
    rng: &mut R,
) -> Vec<Question>
where
    R: Rng + ?Sized,
{
    let drawn = draw_from_bank(bank, counts, rng);
    adapt_all(drawn)
}

/// Same as [`select_questions`] but returns the untouched bank entries.
pub fn draw_from_bank<R>(
    bank: &QuestionBank,
    counts: CategoryCounts,
    rng: &mut R,
) -> Vec<&'static BankQuestion>
where
    R: Rng + ?Sized,
{
    let mut selected = Vec::with_capacity(counts.total().min(bank.len()));
    for category in EsgCategory::ordered() {
        let mut pool: Vec<&'static BankQuestion> = bank.questions(category).iter().collect();
        pool.shuffle(rng);
        pool.truncate(counts.get(category));
        selected.extend(pool);
    }
    selected
}

/// Standard 6/6/3 random assessment using the thread-local generator.
pub fn generate_random_assessment() -> QuestionCatalog {
    generate_custom_assessment(CategoryCounts::standard())
}

pub fn generate_custom_assessment(counts: CategoryCounts) -> QuestionCatalog {
    let questions = select_questions(&QuestionBank::standard(), counts, &mut rng());
    QuestionCatalog::from_questions(BANK_FLOW_VERSION, questions)
}

/// The whole bank in catalog order, adapted to the flow shape.
pub fn all_bank_questions() -> QuestionCatalog {
    let questions = adapt_all(QuestionBank::standard().all().collect());
    QuestionCatalog::from_questions(BANK_FLOW_VERSION, questions)
}

pub fn questions_by_category(category: EsgCategory) -> Vec<&'static BankQuestion> {
    QuestionBank::standard().questions(category).iter().collect()
}

pub fn questions_by_section(section: &str) -> Vec<&'static BankQuestion> {
    QuestionBank::standard().by_section(section)
}

fn adapt_all(questions: Vec<&'static BankQuestion>) -> Vec<Question> {
    questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| question.adapt(QuestionId(index as u16 + 1)))
        .collect()
}

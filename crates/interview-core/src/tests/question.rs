use crate::{InterviewError, Question, QuestionBank, QuestionCategory};

/// WHAT: Unknown module ids resolve to the default question list
/// WHY: Every practice module must be startable
#[test]
fn given_builtin_bank_when_looking_up_any_module_then_default_questions() {
    // Given: The built-in bank
    let bank = QuestionBank::builtin();

    // When: Looking up a known and an unknown module id
    let first = bank.questions_for("1");
    let unknown = bank.questions_for("does-not-exist");

    // Then: Both return the four default questions
    assert_eq!(first.len(), 4);
    assert_eq!(first, unknown);
    assert!(first.iter().all(|q| q.hints.len() == 3));
}

/// WHAT: Dedicated module questions take precedence over the default
/// WHY: Modules can carry their own question sets
#[test]
#[allow(clippy::unwrap_used)]
fn given_module_entry_when_looking_up_then_dedicated_questions() {
    // Given: A bank with a dedicated list for module "3"
    let dedicated = vec![Question::new(
        10,
        "Size the market for electric scooters.",
        QuestionCategory::Technical,
        300,
    )];
    let bank = QuestionBank::builtin()
        .with_module("3", dedicated.clone())
        .unwrap();

    // When: Looking up module "3" and module "1"
    // Then: "3" gets its own list, "1" the default
    assert_eq!(bank.questions_for("3"), dedicated.as_slice());
    assert_eq!(bank.questions_for("1").len(), 4);
}

/// WHAT: Empty lists are rejected when building a bank
/// WHY: A session cannot be created from an empty list
#[test]
fn given_empty_lists_when_building_bank_then_empty_question_set_error() {
    // Given/When: Building with empty lists
    let empty_default = QuestionBank::new(Vec::new());
    let empty_module = QuestionBank::builtin().with_module("2", Vec::new());

    // Then: Both rejected
    assert!(matches!(
        empty_default,
        Err(InterviewError::EmptyQuestionSet { .. })
    ));
    assert!(matches!(
        empty_module,
        Err(InterviewError::EmptyQuestionSet { .. })
    ));
}

/// WHAT: A bank parsed from TOML is usable and validated
/// WHY: Question banks can be supplied through a config file
#[test]
#[allow(clippy::unwrap_used)]
fn given_toml_bank_when_parsing_then_questions_and_categories_resolved() {
    // Given: A TOML bank with a default and a module entry
    let contents = r#"
        [[default]]
        id = 1
        prompt = "Tell me about yourself."
        category = "self-introduction"
        time_limit_secs = 90

        [[modules.4]]
        id = 2
        prompt = "Walk me through your architecture."
        category = "technical"
        time_limit_secs = 300
        hints = ["Start with the data flow"]
    "#;

    // When: Parsing and validating
    let bank: QuestionBank = toml::from_str(contents).unwrap();
    bank.validate().unwrap();

    // Then: Lookups resolve as expected
    let default = bank.questions_for("1");
    assert_eq!(default.len(), 1);
    assert!(default[0].hints.is_empty());
    assert_eq!(default[0].category, QuestionCategory::SelfIntroduction);

    let module = bank.questions_for("4");
    assert_eq!(module[0].time_limit_secs, 300);
    assert_eq!(module[0].hints, ["Start with the data flow".to_string()]);
}

/// WHAT: A parsed bank with an empty default fails validation
/// WHY: Deserialisation bypasses the checked constructors
#[test]
#[allow(clippy::unwrap_used)]
fn given_toml_bank_without_questions_when_validating_then_error() {
    // Given: A bank with an empty default list
    let bank: QuestionBank = toml::from_str("default = []").unwrap();

    // When: Validating
    let result = bank.validate();

    // Then: EmptyQuestionSet
    assert!(matches!(
        result,
        Err(InterviewError::EmptyQuestionSet { .. })
    ));
}

/// WHAT: Category labels are distinct
/// WHY: Labels are rendered as badges
#[test]
fn given_categories_when_labelling_then_each_label_unique() {
    let labels = [
        QuestionCategory::SelfIntroduction,
        QuestionCategory::Teamwork,
        QuestionCategory::Technical,
        QuestionCategory::LearningAbility,
    ]
    .map(|c| c.to_string());

    for (i, a) in labels.iter().enumerate() {
        for b in labels.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

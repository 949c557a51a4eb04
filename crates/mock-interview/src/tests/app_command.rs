use crate::AppCommand;

/// WHAT: Slash commands map to their commands
/// WHY: The terminal is the only input surface
#[test]
fn given_slash_commands_when_parsing_then_matching_commands() {
    assert!(matches!(AppCommand::parse("/start", 0), Some(AppCommand::Start)));
    assert!(matches!(
        AppCommand::parse("/video", 0),
        Some(AppCommand::ToggleVideo)
    ));
    assert!(matches!(
        AppCommand::parse("/audio", 0),
        Some(AppCommand::ToggleAudio)
    ));
    assert!(matches!(
        AppCommand::parse("/record", 0),
        Some(AppCommand::ToggleRecording)
    ));
    assert!(matches!(
        AppCommand::parse(" /clear ", 0),
        Some(AppCommand::ClearDraft { question_index: 0 })
    ));
    assert!(matches!(
        AppCommand::parse("/retry", 0),
        Some(AppCommand::Restart)
    ));
    assert!(matches!(
        AppCommand::parse("/quit", 0),
        Some(AppCommand::Shutdown)
    ));
}

/// WHAT: /next is tagged with the question on screen
/// WHY: A next for an already-advanced question must be recognisable as stale
#[test]
fn given_next_when_parsing_then_tagged_with_current_index() {
    let command = AppCommand::parse("/next", 2);

    assert!(matches!(
        command,
        Some(AppCommand::Advance { question_index: 2 })
    ));
}

/// WHAT: Free text becomes draft text for the shown question, blank lines are dropped
/// WHY: Anything that is not a command is part of the answer
#[test]
fn given_free_text_when_parsing_then_append_draft() {
    match AppCommand::parse("  I led the migration.  ", 3) {
        Some(AppCommand::AppendDraft {
            question_index,
            text,
        }) => {
            assert_eq!(question_index, 3);
            assert_eq!(text, "  I led the migration.");
        }
        other => unreachable!("expected AppendDraft, got {other:?}"),
    }

    assert!(AppCommand::parse("   ", 0).is_none());
    assert!(AppCommand::parse("", 0).is_none());
}

/// WHAT: Unknown slash words are kept as answer text
/// WHY: Answers may legitimately start with a slash
#[test]
fn given_unknown_slash_word_when_parsing_then_treated_as_text() {
    assert!(matches!(
        AppCommand::parse("/usr/bin is on PATH", 0),
        Some(AppCommand::AppendDraft { .. })
    ));
}

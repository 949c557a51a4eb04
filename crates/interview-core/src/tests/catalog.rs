use crate::{BadgeTone, CategoryFilter, Difficulty, Icon, ModuleCatalog, ModuleCategory};

/// WHAT: Built-in catalog summary matches its data
/// WHY: The overview cards show completed count and average score
#[test]
fn given_builtin_catalog_when_summarising_then_two_completed_averaging_89() {
    // Given: The built-in catalog
    let catalog = ModuleCatalog::builtin();

    // When: Summarising
    let completed = catalog.completed_count();
    let average = catalog.average_score();

    // Then: Modules 1 (85) and 2 (92) are complete; 88.5 rounds up
    assert_eq!(catalog.modules().len(), 6);
    assert_eq!(completed, 2);
    assert_eq!(average, Some(89));
    assert!((catalog.completion_percent() - 100.0 / 3.0).abs() < 0.01);
}

/// WHAT: Average score is absent when nothing was scored
/// WHY: Division by zero must not leak into the overview
#[test]
fn given_catalog_without_scores_when_averaging_then_none() {
    // Given: A catalog with no completed modules
    let catalog = ModuleCatalog::new(
        ModuleCatalog::builtin()
            .modules()
            .iter()
            .filter(|m| !m.completed)
            .cloned()
            .collect(),
    );

    // When/Then: No average, zero completion
    assert_eq!(catalog.average_score(), None);
    assert_eq!(catalog.completed_count(), 0);
    assert_eq!(ModuleCatalog::new(Vec::new()).completion_percent(), 0.0);
}

/// WHAT: Category filter narrows the list, All keeps everything
/// WHY: Filter buttons select one interview kind at a time
#[test]
fn given_category_filter_when_filtering_then_only_matching_modules() {
    // Given: The built-in catalog
    let catalog = ModuleCatalog::builtin();

    // When: Filtering
    let all: Vec<&str> = catalog
        .filter(CategoryFilter::All)
        .map(|m| m.id.as_str())
        .collect();
    let technical: Vec<&str> = catalog
        .filter(CategoryFilter::Only(ModuleCategory::Technical))
        .map(|m| m.id.as_str())
        .collect();
    let behavioral: Vec<&str> = catalog
        .filter(CategoryFilter::Only(ModuleCategory::Behavioral))
        .map(|m| m.id.as_str())
        .collect();

    // Then: Order is preserved
    assert_eq!(all, ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(technical, ["1", "6"]);
    assert_eq!(behavioral, ["2", "5"]);
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
}

/// WHAT: Lookup by id finds the module
/// WHY: The session header shows the chosen module
#[test]
fn given_module_id_when_finding_then_module_or_none() {
    let catalog = ModuleCatalog::builtin();

    let module = catalog.find("3");

    assert_eq!(module.map(|m| m.difficulty), Some(Difficulty::Advanced));
    assert_eq!(module.map(|m| m.category), Some(ModuleCategory::CaseStudy));
    assert!(catalog.find("42").is_none());
}

/// WHAT: Difficulty and category map to badge tones and icons
/// WHY: Rendering relies on exhaustive mappings
#[test]
fn given_enums_when_mapping_then_expected_tones_and_icons() {
    assert_eq!(Difficulty::Beginner.tone(), BadgeTone::Green);
    assert_eq!(Difficulty::Intermediate.tone(), BadgeTone::Orange);
    assert_eq!(Difficulty::Advanced.tone(), BadgeTone::Red);

    let icons = ModuleCategory::ALL.map(ModuleCategory::icon);
    assert_eq!(icons, [Icon::Brain, Icon::Users, Icon::Award, Icon::Video]);
}

use crate::{Cli, cli::CategoryArg};

use clap::Parser;
use interview_core::{CategoryFilter, ModuleCategory};

/// WHAT: No arguments runs the first module
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_arguments_when_parsing_then_default_module() {
    let cli = Cli::try_parse_from(["mock-interview"]).unwrap();

    assert_eq!(cli.module_id, "1");
    assert!(!cli.results);
    assert!(cli.list.is_none());
}

/// WHAT: A module id and --results are accepted in any order
#[test]
#[allow(clippy::unwrap_used)]
fn given_module_and_results_flag_when_parsing_then_both_set() {
    let cli = Cli::try_parse_from(["mock-interview", "--results", "3"]).unwrap();

    assert_eq!(cli.module_id, "3");
    assert!(cli.results);
}

/// WHAT: A misspelt flag is rejected instead of read as a module id
/// WHY: `--result` used to fail later as an unknown module
#[test]
fn given_unknown_flag_when_parsing_then_error() {
    let result = Cli::try_parse_from(["mock-interview", "--result"]);

    assert!(result.is_err());
}

/// WHAT: Extra positional arguments are rejected
#[test]
fn given_two_module_ids_when_parsing_then_error() {
    let result = Cli::try_parse_from(["mock-interview", "1", "2"]);

    assert!(result.is_err());
}

/// WHAT: --list takes an optional category
/// WHY: The module list can be narrowed like the category filter buttons
#[test]
#[allow(clippy::unwrap_used)]
fn given_list_flag_when_parsing_then_category_filter() {
    let all = Cli::try_parse_from(["mock-interview", "--list"]).unwrap();
    let case_study = Cli::try_parse_from(["mock-interview", "--list", "case-study"]).unwrap();

    assert_eq!(all.list, Some(CategoryArg::All));
    assert_eq!(
        CategoryFilter::from(case_study.list.unwrap()),
        CategoryFilter::Only(ModuleCategory::CaseStudy)
    );
}

/// WHAT: Unknown categories and --list with --results are rejected
#[test]
fn given_invalid_list_usage_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["mock-interview", "--list", "sales"]).is_err());
    assert!(Cli::try_parse_from(["mock-interview", "--list", "--results"]).is_err());
}

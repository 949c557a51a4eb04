use clap::{Parser, ValueEnum};
use interview_core::{CategoryFilter, ModuleCategory};

const DEFAULT_MODULE_ID: &str = "1";

/// Command line of the interview binary.
#[derive(Parser, Debug)]
#[command(name = "mock-interview")]
#[command(about = "Timed practice interviews in the terminal")]
pub struct Cli {
    /// Practice module to run (see --list)
    #[arg(default_value = DEFAULT_MODULE_ID)]
    pub module_id: String,

    /// Open the results screen without running a session
    #[arg(long, conflicts_with = "list")]
    pub results: bool,

    /// List the practice modules, optionally only one category
    #[arg(
        long,
        value_name = "CATEGORY",
        num_args = 0..=1,
        default_missing_value = "all"
    )]
    pub list: Option<CategoryArg>,
}

/// Category names accepted by `--list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryArg {
    /// Every module
    All,
    /// Technical interviews
    Technical,
    /// Behavioral interviews
    Behavioral,
    /// Case studies
    CaseStudy,
    /// Presentations
    Presentation,
}

impl From<CategoryArg> for CategoryFilter {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => CategoryFilter::All,
            CategoryArg::Technical => CategoryFilter::Only(ModuleCategory::Technical),
            CategoryArg::Behavioral => CategoryFilter::Only(ModuleCategory::Behavioral),
            CategoryArg::CaseStudy => CategoryFilter::Only(ModuleCategory::CaseStudy),
            CategoryArg::Presentation => CategoryFilter::Only(ModuleCategory::Presentation),
        }
    }
}

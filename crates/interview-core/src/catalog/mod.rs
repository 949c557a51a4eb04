#[allow(clippy::module_inception)]
mod catalog;
mod module;

pub use {
    catalog::{CategoryFilter, ModuleCatalog},
    module::{BadgeTone, Difficulty, Icon, InterviewModule, ModuleCategory},
};

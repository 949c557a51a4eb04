use crate::catalog::{Difficulty, InterviewModule, ModuleCategory};

/// Category selection for the module list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every module.
    #[default]
    All,
    /// Show only modules of one category.
    Only(ModuleCategory),
}

impl CategoryFilter {
    fn matches(self, module: &InterviewModule) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => module.category == category,
        }
    }
}

/// Read-only catalog of practice modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCatalog {
    modules: Vec<InterviewModule>,
}

impl ModuleCatalog {
    /// Wrap an explicit module list.
    pub fn new(modules: Vec<InterviewModule>) -> Self {
        Self { modules }
    }

    /// All modules in display order.
    pub fn modules(&self) -> &[InterviewModule] {
        &self.modules
    }

    /// Look up a module by id.
    pub fn find(&self, id: &str) -> Option<&InterviewModule> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Modules matching `filter`, in display order.
    pub fn filter(&self, filter: CategoryFilter) -> impl Iterator<Item = &InterviewModule> {
        self.modules.iter().filter(move |m| filter.matches(m))
    }

    /// Number of completed modules.
    pub fn completed_count(&self) -> usize {
        self.modules.iter().filter(|m| m.completed).count()
    }

    /// Rounded mean score over completed modules that have a score.
    ///
    /// `None` when nothing has been scored yet.
    pub fn average_score(&self) -> Option<u8> {
        let scores: Vec<u32> = self
            .modules
            .iter()
            .filter(|m| m.completed)
            .filter_map(|m| m.score)
            .map(u32::from)
            .collect();

        if scores.is_empty() {
            return None;
        }

        let sum: u32 = scores.iter().sum();
        let count = scores.len() as u32;
        // Round half up.
        Some(((sum * 2 + count) / (count * 2)) as u8)
    }

    /// Completed modules as a percentage of the catalog.
    pub fn completion_percent(&self) -> f32 {
        if self.modules.is_empty() {
            return 0.0;
        }
        self.completed_count() as f32 / self.modules.len() as f32 * 100.0
    }

    /// The six practice modules offered out of the box.
    pub fn builtin() -> Self {
        let module = |id: &str,
                      title: &str,
                      description: &str,
                      duration_minutes: u32,
                      difficulty: Difficulty,
                      category: ModuleCategory,
                      score: Option<u8>| InterviewModule {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            duration_minutes,
            difficulty,
            category,
            completed: score.is_some(),
            score,
        };

        Self::new(vec![
            module(
                "1",
                "Technical Interview - Frontend Development",
                "React, JavaScript and HTML/CSS questions, including coding challenges and system design",
                45,
                Difficulty::Intermediate,
                ModuleCategory::Technical,
                Some(85),
            ),
            module(
                "2",
                "Behavioral Interview - Leadership and Teamwork",
                "STAR answers, leadership experience, conflict resolution cases",
                30,
                Difficulty::Beginner,
                ModuleCategory::Behavioral,
                Some(92),
            ),
            module(
                "3",
                "Case Study - Product Strategy",
                "Product analysis, market strategy and user needs assessment for product manager roles",
                60,
                Difficulty::Advanced,
                ModuleCategory::CaseStudy,
                None,
            ),
            module(
                "4",
                "Technical Presentation - System Architecture",
                "A five minute talk explaining the design of a complex system",
                15,
                Difficulty::Advanced,
                ModuleCategory::Presentation,
                None,
            ),
            module(
                "5",
                "Behavioral Interview - Setbacks and Growth",
                "How you handle setbacks and what you learned from failure",
                25,
                Difficulty::Beginner,
                ModuleCategory::Behavioral,
                None,
            ),
            module(
                "6",
                "Technical Interview - Backend Development",
                "Node.js, database design, API development and performance tuning",
                50,
                Difficulty::Intermediate,
                ModuleCategory::Technical,
                None,
            ),
        ])
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

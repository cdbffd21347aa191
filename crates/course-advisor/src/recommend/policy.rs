use super::domain::{Level, StudyYear};

/// Fixed mapping from study year to the difficulty levels worth suggesting.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelPolicy;

impl LevelPolicy {
    pub const fn allowed_levels(year: StudyYear) -> &'static [Level] {
        match year {
            StudyYear::Year1 => &[Level::Beginner],
            StudyYear::Year2 => &[Level::Beginner, Level::Intermediate],
            StudyYear::Year3 => &[Level::Intermediate],
            StudyYear::Year4 => &[Level::Advanced],
        }
    }
}

//! Completion progress shown under the task form.

use super::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    /// `round(100 * completed / total)` clamped to 0..=100; 0 for an empty list
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let ratio = 100.0 * self.completed as f64 / self.total as f64;
        ratio.round().clamp(0.0, 100.0) as u8
    }

    /// Counter line, e.g. `合計 2 件 ・ 完了 1 件`
    pub fn summary(&self) -> String {
        format!("合計 {} 件 ・ 完了 {} 件", self.total, self.completed)
    }
}

//! Static productivity figures shown around the live panels. Display only.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusScore {
    pub day: &'static str,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCompletion {
    pub day: &'static str,
    pub completed: u8,
    pub total: u8,
}

impl TaskCompletion {
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distraction {
    pub source: &'static str,
    pub ago: &'static str,
}

pub const FOCUS_SCORES: [FocusScore; 7] = [
    FocusScore {
        day: "Mon",
        score: 65,
    },
    FocusScore {
        day: "Tue",
        score: 75,
    },
    FocusScore {
        day: "Wed",
        score: 85,
    },
    FocusScore {
        day: "Thu",
        score: 70,
    },
    FocusScore {
        day: "Fri",
        score: 80,
    },
    FocusScore {
        day: "Sat",
        score: 90,
    },
    FocusScore {
        day: "Sun",
        score: 85,
    },
];

pub const TASK_COMPLETION: [TaskCompletion; 7] = [
    TaskCompletion {
        day: "Mon",
        completed: 5,
        total: 8,
    },
    TaskCompletion {
        day: "Tue",
        completed: 7,
        total: 9,
    },
    TaskCompletion {
        day: "Wed",
        completed: 6,
        total: 7,
    },
    TaskCompletion {
        day: "Thu",
        completed: 8,
        total: 10,
    },
    TaskCompletion {
        day: "Fri",
        completed: 4,
        total: 6,
    },
    TaskCompletion {
        day: "Sat",
        completed: 3,
        total: 4,
    },
    TaskCompletion {
        day: "Sun",
        completed: 5,
        total: 5,
    },
];

pub const DISTRACTIONS: [Distraction; 3] = [
    Distraction {
        source: "Social media notification",
        ago: "5m",
    },
    Distraction {
        source: "Phone call",
        ago: "20m",
    },
    Distraction {
        source: "Email alert",
        ago: "1h",
    },
];

pub const QUICK_ACTIONS: [&str; 2] = ["Start Task", "Block Distractions"];

pub const HEATMAP_CELLS: usize = 70;
pub const HEATMAP_COLUMNS: usize = 10;
/// Intensities run 0..=HEATMAP_LEVELS-1
pub const HEATMAP_LEVELS: u8 = 4;

/// Productivity streak grid, drawn once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    cells: Vec<u8>,
}

impl Heatmap {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let cells = (0..HEATMAP_CELLS)
            .map(|_| rng.gen_range(0..HEATMAP_LEVELS))
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.cells.chunks(HEATMAP_COLUMNS)
    }
}

pub fn best_focus_day() -> FocusScore {
    FOCUS_SCORES
        .iter()
        .copied()
        .max_by_key(|s| s.score)
        .unwrap_or(FOCUS_SCORES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_weekly_data_covers_seven_days() {
        assert_eq!(FOCUS_SCORES.len(), 7);
        assert_eq!(TASK_COMPLETION.len(), 7);
        assert!(TASK_COMPLETION.iter().all(|t| t.completed <= t.total));
    }

    #[test]
    fn test_task_completion_rate() {
        assert_eq!(TASK_COMPLETION[6].rate(), 1.0);
        assert_eq!(TASK_COMPLETION[3].rate(), 0.8);
        let empty = TaskCompletion {
            day: "x",
            completed: 0,
            total: 0,
        };
        assert_eq!(empty.rate(), 0.0);
    }

    #[test]
    fn test_heatmap_shape_and_levels() {
        let mut rng = StdRng::seed_from_u64(1);
        let heatmap = Heatmap::random(&mut rng);

        assert_eq!(heatmap.cells().len(), 70);
        assert!(heatmap.cells().iter().all(|&c| c < HEATMAP_LEVELS));
        assert_eq!(heatmap.rows().count(), 7);
        assert!(heatmap.rows().all(|row| row.len() == HEATMAP_COLUMNS));
    }

    #[test]
    fn test_best_focus_day() {
        assert_eq!(best_focus_day().day, "Sat");
    }
}

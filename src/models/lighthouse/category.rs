use serde::{Deserialize, Serialize};

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for Lighthouse categories, only the ones the comparison reads
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Categories {
    pub performance: Option<Category>,
}

impl Categories {
    /// Fractional performance score (0-1), if the category was scored.
    pub fn performance_score(&self) -> Option<f64> {
        self.performance.as_ref().and_then(|c| c.score)
    }
}

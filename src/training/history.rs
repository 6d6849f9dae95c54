use serde::{Deserialize, Serialize};

/// One logged iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MseRecord {
    pub iteration: f64,
    pub train_mse: f64,
    pub val_mse: f64,
}

/// Training and validation MSE per iteration, in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MseHistory {
    pub iterations: Vec<f64>,
    pub train_mse: Vec<f64>,
    pub val_mse: Vec<f64>,
}

impl Default for MseHistory {
    fn default() -> Self {
        MseHistory {
            iterations: Vec::new(),
            train_mse: Vec::new(),
            val_mse: Vec::new(),
        }
    }
}

impl MseHistory {
    pub fn record(&mut self, iteration: f64, train_mse: f64, val_mse: f64) {
        self.iterations.push(iteration);
        self.train_mse.push(train_mse);
        self.val_mse.push(val_mse);
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MseRecord> + '_ {
        self.iterations
            .iter()
            .zip(self.train_mse.iter())
            .zip(self.val_mse.iter())
            .map(|((&iteration, &train_mse), &val_mse)| MseRecord {
                iteration,
                train_mse,
                val_mse,
            })
    }

    /// `(iteration, training MSE)` pairs.
    pub fn train_points(&self) -> Vec<(f64, f64)> {
        self.iterations
            .iter()
            .copied()
            .zip(self.train_mse.iter().copied())
            .collect()
    }

    /// `(iteration, validation MSE)` pairs.
    pub fn val_points(&self) -> Vec<(f64, f64)> {
        self.iterations
            .iter()
            .copied()
            .zip(self.val_mse.iter().copied())
            .collect()
    }
}

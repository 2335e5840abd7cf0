use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Outcome of one provisioning operation: which folders now exist because
/// of this call, in creation order.
#[derive(Serialize, Clone)]
pub struct ProvisionReport {
    pub operation: String,
    pub root: String,
    pub created: Vec<String>,
    pub count: usize,
}

impl ProvisionReport {
    pub fn new(operation: &str, root: &Path, created: Vec<String>) -> Self {
        Self {
            operation: operation.to_string(),
            root: root.display().to_string(),
            count: created.len(),
            created,
        }
    }
}

#[derive(Serialize)]
pub struct RunReport {
    pub steps: Vec<ProvisionReport>,
}

/// Summary statistics over one fixed score list.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ScoreStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stdev: f64,
}

#[derive(Serialize)]
pub struct BylineReport {
    pub text: String,
    pub student_grades: ScoreStats,
    pub satisfaction_scores: ScoreStats,
}

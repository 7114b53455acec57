// src/types.rs
use serde::Serialize;

/// Line-count threshold past which a file lands in the problem section.
pub const OVERSIZE_LINES: usize = 500;

/// Coarse complexity label derived from a file's line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    VeryHigh,
    High,
    Moderate,
    Low,
}

impl ComplexityTier {
    #[must_use]
    pub fn from_lines(lines: usize) -> Self {
        if lines > 1500 {
            Self::VeryHigh
        } else if lines > 700 {
            Self::High
        } else if lines > 400 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "VERY HIGH",
            Self::High => "HIGH",
            Self::Moderate => "MODERATE",
            Self::Low => "LOW",
        }
    }
}

/// Analysis results for a single module file.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    pub name: String,
    pub lines: usize,
    pub functions: usize,
    /// Local include targets, in first-seen source order. May name modules
    /// that do not exist in the scan.
    pub includes: Vec<String>,
    pub direct: usize,
    pub transitive: usize,
    pub total: usize,
    pub tier: ComplexityTier,
}

impl ModuleReport {
    /// Average function length, zero when no functions were detected.
    #[must_use]
    pub fn avg_function_length(&self) -> f64 {
        if self.functions == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.lines as f64 / self.functions as f64
            }
        }
    }

    /// True if the file has grown past the oversize threshold.
    #[must_use]
    pub fn is_oversized(&self) -> bool {
        self.lines > OVERSIZE_LINES
    }
}

/// Aggregated results from scanning a directory of modules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// One entry per module file, alphabetical by name.
    pub modules: Vec<ModuleReport>,
    pub total_lines: usize,
    pub total_functions: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Modules sorted by line count, largest first.
    #[must_use]
    pub fn by_lines_desc(&self) -> Vec<&ModuleReport> {
        let mut sorted: Vec<&ModuleReport> = self.modules.iter().collect();
        sorted.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.name.cmp(&b.name)));
        sorted
    }

    /// Modules past the oversize threshold, largest first.
    #[must_use]
    pub fn oversized(&self) -> Vec<&ModuleReport> {
        self.by_lines_desc()
            .into_iter()
            .filter(|m| m.is_oversized())
            .collect()
    }
}

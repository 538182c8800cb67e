//! JSON form of the final report, printed by headless runs.
//!
//! Cells are card values with `null` for empty cells (row-major). Line results are
//! listed in scoring order; `kind` and `points` are `null` for lines without a pattern.

use serde::{Deserialize, Serialize};

use crate::core::{FinalReport, LineResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub seed: String,
    pub seed_replayable: bool,
    pub line_set: String,
    pub turns: u8,
    pub forced_end: bool,
    pub board: Vec<Option<u8>>,
    pub lines: Vec<LineMessage>,
    pub total: u32,
    /// Recorded draw, the order the seed encodes
    pub played_order: Vec<u8>,
    pub dealt_order: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMessage {
    pub line: String,
    pub label: String,
    pub kind: Option<String>,
    pub points: Option<u32>,
}

impl From<&LineResult> for LineMessage {
    fn from(r: &LineResult) -> Self {
        Self {
            line: r.line.kind.as_str().to_string(),
            label: r.line.label().to_string(),
            kind: r.result.kind().map(|k| k.as_str().to_string()),
            points: r.result.kind().map(|_| r.result.points()),
        }
    }
}

impl From<&FinalReport> for ReportMessage {
    fn from(report: &FinalReport) -> Self {
        Self {
            msg_type: "report".to_string(),
            seed: report.seed.to_string(),
            seed_replayable: report.seed_replayable,
            line_set: report.line_set.as_str().to_string(),
            turns: report.turns,
            forced_end: report.forced_end,
            board: report
                .board
                .cells()
                .iter()
                .map(|cell| cell.map(|c| c.value()))
                .collect(),
            lines: report.lines.iter().map(LineMessage::from).collect(),
            total: report.total,
            played_order: report.played_order.iter().map(|c| c.value()).collect(),
            dealt_order: report.dealt_order().map(|c| c.value()).collect(),
        }
    }
}

/// Serialize `report` as a single JSON line.
pub fn report_to_json(report: &FinalReport) -> serde_json::Result<String> {
    serde_json::to_string(&ReportMessage::from(report))
}

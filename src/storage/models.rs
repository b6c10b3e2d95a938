//! Data models for the storage layer

use serde::{Deserialize, Serialize};

/// One quarterback's season stat line, keyed by `name`.
///
/// Stat fields are `None` when the value is unknown, which is distinct from
/// a recorded zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterbackRecord {
    pub name: String,
    pub team: String,
    pub touchdowns: Option<u32>,
    pub interceptions: Option<u32>,
    pub qbr: Option<f64>,
}

impl QuarterbackRecord {
    /// Record with every stat unknown.
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            touchdowns: None,
            interceptions: None,
            qbr: None,
        }
    }

    pub fn with_stats(
        mut self,
        touchdowns: Option<u32>,
        interceptions: Option<u32>,
        qbr: Option<f64>,
    ) -> Self {
        self.touchdowns = touchdowns;
        self.interceptions = interceptions;
        self.qbr = qbr;
        self
    }
}

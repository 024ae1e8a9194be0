use serde::Serialize;

/// 一次 ticker 執行的統計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub ticks: u64,
    pub failures: u64,
}

impl TickReport {
    pub fn succeeded(&self) -> u64 {
        self.ticks - self.failures
    }
}

use crate::metrics::AttemptResult;

/// Best speeds seen since the process started.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordState {
    pub highest_cpm: f64,
    pub highest_wpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordFlags {
    pub new_cpm_record: bool,
    pub new_wpm_record: bool,
}

impl RecordFlags {
    pub fn any(&self) -> bool {
        self.new_cpm_record || self.new_wpm_record
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordTracker {
    state: RecordState,
}

impl RecordTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// CPM and WPM are compared independently; a tie is not a record.
    pub fn update(&mut self, result: &AttemptResult) -> RecordFlags {
        let new_cpm_record = result.cpm > self.state.highest_cpm;
        if new_cpm_record {
            self.state.highest_cpm = result.cpm;
        }

        let new_wpm_record = result.wpm > self.state.highest_wpm;
        if new_wpm_record {
            self.state.highest_wpm = result.wpm;
        }

        RecordFlags {
            new_cpm_record,
            new_wpm_record,
        }
    }

    pub fn reset(&mut self) {
        self.state = RecordState::default();
    }

    pub fn state(&self) -> RecordState {
        self.state
    }
}

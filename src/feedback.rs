use crate::metrics::AttemptResult;
use crate::records::RecordFlags;

pub const LOW_ACCURACY_THRESHOLD: f64 = 90.0;
pub const SLOW_SPEED_THRESHOLD: f64 = 50.0;
pub const IMPRESSIVE_SPEED_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Feedback {
    #[strum(to_string = "New record!")]
    NewRecord,
    #[strum(
        to_string = "Accuracy is below the recommended level. Focus on accuracy for better results."
    )]
    LowAccuracy,
    #[strum(to_string = "Your typing speed is a bit slow. Keep practicing to improve.")]
    SlowSpeed,
    #[strum(to_string = "Impressive typing speed! Keep up the good work!")]
    ImpressiveSpeed,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedbackAdvisor;

impl FeedbackAdvisor {
    /// First matching rule wins: records, then accuracy, then speed.
    pub fn advise(&self, result: &AttemptResult, records: RecordFlags) -> Option<Feedback> {
        if records.any() {
            Some(Feedback::NewRecord)
        } else if result.accuracy_percent < LOW_ACCURACY_THRESHOLD {
            Some(Feedback::LowAccuracy)
        } else if result.cpm < SLOW_SPEED_THRESHOLD {
            Some(Feedback::SlowSpeed)
        } else if result.cpm > IMPRESSIVE_SPEED_THRESHOLD {
            Some(Feedback::ImpressiveSpeed)
        } else {
            None
        }
    }
}

/// Review submission capability
///
/// Gallery items accept client reviews, but there is no backend yet. The
/// sink trait keeps the destination pluggable: display logic hands over a
/// structured record and does not care whether it lands in a log line or,
/// later, a real service.

use chrono::Local;
use serde::Serialize;

/// A submitted review, ready for whatever backend ends up receiving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    /// Id of the gallery item the review is about
    pub target_id: String,
    pub author: String,
    /// Star rating from 1 to 5
    pub rating: u8,
    pub comment: String,
    /// Submission date, YYYY-MM-DD
    pub date: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to encode review record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Destination for submitted reviews. Swap the implementation to integrate
/// a real backend without touching display logic.
pub trait ReviewSink {
    fn submit(&self, record: &ReviewRecord) -> Result<(), SinkError>;
}

/// Default sink: serializes the record and logs it locally.
pub struct LogReviewSink;

impl ReviewSink for LogReviewSink {
    fn submit(&self, record: &ReviewRecord) -> Result<(), SinkError> {
        let json = serde_json::to_string(record)?;
        println!("📝 New review: {json}");
        Ok(())
    }
}

/// In-progress review form state for the currently opened gallery item.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub author: String,
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        ReviewDraft {
            author: String::new(),
            // Five stars preselected, like the original form
            rating: 5,
            comment: String::new(),
        }
    }
}

impl ReviewDraft {
    /// Author and comment are required before the draft may be submitted.
    pub fn is_complete(&self) -> bool {
        !self.author.trim().is_empty() && !self.comment.trim().is_empty()
    }

    /// Build the submission record, stamped with today's date.
    pub fn to_record(&self, target_id: &str) -> ReviewRecord {
        ReviewRecord {
            target_id: target_id.to_string(),
            author: self.author.trim().to_string(),
            rating: self.rating,
            comment: self.comment.trim().to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    pub fn reset(&mut self) {
        *self = ReviewDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Test sink that captures every record it receives.
    struct RecordingSink {
        records: RefCell<Vec<ReviewRecord>>,
    }

    impl ReviewSink for RecordingSink {
        fn submit(&self, record: &ReviewRecord) -> Result<(), SinkError> {
            self.records.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    #[test]
    fn test_incomplete_drafts_are_rejected() {
        let mut draft = ReviewDraft::default();
        assert!(!draft.is_complete());

        draft.author = "Priya".to_string();
        assert!(!draft.is_complete());

        draft.comment = "   ".to_string();
        assert!(!draft.is_complete());

        draft.comment = "Loved the result.".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_complete_draft_reaches_the_sink() {
        let sink = RecordingSink {
            records: RefCell::new(Vec::new()),
        };
        let draft = ReviewDraft {
            author: "Priya".to_string(),
            rating: 4,
            comment: "Loved the result.".to_string(),
        };

        sink.submit(&draft.to_record("3")).unwrap();

        let records = sink.records.borrow();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].target_id, "3");
        assert_eq!(records[0].rating, 4);
    }

    #[test]
    fn test_record_is_stamped_with_an_iso_date() {
        let draft = ReviewDraft {
            author: "A".to_string(),
            rating: 5,
            comment: "B".to_string(),
        };
        let record = draft.to_record("1");
        assert_eq!(record.date.len(), 10);
        assert_eq!(record.date.matches('-').count(), 2);
    }

    #[test]
    fn test_reset_restores_the_default_rating() {
        let mut draft = ReviewDraft {
            author: "A".to_string(),
            rating: 2,
            comment: "B".to_string(),
        };
        draft.reset();
        assert_eq!(draft, ReviewDraft::default());
        assert_eq!(draft.rating, 5);
    }
}

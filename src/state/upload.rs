/// Simulated upload queue
///
/// This module owns the list of files queued on the admin uploads page and
/// drives each one through a synthetic transfer timeline. No bytes are
/// transmitted anywhere: the "upload" is a timer whose total duration is
/// derived from the file size, so the progress bars behave believably until
/// a real storage backend is wired up.

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Cadence of the periodic tick that advances in-flight transfers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(120);

/// Shortest simulated transfer, applied to tiny files.
const MIN_TRANSFER: Duration = Duration::from_secs(4);

/// Longest simulated transfer, applied to huge files.
const MAX_TRANSFER: Duration = Duration::from_secs(120);

/// Simulated throughput: one millisecond of transfer per this many bytes.
const BYTES_PER_MS: u64 = 5_000;

/// Compute the synthetic total duration for a file of the given size.
///
/// The duration grows linearly with byte size and is clamped so neither
/// tiny nor huge files produce degenerate timings.
pub fn transfer_duration(size_bytes: u64) -> Duration {
    Duration::from_millis(size_bytes / BYTES_PER_MS).clamp(MIN_TRANSFER, MAX_TRANSFER)
}

/// Everything we keep about a selected file. The bytes themselves stay on
/// disk; only metadata travels through the queue.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHandle {
    /// Filename only (e.g., "banner-final.png")
    pub name: String,
    /// Size in bytes, from the filesystem metadata
    pub size_bytes: u64,
    /// Guessed media type (e.g., "image/png"), or "unknown"
    pub media_type: String,
    /// Originating path; absent for handles without a backing file
    pub path: Option<PathBuf>,
}

/// Lifecycle of a queued file. Transitions only move forward:
/// Queued → Uploading → Done. Error is reserved for a real transport and
/// is never produced by the simulated driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Queued,
    Uploading,
    Done,
    Error,
}

impl UploadStatus {
    /// Lowercase label for display, matching the status line under each
    /// progress bar.
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Queued => "queued",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Done => "done",
            UploadStatus::Error => "error",
        }
    }
}

/// Session-scoped reference to the source file, attached when a transfer
/// completes. Usable for local preview only; not a durable location.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRef {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl PreviewRef {
    fn for_handle(handle: &FileHandle) -> Self {
        PreviewRef {
            name: handle.name.clone(),
            path: handle.path.clone(),
        }
    }
}

/// One file awaiting or undergoing simulated transfer.
#[derive(Debug, Clone)]
pub struct QueuedFile {
    /// Unique within the queue for the lifetime of the queue
    pub id: u64,
    pub handle: FileHandle,
    /// Integer percentage in [0, 100]. Zero exactly while Queued, 100
    /// exactly when Done, and within [1, 99] while Uploading.
    pub progress: u8,
    pub status: UploadStatus,
    /// Present only once the item is Done
    pub preview: Option<PreviewRef>,
    /// Present only when status is Error
    pub error: Option<String>,
}

/// Notifications emitted by queue operations so the caller can react
/// (e.g., kick off preview generation when an item completes).
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    Started(u64),
    Completed(u64, PreviewRef),
}

/// Outcome of a start request, surfaced to the user as a notice rather
/// than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
    NothingQueued,
}

/// The transfer currently progressing, if any. At most one item is in
/// flight at a time: processing is deliberately serialized.
#[derive(Debug)]
struct InFlight {
    id: u64,
    started: Instant,
    total: Duration,
}

/// Ordered collection of queued files plus the simulation driver.
///
/// All mutation happens from the single update loop; the queue itself has
/// no interior mutability and no timers. Callers feed it the current
/// instant on every periodic tick.
#[derive(Debug)]
pub struct UploadQueue {
    files: Vec<QueuedFile>,
    next_id: u64,
    auto_start: bool,
    in_flight: Option<InFlight>,
    /// True while a sequential drain is working through queued items
    draining: bool,
}

impl UploadQueue {
    pub fn new() -> Self {
        UploadQueue {
            files: Vec::new(),
            next_id: 1,
            // Matches the uploader's default: new files start on their own
            auto_start: true,
            in_flight: None,
            draining: false,
        }
    }

    pub fn files(&self) -> &[QueuedFile] {
        &self.files
    }

    pub fn get(&self, id: u64) -> Option<&QueuedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.files.iter().filter(|f| f.status == UploadStatus::Done).count()
    }

    pub fn queued_count(&self) -> usize {
        self.files.iter().filter(|f| f.status == UploadStatus::Queued).count()
    }

    pub fn auto_start(&self) -> bool {
        self.auto_start
    }

    /// Flip the auto-start flag, returning the new value.
    pub fn toggle_auto_start(&mut self) -> bool {
        self.auto_start = !self.auto_start;
        self.auto_start
    }

    /// True while an item's simulated transfer is progressing. The caller
    /// keeps the periodic tick subscription alive exactly while this holds.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Add a batch of files to the front of the list (newest first). The
    /// batch keeps its own internal order, so the first file of a
    /// multi-file drop is processed first. With auto-start enabled the
    /// drain begins immediately.
    pub fn enqueue(&mut self, handles: Vec<FileHandle>, now: Instant) -> Vec<UploadEvent> {
        let new_items: Vec<QueuedFile> = handles
            .into_iter()
            .map(|handle| {
                let id = self.next_id;
                self.next_id += 1;
                QueuedFile {
                    id,
                    handle,
                    progress: 0,
                    status: UploadStatus::Queued,
                    preview: None,
                    error: None,
                }
            })
            .collect();

        self.files.splice(0..0, new_items);

        let mut events = Vec::new();
        if self.auto_start {
            if let StartOutcome::Started = self.start_all(now) {
                if let Some(active) = &self.in_flight {
                    events.push(UploadEvent::Started(active.id));
                }
            }
        }
        events
    }

    /// Begin draining every queued item, one at a time, in list order.
    /// Item N+1 does not begin progressing until item N reaches Done.
    pub fn start_all(&mut self, now: Instant) -> StartOutcome {
        if self.in_flight.is_some() {
            return StartOutcome::AlreadyRunning;
        }
        if self.begin_next(now) {
            self.draining = true;
            StartOutcome::Started
        } else {
            StartOutcome::NothingQueued
        }
    }

    /// Advance the in-flight transfer to the given instant. Progress is
    /// recomputed from elapsed time; once the synthetic duration has fully
    /// elapsed the item completes and, during a drain, the next queued
    /// item begins.
    pub fn tick(&mut self, now: Instant) -> Vec<UploadEvent> {
        let mut events = Vec::new();

        let Some(active) = &self.in_flight else {
            return events;
        };
        let id = active.id;
        let elapsed = now.duration_since(active.started);
        let total = active.total;

        if elapsed >= total {
            if let Some(item) = self.files.iter_mut().find(|f| f.id == id) {
                item.progress = 100;
                item.status = UploadStatus::Done;
                let preview = PreviewRef::for_handle(&item.handle);
                item.preview = Some(preview.clone());
                events.push(UploadEvent::Completed(id, preview));
            }
            self.in_flight = None;
            if self.draining {
                if self.begin_next(now) {
                    if let Some(next) = &self.in_flight {
                        events.push(UploadEvent::Started(next.id));
                    }
                } else {
                    self.draining = false;
                }
            }
        } else {
            let pct = ((elapsed.as_millis() * 100) / total.as_millis()) as u8;
            if let Some(item) = self.files.iter_mut().find(|f| f.id == id) {
                // Monotonic, and held within [1, 99] until completion
                item.progress = item.progress.max(pct.clamp(1, 99));
            }
        }

        events
    }

    /// Remove one item regardless of status; no-op for unknown ids.
    /// Removing the in-flight item cancels its simulation outright, so no
    /// later tick can touch the removed id. Mid-drain, the next queued
    /// item is promoted.
    pub fn remove(&mut self, id: u64, now: Instant) -> Vec<UploadEvent> {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        if self.files.len() == before {
            return Vec::new();
        }

        let mut events = Vec::new();
        if self.in_flight.as_ref().is_some_and(|active| active.id == id) {
            self.in_flight = None;
            if self.draining {
                if self.begin_next(now) {
                    if let Some(next) = &self.in_flight {
                        events.push(UploadEvent::Started(next.id));
                    }
                } else {
                    self.draining = false;
                }
            }
        }
        events
    }

    /// Empty the list unconditionally and cancel any in-flight simulation.
    pub fn clear(&mut self) {
        self.files.clear();
        self.in_flight = None;
        self.draining = false;
    }

    /// Start the first queued item in list order, if any.
    fn begin_next(&mut self, now: Instant) -> bool {
        let Some(item) = self.files.iter_mut().find(|f| f.status == UploadStatus::Queued) else {
            return false;
        };
        item.status = UploadStatus::Uploading;
        item.progress = 1;
        self.in_flight = Some(InFlight {
            id: item.id,
            started: now,
            total: transfer_duration(item.handle.size_bytes),
        });
        true
    }
}

impl Default for UploadQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a byte count the way the uploader displays it: 1024-based steps
/// through Bytes/KB/MB/GB/TB, two decimal places with trailing zeros
/// trimmed, and "0 Byte" for an empty file.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Byte".to_string();
    }
    let mut exp = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && exp < UNITS.len() - 1 {
        value /= 1024.0;
        exp += 1;
    }
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exp])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(name: &str, size_bytes: u64) -> FileHandle {
        FileHandle {
            name: name.to_string(),
            size_bytes,
            media_type: "application/octet-stream".to_string(),
            path: None,
        }
    }

    /// A queue with auto-start disabled, so tests control the drain.
    fn manual_queue() -> UploadQueue {
        let mut queue = UploadQueue::new();
        queue.toggle_auto_start();
        queue
    }

    #[test]
    fn test_enqueued_items_start_queued_at_zero() {
        let mut queue = manual_queue();
        queue.enqueue(vec![handle("a.png", 1000), handle("b.mp4", 2000)], Instant::now());

        assert_eq!(queue.len(), 2);
        for item in queue.files() {
            assert_eq!(item.status, UploadStatus::Queued);
            assert_eq!(item.progress, 0);
            assert!(item.preview.is_none());
            assert!(item.error.is_none());
        }
    }

    #[test]
    fn test_enqueue_prepends_newest_batch_first() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("old.png", 10)], t0);
        queue.enqueue(vec![handle("new-1.png", 10), handle("new-2.png", 10)], t0);

        let names: Vec<&str> = queue.files().iter().map(|f| f.handle.name.as_str()).collect();
        assert_eq!(names, vec!["new-1.png", "new-2.png", "old.png"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("a", 1), handle("b", 1), handle("c", 1)], t0);
        queue.enqueue(vec![handle("d", 1)], t0);

        let mut ids: Vec<u64> = queue.files().iter().map(|f| f.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_start_all_with_nothing_queued_is_a_notice() {
        let mut queue = manual_queue();
        assert_eq!(queue.start_all(Instant::now()), StartOutcome::NothingQueued);
        assert!(!queue.is_in_flight());
    }

    #[test]
    fn test_start_all_while_running_is_a_noop() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("a", 1), handle("b", 1)], t0);
        assert_eq!(queue.start_all(t0), StartOutcome::Started);
        assert_eq!(queue.start_all(t0), StartOutcome::AlreadyRunning);
    }

    #[test]
    fn test_progress_is_monotonic_and_capped_below_100() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        // 1 byte clamps to the 4 second minimum
        queue.enqueue(vec![handle("tiny.txt", 1)], t0);
        queue.start_all(t0);

        let mut last = 0;
        for ms in [120, 500, 1000, 2000, 3000, 3900] {
            queue.tick(t0 + Duration::from_millis(ms));
            let item = &queue.files()[0];
            assert_eq!(item.status, UploadStatus::Uploading);
            assert!(item.progress >= 1 && item.progress <= 99);
            assert!(item.progress >= last, "progress went backwards");
            last = item.progress;
        }
    }

    #[test]
    fn test_completion_sets_done_at_100_with_preview() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("tiny.txt", 1)], t0);
        queue.start_all(t0);

        let events = queue.tick(t0 + Duration::from_secs(4));
        let item = &queue.files()[0];
        assert_eq!(item.status, UploadStatus::Done);
        assert_eq!(item.progress, 100);
        assert!(item.preview.is_some());
        assert_eq!(events, vec![UploadEvent::Completed(item.id, item.preview.clone().unwrap())]);
    }

    #[test]
    fn test_sequential_contract_second_item_waits() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        // One batch: "first.bin" is processed first, "second.bin" waits
        queue.enqueue(vec![handle("first.bin", 1), handle("second.bin", 1)], t0);
        queue.start_all(t0);

        queue.tick(t0 + Duration::from_secs(2));
        assert_eq!(queue.files()[0].status, UploadStatus::Uploading);
        assert_eq!(queue.files()[1].status, UploadStatus::Queued);
        assert_eq!(queue.files()[1].progress, 0);

        // First completes at 4s; the drain promotes the second
        let events = queue.tick(t0 + Duration::from_secs(4));
        assert_eq!(queue.files()[0].status, UploadStatus::Done);
        assert_eq!(queue.files()[1].status, UploadStatus::Uploading);
        assert!(events.iter().any(|e| matches!(e, UploadEvent::Started(id) if *id == queue.files()[1].id)));
    }

    #[test]
    fn test_small_file_finishes_before_large_file_begins() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        // 500 KB clamps to 4s; 50 MB maps to ~10.5s
        queue.enqueue(
            vec![handle("small.jpg", 500 * 1024), handle("large.mov", 50 * 1024 * 1024)],
            t0,
        );
        queue.start_all(t0);

        queue.tick(t0 + Duration::from_millis(3_900));
        let large = &queue.files()[1];
        assert_eq!(large.status, UploadStatus::Queued);
        assert_eq!(large.progress, 0);

        queue.tick(t0 + Duration::from_secs(4));
        assert_eq!(queue.files()[0].status, UploadStatus::Done);
        assert_eq!(queue.files()[1].status, UploadStatus::Uploading);
    }

    #[test]
    fn test_auto_start_begins_transfer_on_enqueue() {
        let mut queue = UploadQueue::new();
        assert!(queue.auto_start());

        let events = queue.enqueue(vec![handle("dropped.png", 1)], Instant::now());
        assert!(queue.is_in_flight());
        assert_eq!(queue.files()[0].status, UploadStatus::Uploading);
        assert!(matches!(events.as_slice(), [UploadEvent::Started(_)]));
    }

    #[test]
    fn test_remove_unknown_id_leaves_list_unchanged() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("a", 1)], t0);

        let events = queue.remove(999, t0);
        assert!(events.is_empty());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_removing_in_flight_item_cancels_and_promotes_next() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("a", 1), handle("b", 1)], t0);
        queue.start_all(t0);
        let first_id = queue.files()[0].id;
        let second_id = queue.files()[1].id;

        let events = queue.remove(first_id, t0 + Duration::from_secs(1));
        assert!(queue.get(first_id).is_none());
        assert_eq!(events, vec![UploadEvent::Started(second_id)]);
        assert_eq!(queue.files()[0].status, UploadStatus::Uploading);

        // No stale update applies to the removed id
        let events = queue.tick(t0 + Duration::from_secs(2));
        assert!(events.is_empty());
        assert!(queue.get(first_id).is_none());
    }

    #[test]
    fn test_removing_last_in_flight_item_ends_the_drain() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("only", 1)], t0);
        queue.start_all(t0);
        let id = queue.files()[0].id;

        queue.remove(id, t0 + Duration::from_secs(1));
        assert!(!queue.is_in_flight());
        assert!(queue.is_empty());
        assert!(queue.tick(t0 + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let mut queue = manual_queue();
        let t0 = Instant::now();
        queue.enqueue(vec![handle("a", 1), handle("b", 1)], t0);
        queue.start_all(t0);

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.is_in_flight());

        queue.clear();
        assert!(queue.is_empty());
        assert!(!queue.is_in_flight());
    }

    #[test]
    fn test_transfer_duration_clamps_both_ends() {
        assert_eq!(transfer_duration(0), Duration::from_secs(4));
        assert_eq!(transfer_duration(500 * 1024), Duration::from_secs(4));
        // 100 MB maps to ~21s, inside the clamp range
        assert_eq!(transfer_duration(100_000_000), Duration::from_secs(20));
        assert_eq!(transfer_duration(5 * 1024 * 1024 * 1024), Duration::from_secs(120));
    }

    #[test]
    fn test_human_size_formatting() {
        assert_eq!(human_size(0), "0 Byte");
        assert_eq!(human_size(512), "512 Bytes");
        assert_eq!(human_size(1024), "1 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(500 * 1024), "500 KB");
        assert_eq!(human_size(50 * 1024 * 1024), "50 MB");
        assert_eq!(human_size(2_621_440), "2.5 MB");
        assert_eq!(human_size(1024 * 1024 * 1024), "1 GB");
    }
}

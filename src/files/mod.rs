/// File intake module
///
/// This module handles:
/// - Turning picked or dropped paths into queue-ready file handles
/// - Walking dropped folders recursively
/// - Decoding downscaled in-memory previews for completed image items

pub mod inspect;
pub mod preview;

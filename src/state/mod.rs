/// State management module
///
/// This module handles all application state, including:
/// - Sample portfolio content tables (content.rs, data.rs)
/// - The simulated upload queue (upload.rs)
/// - Review submission capability (review.rs)
/// - Service request form state and validation (request.rs)

pub mod content;
pub mod data;
pub mod request;
pub mod review;
pub mod upload;

/// Shared data structures for the portfolio content
///
/// These structs represent the fixed sample data that flows from the
/// content tables to the view layer. Nothing here is persisted; the
/// tables are rebuilt on every launch.

/// A client review attached to a gallery item
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// Unique within the owning item's review list
    pub id: &'static str,
    pub author: &'static str,
    /// Star rating from 1 to 5
    pub rating: u8,
    pub comment: &'static str,
    /// Date given, YYYY-MM-DD
    pub date: &'static str,
}

/// Where a portfolio video lives
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    /// Embedded from a hosting platform
    Hosted(&'static str),
    /// A sample clip shipped with the portfolio
    LocalSample(&'static str),
}

/// One entry in the video portfolio gallery
#[derive(Debug, Clone, PartialEq)]
pub struct VideoItem {
    pub id: &'static str,
    pub title: &'static str,
    pub source: VideoSource,
    pub description: &'static str,
    pub reviews: Vec<Review>,
}

/// One entry in the graphic design gallery
#[derive(Debug, Clone, PartialEq)]
pub struct DesignItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub reviews: Vec<Review>,
}

/// A desktop-publishing service card
#[derive(Debug, Clone, PartialEq)]
pub struct DtpService {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// A web design / development showcase project
#[derive(Debug, Clone, PartialEq)]
pub struct WebProject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
}

/// A top-level service offering card
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// External portfolio link shown with the card
    pub link: &'static str,
}

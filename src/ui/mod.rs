/// View module
///
/// Stateless rendering functions for the home page sections and the admin
/// uploads page. All state lives in the App; these functions only read it.

use iced::Color;

pub mod home;
pub mod uploads;

/// Muted secondary text, close to the web version's muted foreground
pub const MUTED: Color = Color::from_rgb(0.63, 0.64, 0.70);

/// Warm accent used for kickers and star ratings
pub const ACCENT: Color = Color::from_rgb(0.95, 0.70, 0.25);

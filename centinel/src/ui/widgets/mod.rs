//! Widgets for the CENTINEL TUI.

pub mod image_card;
pub mod listing;
pub mod password;
pub mod text_view;

pub use image_card::ImageCardWidget;
pub use listing::ListingWidget;
pub use password::PasswordPromptWidget;
pub use text_view::TextViewWidget;

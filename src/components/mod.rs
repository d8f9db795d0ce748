//! UI components for the public page and the admin panel.

pub mod admin;
pub mod countdown_overlay;
pub mod gallery;
pub mod lightbox;
pub mod live_counter;
pub mod music_embed;
pub mod reasons_section;
pub mod secret_letter;
pub mod timeline_section;
pub mod toast;

pub use countdown_overlay::CountdownOverlay;
pub use gallery::GallerySection;
pub use live_counter::LiveCounter;
pub use music_embed::MusicSection;
pub use reasons_section::ReasonsSection;
pub use secret_letter::SecretLetterSection;
pub use timeline_section::TimelineSection;
pub use toast::ToastHost;

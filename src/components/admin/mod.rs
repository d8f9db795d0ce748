//! Admin panel components: login, the four content managers and the shared
//! delete-confirmation dialog.

pub mod delete_confirm;
pub mod gallery_manager;
pub mod login_form;
pub mod reasons_manager;
pub mod settings_manager;
pub mod timeline_manager;

pub use delete_confirm::DeleteConfirmDialog;
pub use gallery_manager::GalleryManager;
pub use login_form::LoginForm;
pub use reasons_manager::ReasonsManager;
pub use settings_manager::SettingsManager;
pub use timeline_manager::TimelineManager;

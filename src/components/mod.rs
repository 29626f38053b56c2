// ABOUTME: UI components for the booking wizard screens

pub mod auth;
pub mod confirmed;
pub mod date_picker;
pub mod help;
pub mod layout;
pub mod service_picker;
pub mod shop_picker;
pub mod summary;

pub use auth::AuthComponent;
pub use confirmed::ConfirmedComponent;
pub use date_picker::DateTimePickerComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use service_picker::ServicePickerComponent;
pub use shop_picker::ShopPickerComponent;
pub use summary::SummaryComponent;

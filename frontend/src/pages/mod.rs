pub mod theme_selector;
pub mod vendor_dashboard;

pub use theme_selector::ThemeSelector;
pub use vendor_dashboard::VendorDashboard;

mod admin_panel;
mod app;
mod timeline;
mod tracking_view;

pub use admin_panel::AdminPanel;
pub use app::App;
pub use timeline::Timeline;
pub use tracking_view::TrackingView;

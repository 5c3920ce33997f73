pub mod clock;
pub mod download;

pub use clock::now_hhmm;
pub use download::trigger_download;

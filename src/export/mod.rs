pub mod backup;
pub mod static_site;

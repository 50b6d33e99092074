// src/models.rs
mod annotation_match;
mod scan_stats;

pub use annotation_match::AnnotationMatch;
pub use scan_stats::ScanStats;

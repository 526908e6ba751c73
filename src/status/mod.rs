pub mod report;
pub mod watcher;

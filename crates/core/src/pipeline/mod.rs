pub mod live_detection_use_case;
pub mod run_stats;
pub mod snapshot_writer;

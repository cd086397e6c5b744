//! Cassette format for recording and replaying task service sessions.

pub mod format;
pub mod recorder;
pub mod replayer;

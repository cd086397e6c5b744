//! Port implementations: live HTTP, cassette recording, cassette replay.

pub mod live;
pub mod recording;
pub mod replaying;

//! Scripted step actions attached to waypoints.

use serde::Serialize;
use serde_json::{json, Value};

/// Wire code for a timed pause.
pub const PAUSE_CODE: u16 = 18;
/// Wire code for audio playback.
pub const PLAY_AUDIO_CODE: u16 = 5;
/// Wire code for a wait that echoes user data back through the event channel.
pub const WAIT_CODE: u16 = 40;
/// Wire code for raising a lift.
pub const LIFT_UP_CODE: u16 = 47;
/// Wire code for lowering a lift.
pub const LIFT_DOWN_CODE: u16 = 48;

/// A single scripted behavior executed when the robot reaches a waypoint.
///
/// Serializes to the `{type, data}` step-action shape the task service expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "StepAct")]
pub enum Action {
    /// Stand still for a number of seconds.
    Pause {
        /// Pause length in seconds.
        seconds: u32,
    },
    /// Play an audio clip from the service's audio catalog.
    PlayAudio {
        /// Opaque audio identifier.
        audio_id: String,
    },
    /// Wait and emit `user_data` on the event channel.
    Wait {
        /// Arbitrary payload echoed back by the service.
        user_data: Value,
    },
    /// Raise the lift, using the named area.
    LiftUp {
        /// Area the lift operates in.
        use_area_id: String,
    },
    /// Lower the lift, using the named area.
    LiftDown {
        /// Area the lift operates in.
        use_area_id: String,
    },
}

impl Action {
    /// Pause for `seconds`.
    #[must_use]
    pub fn pause(seconds: u32) -> Self {
        Self::Pause { seconds }
    }

    /// Play the catalog clip `audio_id` once at full volume.
    #[must_use]
    pub fn play_audio(audio_id: impl Into<String>) -> Self {
        Self::PlayAudio { audio_id: audio_id.into() }
    }

    /// Wait and hand `user_data` back through the service's event channel.
    #[must_use]
    pub fn wait(user_data: impl Into<Value>) -> Self {
        Self::Wait { user_data: user_data.into() }
    }

    /// Raise the lift in `use_area_id`.
    #[must_use]
    pub fn lift_up(use_area_id: impl Into<String>) -> Self {
        Self::LiftUp { use_area_id: use_area_id.into() }
    }

    /// Lower the lift in `use_area_id`.
    #[must_use]
    pub fn lift_down(use_area_id: impl Into<String>) -> Self {
        Self::LiftDown { use_area_id: use_area_id.into() }
    }

    /// The numeric type code sent on the wire.
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Pause { .. } => PAUSE_CODE,
            Self::PlayAudio { .. } => PLAY_AUDIO_CODE,
            Self::Wait { .. } => WAIT_CODE,
            Self::LiftUp { .. } => LIFT_UP_CODE,
            Self::LiftDown { .. } => LIFT_DOWN_CODE,
        }
    }
}

/// Wire form of an [`Action`].
#[derive(Serialize)]
struct StepAct {
    #[serde(rename = "type")]
    code: u16,
    data: Value,
}

impl From<Action> for StepAct {
    fn from(action: Action) -> Self {
        let code = action.code();
        let data = match action {
            Action::Pause { seconds } => json!({ "pauseTime": seconds }),
            // Everything but the clip id is fixed for this task class.
            Action::PlayAudio { audio_id } => json!({
                "mode": 1,
                "url": "",
                "audioId": audio_id,
                "interval": -1,
                "num": 1,
                "volume": 100,
                "channel": 1,
                "duration": -1,
            }),
            Action::Wait { user_data } => json!({ "userData": user_data }),
            Action::LiftUp { use_area_id } | Action::LiftDown { use_area_id } => {
                json!({ "useAreaId": use_area_id })
            }
        };
        Self { code, data }
    }
}

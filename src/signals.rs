//! Signal names emitted by the sound service.
//!
//! Listeners match these members by exact string equality, so the values
//! are a published wire contract and must never change.

use dbus::message::{MatchRule, MessageType};
use dbus::strings::Member;
use std::fmt;

pub const SIGNAL_SINK_INPUT_WHILE_MUTED: &str = "SinkInputWhileMuted";
pub const SIGNAL_SINK_VOLUME_UPDATE: &str = "SinkVolumeUpdate";
pub const SIGNAL_SINK_MUTE_UPDATE: &str = "SinkMuteUpdate";
pub const SIGNAL_SINK_AVAILABLE_UPDATE: &str = "SinkAvailableUpdate";

/// The sink-state signals, one variant per wire name.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SinkSignal {
    InputWhileMuted,
    VolumeUpdate,
    MuteUpdate,
    AvailableUpdate,
}

impl SinkSignal {
    pub const ALL: [SinkSignal; 4] = [
        SinkSignal::InputWhileMuted,
        SinkSignal::VolumeUpdate,
        SinkSignal::MuteUpdate,
        SinkSignal::AvailableUpdate,
    ];

    /// The wire name of this signal.
    pub fn as_str(self) -> &'static str {
        match self {
            SinkSignal::InputWhileMuted => SIGNAL_SINK_INPUT_WHILE_MUTED,
            SinkSignal::VolumeUpdate => SIGNAL_SINK_VOLUME_UPDATE,
            SinkSignal::MuteUpdate => SIGNAL_SINK_MUTE_UPDATE,
            SinkSignal::AvailableUpdate => SIGNAL_SINK_AVAILABLE_UPDATE,
        }
    }

    /// Look a received member name back up. Matching is exact; anything
    /// else is not part of this contract.
    pub fn from_member(member: &str) -> Option<SinkSignal> {
        SinkSignal::ALL.into_iter().find(|s| s.as_str() == member)
    }

    /// The name as a typed DBus member.
    pub fn member(self) -> Member<'static> {
        // SAFETY: each is a valid NUL-terminated member name
        unsafe {
            match self {
                SinkSignal::InputWhileMuted => {
                    Member::from_slice_unchecked("SinkInputWhileMuted\0")
                }
                SinkSignal::VolumeUpdate => Member::from_slice_unchecked("SinkVolumeUpdate\0"),
                SinkSignal::MuteUpdate => Member::from_slice_unchecked("SinkMuteUpdate\0"),
                SinkSignal::AvailableUpdate => {
                    Member::from_slice_unchecked("SinkAvailableUpdate\0")
                }
            }
        }
    }

    /// A match rule for this signal, keyed on the member name only. The
    /// service's bus name, path and interface belong to the service side
    /// and are not part of the shared vocabulary.
    pub fn match_rule(self) -> MatchRule<'static> {
        MatchRule::new()
            .with_type(MessageType::Signal)
            .with_member(self.member())
    }
}

impl fmt::Display for SinkSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

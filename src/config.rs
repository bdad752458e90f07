#[doc = r#"
Options for [`MidiFile::parse_with`](crate::file::MidiFile::parse_with).

The defaults decode strictly: every event must carry its own status byte,
notes are paired per channel, and notes still open at the end of a track
are reported rather than closed.

# Example
```rust
# use smfread::prelude::*;
let config = ParseConfig::default()
    .running_status(true)
    .note_key(NoteKey::Pitch)
    .unterminated(UnterminatedPolicy::CloseAtTrackEnd);

assert!(config.allows_running_status());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    running_status: bool,
    note_key: NoteKey,
    unterminated: UnterminatedPolicy,
}

impl ParseConfig {
    /// Accept channel events that omit a status byte equal to the previous one.
    pub const fn running_status(mut self, enabled: bool) -> Self {
        self.running_status = enabled;
        self
    }
    /// How the note resolver identifies an open note.
    pub const fn note_key(mut self, key: NoteKey) -> Self {
        self.note_key = key;
        self
    }
    /// What to do with notes still open when a track ends.
    pub const fn unterminated(mut self, policy: UnterminatedPolicy) -> Self {
        self.unterminated = policy;
        self
    }

    /// True if running status is accepted
    pub const fn allows_running_status(&self) -> bool {
        self.running_status
    }
    /// The configured [`NoteKey`]
    pub const fn note_keying(&self) -> NoteKey {
        self.note_key
    }
    /// The configured [`UnterminatedPolicy`]
    pub const fn unterminated_policy(&self) -> UnterminatedPolicy {
        self.unterminated
    }
}

/// The key of the open-notes table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteKey {
    /// Notes are matched by pitch alone.
    ///
    /// The same pitch sounding on two channels at once collides: the second
    /// Note-On is ignored and the first Note-Off closes the note.
    Pitch,
    /// Notes are matched by channel and pitch.
    #[default]
    ChannelAndPitch,
}

/// Handling of Note-Ons with no Note-Off by the end of their track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnterminatedPolicy {
    /// Emit an [`UnterminatedNote`](crate::ParseWarning::UnterminatedNote) warning and drop the note.
    #[default]
    Report,
    /// Close the note at the track's last tick, and still emit the warning.
    CloseAtTrackEnd,
}

use alloc::{collections::BTreeMap, vec::Vec};

use crate::{
    NoteKey, ParseConfig, ParseWarning, Pitch, UnterminatedPolicy,
    file::{Note, Timing},
    message::{Channel, ChannelVoiceMessage},
};

#[derive(Debug, Clone, Copy)]
struct OpenNote {
    pitch: Pitch,
    velocity: u8,
    channel: Channel,
    start_ticks: u64,
}

#[doc = r#"
Pairs Note-Ons with their releases within one track.

Open notes live in a table keyed by pitch, or by channel and pitch
(see [`NoteKey`]). A Note-On for a key that is already open is ignored.
A Note-Off, or a Note-On with velocity zero, closes the open note and
yields a [`Note`]. A release with nothing open raises
[`ParseWarning::UnmatchedNoteOff`].

# Example
```rust
# use smfread::prelude::*;
let timing = Timing::from_division(96);
let mut resolver = NoteResolver::new(0, timing, &ParseConfig::default());
let mut warnings = Vec::new();

let on = ChannelVoiceMessage::new(
    Channel::One,
    VoiceEvent::NoteOn { pitch: Pitch::MIDDLE_C, velocity: 100 },
);
let off = ChannelVoiceMessage::new(
    Channel::One,
    VoiceEvent::NoteOff { pitch: Pitch::MIDDLE_C, velocity: 0 },
);
resolver.handle(&on, 0, &mut warnings);
resolver.handle(&off, 96, &mut warnings);

let notes = resolver.finish(96, &mut warnings);
assert_eq!(notes[0].duration(), 1.0);
assert!(warnings.is_empty());
```
"#]
#[derive(Debug)]
pub struct NoteResolver {
    track: usize,
    timing: Timing,
    key: NoteKey,
    policy: UnterminatedPolicy,
    open: BTreeMap<(Option<Channel>, Pitch), OpenNote>,
    notes: Vec<Note>,
}

impl NoteResolver {
    /// A resolver for the track at `track`
    pub fn new(track: usize, timing: Timing, config: &ParseConfig) -> Self {
        Self {
            track,
            timing,
            key: config.note_keying(),
            policy: config.unterminated_policy(),
            open: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    fn key_of(&self, channel: Channel, pitch: Pitch) -> (Option<Channel>, Pitch) {
        match self.key {
            NoteKey::Pitch => (None, pitch),
            NoteKey::ChannelAndPitch => (Some(channel), pitch),
        }
    }

    /// Feed one channel voice message found at absolute tick `ticks`.
    ///
    /// Messages other than note starts and releases are ignored.
    pub fn handle(
        &mut self,
        message: &ChannelVoiceMessage,
        ticks: u64,
        warnings: &mut Vec<ParseWarning>,
    ) {
        let channel = message.channel();

        if let Some((pitch, velocity)) = message.note_start() {
            let key = self.key_of(channel, pitch);
            if self.open.contains_key(&key) {
                tracing::debug!(
                    track = self.track,
                    %pitch,
                    %channel,
                    ticks,
                    "note already sounding, ignoring note on"
                );
                return;
            }
            self.open.insert(
                key,
                OpenNote {
                    pitch,
                    velocity,
                    channel,
                    start_ticks: ticks,
                },
            );
        } else if let Some(pitch) = message.note_release() {
            let key = self.key_of(channel, pitch);
            match self.open.remove(&key) {
                Some(open) => self.close(open, ticks),
                None => ParseWarning::UnmatchedNoteOff {
                    track: self.track,
                    channel,
                    pitch,
                    ticks,
                }
                .report(warnings),
            }
        }
    }

    fn close(&mut self, open: OpenNote, end_ticks: u64) {
        let start = self.timing.ticks_to_beats(open.start_ticks);
        let end = self.timing.ticks_to_beats(end_ticks);
        self.notes.push(Note {
            pitch: open.pitch,
            velocity: open.velocity,
            channel: open.channel,
            start_ticks: open.start_ticks,
            end_ticks,
            absolute_start_time: start,
            duration: end - start,
        });
    }

    /// Number of notes currently sounding
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Settle notes still open at `end_ticks` and return every note,
    /// ordered by start tick.
    pub fn finish(mut self, end_ticks: u64, warnings: &mut Vec<ParseWarning>) -> Vec<Note> {
        let mut unterminated: Vec<OpenNote> =
            core::mem::take(&mut self.open).into_values().collect();
        unterminated.sort_by_key(|n| n.start_ticks);

        for open in unterminated {
            ParseWarning::UnterminatedNote {
                track: self.track,
                channel: open.channel,
                pitch: open.pitch,
                start_ticks: open.start_ticks,
            }
            .report(warnings);
            if self.policy == UnterminatedPolicy::CloseAtTrackEnd {
                self.close(open, end_ticks);
            }
        }

        self.notes.sort_by_key(|n| n.start_ticks);
        self.notes
    }
}

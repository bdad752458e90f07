use alloc::vec::Vec;

use crate::{
    UMicros,
    file::{Tempo, Timing, Track},
};

/// One Set Tempo event and where it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempoChange {
    /// Zero-based index of the track holding the event
    pub track: usize,
    /// Absolute tick of the event within its track
    pub ticks: u64,
    /// The new tempo
    pub tempo: Tempo,
}

#[doc = r#"
Every tempo change in a file.

Changes are kept twice: in the order the parser met them, and sorted by
tick for converting positions to real time. The file's tempo is the last
change in parse order, which is not always the latest one in time.

Before the first change the tempo is 120 BPM.
"#]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TempoMap {
    in_file_order: Vec<TempoChange>,
    by_tick: Vec<TempoChange>,
}

impl TempoMap {
    pub(crate) fn record_track(&mut self, index: usize, track: &Track<'_>) {
        for (ticks, tempo) in track.tempo_changes() {
            self.push(TempoChange {
                track: index,
                ticks,
                tempo,
            });
        }
    }

    fn push(&mut self, change: TempoChange) {
        self.in_file_order.push(change);
        self.by_tick.push(change);
    }

    /// Order the timeline by tick once every change is recorded.
    ///
    /// The sort is stable, so a later change wins a tie.
    pub(crate) fn sort_timeline(&mut self) {
        self.by_tick.sort_by_key(|c| c.ticks);
    }

    /// True if the file has no Set Tempo event
    pub fn is_empty(&self) -> bool {
        self.in_file_order.is_empty()
    }

    /// Changes in the order they were parsed
    pub fn changes(&self) -> &[TempoChange] {
        &self.in_file_order
    }

    /// Changes sorted by tick
    pub fn timeline(&self) -> &[TempoChange] {
        &self.by_tick
    }

    /// The last tempo parsed
    pub fn last(&self) -> Option<Tempo> {
        self.in_file_order.last().map(|c| c.tempo)
    }

    /// The tempo in effect at `ticks`
    pub fn tempo_at(&self, ticks: u64) -> Tempo {
        self.by_tick
            .iter()
            .take_while(|c| c.ticks <= ticks)
            .last()
            .map_or_else(Tempo::default, |c| c.tempo)
    }

    /// Real time of an absolute tick position.
    ///
    /// With SMPTE timing ticks have a fixed length and tempo is ignored.
    /// A zero division is treated as one tick per quarter note or per second.
    pub fn micros_at(&self, ticks: u64, timing: &Timing) -> UMicros {
        let tpqn = match timing {
            Timing::TicksPerQuarterNote(tpqn) => f64::from((*tpqn).max(1)),
            Timing::Smpte(smpte) => {
                let per_second = u128::from(smpte.ticks_per_second().max(1));
                let micros = u128::from(ticks) * 1_000_000 / per_second;
                return UMicros::new(u64::try_from(micros).unwrap_or(u64::MAX));
            }
        };

        let mut micros = 0.;
        let mut from = 0;
        let mut tempo = Tempo::default();
        for change in self.by_tick.iter().take_while(|c| c.ticks <= ticks) {
            micros += segment_micros(change.ticks - from, tempo, tpqn);
            from = change.ticks;
            tempo = change.tempo;
        }
        micros += segment_micros(ticks - from, tempo, tpqn);

        UMicros::from_f64(micros)
    }
}

fn segment_micros(ticks: u64, tempo: Tempo, tpqn: f64) -> f64 {
    ticks as f64 * f64::from(tempo.micros_per_quarter_note()) / tpqn
}

#[cfg(test)]
fn map_of(changes: &[(usize, u64, u32)]) -> TempoMap {
    let mut map = TempoMap::default();
    for &(track, ticks, micros) in changes {
        map.push(TempoChange {
            track,
            ticks,
            tempo: Tempo::new(micros).unwrap(),
        });
    }
    map.sort_timeline();
    map
}

#[test]
fn default_tempo_before_any_change() {
    let map = TempoMap::default();
    let timing = Timing::from_division(480);
    assert!(map.is_empty());
    assert_eq!(map.last(), None);
    assert_eq!(map.micros_at(480, &timing), UMicros::new(500_000));
}

#[test]
fn micros_across_a_tempo_change() {
    let map = map_of(&[(0, 0, 500_000), (0, 960, 250_000)]);
    let timing = Timing::from_division(480);

    assert_eq!(map.micros_at(960, &timing), UMicros::new(1_000_000));
    assert_eq!(map.micros_at(1440, &timing), UMicros::new(1_250_000));
    assert_eq!(map.tempo_at(959).micros_per_quarter_note(), 500_000);
    assert_eq!(map.tempo_at(960).micros_per_quarter_note(), 250_000);
}

#[test]
fn last_is_parse_order_not_time_order() {
    let map = map_of(&[(0, 960, 400_000), (1, 0, 600_000)]);
    assert_eq!(map.last().unwrap().micros_per_quarter_note(), 600_000);
    assert_eq!(map.timeline()[0].track, 1);
    assert_eq!(map.tempo_at(2000).micros_per_quarter_note(), 400_000);
}

#[test]
fn later_change_wins_a_tie() {
    let map = map_of(&[(0, 480, 400_000), (1, 480, 300_000), (0, 0, 600_000)]);
    let ticks: Vec<u64> = map.timeline().iter().map(|c| c.ticks).collect();
    assert_eq!(ticks, [0, 480, 480]);
    assert_eq!(map.tempo_at(480).micros_per_quarter_note(), 300_000);
}

#[test]
fn zero_division_counts_plain_ticks() {
    let map = TempoMap::default();
    assert_eq!(
        map.micros_at(3, &Timing::from_division(0)),
        UMicros::new(1_500_000)
    );
    let no_frames = Timing::from_division(i16::from_be_bytes([0xE8, 0]));
    assert_eq!(map.micros_at(3, &no_frames), UMicros::new(3_000_000));
}

#[test]
fn smpte_ticks_ignore_tempo() {
    let map = map_of(&[(0, 0, 1_000_000)]);
    let timing = Timing::from_division(i16::from_be_bytes([0xE7, 40]));
    assert_eq!(map.micros_at(1000, &timing), UMicros::new(1_000_000));
}

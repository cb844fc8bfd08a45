//! Leftover space distribution and track offsets.

use tracing::trace;

use crate::track::{Track, TrackPolicy};

/// Round half toward positive infinity.
pub(crate) fn round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Total extent of a run of tracks including the gaps between them.
pub(crate) fn span(tracks: &[Track], spacing: f64) -> f64 {
    if tracks.is_empty() {
        return 0.0;
    }
    let sizes: f64 = tracks.iter().map(|track| track.size).sum();
    sizes + spacing * (tracks.len() - 1) as f64
}

/// Grow tracks into `extent` and assign each its start offset.
///
/// `fixed` and `min` tracks keep their size. When space is left over it goes to flex
/// tracks in proportion to their factors or, if there are none, evenly to `auto` tracks.
/// Each grown size is rounded on its own, so the sum may drift from `extent` by up to one
/// unit per grown track. No space left means no growth; overflow is not corrected.
pub(crate) fn distribute(tracks: &mut [Track], extent: f64, spacing: f64, origin: f64) {
    let mut available = extent;
    let mut flex_total = 0.0;
    let mut auto_count = 0usize;

    for track in tracks.iter() {
        match track.policy {
            TrackPolicy::Fixed | TrackPolicy::Min => available -= track.size,
            TrackPolicy::Auto => {
                available -= track.size;
                auto_count += 1;
            }
            TrackPolicy::Flex { factor } => flex_total += factor,
        }
    }

    if !tracks.is_empty() {
        available -= spacing * (tracks.len() - 1) as f64;
    }

    if available > 0.0 {
        if flex_total > 0.0 {
            for track in tracks.iter_mut() {
                if let TrackPolicy::Flex { factor } = track.policy {
                    track.size = round(available * (factor / flex_total));
                }
            }
            trace!("Distributed {} across flex tracks (total factor {})", available, flex_total);
        } else if auto_count > 0 {
            let share = round(available / auto_count as f64);
            for track in tracks.iter_mut() {
                if track.policy == TrackPolicy::Auto {
                    track.size += share;
                }
            }
            trace!("Distributed {} across {} auto tracks", available, auto_count);
        }
    } else {
        trace!("No space to distribute ({} available)", available);
    }

    let mut start = origin;
    for track in tracks.iter_mut() {
        track.start = start;
        start += track.size + spacing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::TrackSpec;

    fn track(spec: TrackSpec, size: f64) -> Track {
        let mut track = Track::resolve(spec, false);
        track.size = size;
        track
    }

    fn sizes(tracks: &[Track]) -> Vec<f64> {
        tracks.iter().map(|t| t.size).collect()
    }

    #[test]
    fn test_round_half_up() {
        assert!((round(2.5) - 3.0).abs() < 0.001);
        assert!((round(-2.5) - -2.0).abs() < 0.001);
        assert!((round(2.49) - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_flex_takes_leftover_by_factor() {
        let mut tracks = vec![
            track(TrackSpec::fixed(50.0), 50.0),
            track(TrackSpec::flex(1.0), 0.0),
            track(TrackSpec::flex(3.0), 0.0),
        ];
        distribute(&mut tracks, 250.0, 0.0, 0.0);
        assert_eq!(sizes(&tracks), vec![50.0, 50.0, 150.0]);
        assert!((span(&tracks, 0.0) - 250.0).abs() < 0.001);
    }

    #[test]
    fn test_flex_wins_over_auto() {
        let mut tracks = vec![track(TrackSpec::auto(), 30.0), track(TrackSpec::max(), 10.0)];
        distribute(&mut tracks, 100.0, 0.0, 0.0);
        assert_eq!(sizes(&tracks), vec![30.0, 70.0]);
    }

    #[test]
    fn test_auto_grows_evenly_min_does_not() {
        let mut tracks = vec![
            track(TrackSpec::auto(), 10.0),
            track(TrackSpec::min(), 10.0),
            track(TrackSpec::auto(), 20.0),
        ];
        distribute(&mut tracks, 100.0, 5.0, 0.0);
        // 100 - 40 - 2 * 5 = 50 leftover, 25 to each auto track
        assert_eq!(sizes(&tracks), vec![35.0, 10.0, 45.0]);
        assert!((span(&tracks, 5.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_no_growth_without_space() {
        let mut tracks = vec![track(TrackSpec::auto(), 80.0), track(TrackSpec::flex(1.0), 40.0)];
        distribute(&mut tracks, 60.0, 0.0, 0.0);
        assert_eq!(sizes(&tracks), vec![80.0, 40.0]);
    }

    #[test]
    fn test_rounding_drift_is_not_corrected() {
        let mut tracks = vec![
            track(TrackSpec::flex(1.0), 0.0),
            track(TrackSpec::flex(1.0), 0.0),
            track(TrackSpec::flex(1.0), 0.0),
        ];
        distribute(&mut tracks, 100.0, 0.0, 0.0);
        // 33.33 rounds down three times
        assert_eq!(sizes(&tracks), vec![33.0, 33.0, 33.0]);
        assert!((span(&tracks, 0.0) - 99.0).abs() < 0.001);

        let mut tracks = vec![track(TrackSpec::auto(), 0.0), track(TrackSpec::auto(), 0.0)];
        distribute(&mut tracks, 101.0, 0.0, 0.0);
        // 50.5 rounds up twice
        assert_eq!(sizes(&tracks), vec![51.0, 51.0]);
    }

    #[test]
    fn test_offsets_from_origin() {
        let mut tracks = vec![track(TrackSpec::fixed(10.0), 10.0), track(TrackSpec::fixed(20.0), 20.0)];
        distribute(&mut tracks, 30.0, 4.0, 100.0);
        assert!((tracks[0].start - 100.0).abs() < 0.001);
        assert!((tracks[1].start - 114.0).abs() < 0.001);
        assert!((tracks[1].end() - 134.0).abs() < 0.001);
    }

    #[test]
    fn test_empty_axis() {
        let mut tracks: Vec<Track> = Vec::new();
        distribute(&mut tracks, 100.0, 10.0, 0.0);
        assert!((span(&tracks, 10.0) - 0.0).abs() < 0.001);
    }
}

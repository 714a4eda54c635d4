//! Property-based tests for the music player
//!
//! Uses proptest to verify invariants across many random inputs.

use keepsake_core::{
    ids,
    testing::{MockAudio, RecordingSurface},
    Rect,
};
use keepsake_playback::{PlaybackConfig, PlaybackController, Playlist, Track};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[A-Za-z ]{1,30}",                       // title
        proptest::option::of("[A-Za-z ]{1,20}"), // artist
        "[a-z]{1,10}",                           // file stem
    )
        .prop_map(|(title, artist, stem)| Track {
            title,
            artist,
            source: format!("music/{}.mp3", stem),
        })
}

fn player(
    tracks: Vec<Track>,
    bar: Rect,
) -> (PlaybackController<RecordingSurface, MockAudio>, MockAudio) {
    let surface = RecordingSurface::new();
    surface.set_rect(&ids::PROGRESS_BAR, bar);
    let audio = MockAudio::new();
    let player = PlaybackController::new(
        Playlist::new(tracks).unwrap(),
        audio.clone(),
        surface,
        &PlaybackConfig::default(),
    );
    (player, audio)
}

// ===== Property Tests =====

proptest! {
    /// Property: next/previous keep the index in range and cancel out
    #[test]
    fn navigation_stays_in_range(
        tracks in prop::collection::vec(arbitrary_track(), 1..10),
        ops in prop::collection::vec(any::<bool>(), 0..50),
    ) {
        let len = tracks.len();
        let (mut player, _) = player(tracks, Rect::new(0.0, 100.0));
        let mut expected: i64 = 0;

        for forward in ops {
            if forward {
                player.next_track();
                expected += 1;
            } else {
                player.previous_track();
                expected -= 1;
            }
            prop_assert!(player.current_track_index() < len);
        }

        prop_assert_eq!(player.current_track_index() as i64, expected.rem_euclid(len as i64));
    }

    /// Property: committed seeks land within [0, duration]
    #[test]
    fn seek_position_within_duration(
        left in -500.0f64..500.0,
        width in 1.0f64..1000.0,
        x in -2000.0f64..2000.0,
        duration in 0.5f64..3600.0,
    ) {
        let (mut player, audio) = player(vec![Track::new("t", "t.mp3")], Rect::new(left, width));
        audio.set_duration(duration);

        player.click_bar(x);

        let seeks = audio.seeks();
        prop_assert_eq!(seeks.len(), 1);
        prop_assert!(seeks[0] >= 0.0 && seeks[0] <= duration);
        let fraction = player.seek_bar().fraction();
        prop_assert!((0.0..=1.0).contains(&fraction));
    }

    /// Property: any drag gesture seeks exactly once, at the release point
    #[test]
    fn drag_seeks_exactly_once(
        moves in prop::collection::vec(0.0f64..400.0, 0..20),
        release in 0.0f64..400.0,
    ) {
        let (mut player, audio) = player(vec![Track::new("t", "t.mp3")], Rect::new(0.0, 400.0));
        audio.set_duration(400.0);

        player.begin_drag();
        for x in moves {
            player.update_drag_position(x);
        }
        player.end_drag(release);

        let seeks = audio.seeks();
        prop_assert_eq!(seeks.len(), 1);
        prop_assert!((seeks[0] - release).abs() < 1e-9);
    }
}

//! Fixed playlist with a cyclic cursor

use crate::error::{PlaybackError, Result};
use crate::types::Track;

/// Ordered, non-empty track list with a current position
///
/// The track list is fixed once built; only the cursor moves.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
}

impl Playlist {
    /// Create a playlist positioned on the first track
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }
        Ok(Self { tracks, current: 0 })
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false for a built playlist
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Current track
    pub fn current(&self) -> &Track {
        &self.tracks[self.current]
    }

    /// Current index
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Move the cursor
    pub fn select(&mut self, index: usize) -> Result<&Track> {
        if index >= self.tracks.len() {
            return Err(PlaybackError::IndexOutOfBounds {
                index,
                len: self.tracks.len(),
            });
        }
        self.current = index;
        Ok(&self.tracks[index])
    }

    /// Index after the current one, wrapping to 0
    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.tracks.len()
    }

    /// Index before the current one, wrapping to the last track
    pub fn previous_index(&self) -> usize {
        let len = self.tracks.len();
        (self.current + len - 1) % len
    }
}

/// The three bundled tracks the widget ships with
pub fn default_tracks() -> Vec<Track> {
    vec![
        Track::new("After Dark lofi", "music/after dark.mp3").with_artist("Mr.kitty"),
        Track::new("And So It Begins", "music/and so it begins.mp3").with_artist("Artist 2"),
        Track::new("Space Aquarium lofi", "music/space aquarium.mp3").with_artist("Artist 3"),
    ]
}

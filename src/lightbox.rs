// SPDX-License-Identifier: MPL-2.0
//! Modal lightbox navigator.
//!
//! The lightbox walks the cards that were visible at the moment it opened.
//! That visible set is snapshotted once per session and never re-read, so
//! navigation is stable even if the gallery were refiltered behind the
//! overlay. Closing discards the snapshot; reopening takes a fresh one.

use crate::gallery;
use crate::portfolio::Card;

/// Lightbox session state. While `Open`, `cursor` always indexes into
/// `visible_set`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Closed,
    Open {
        cursor: usize,
        /// Card indices that were visible at open time, in card order.
        visible_set: Vec<usize>,
    },
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self, State::Open { .. })
    }

    /// Opens on the card at `card_index`, snapshotting the current visible
    /// set. Stays closed when nothing is visible or the pressed card is not
    /// part of the snapshot.
    pub fn open(&mut self, cards: &[Card], card_index: usize) {
        let visible_set = gallery::visible_indices(cards);
        if visible_set.is_empty() {
            return;
        }
        let Some(cursor) = visible_set.iter().position(|&index| index == card_index) else {
            return;
        };
        *self = State::Open {
            cursor,
            visible_set,
        };
    }

    pub fn close(&mut self) {
        *self = State::Closed;
    }

    /// Steps to the previous image, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if let State::Open {
            cursor,
            visible_set,
        } = self
        {
            *cursor = if *cursor == 0 {
                visible_set.len() - 1
            } else {
                *cursor - 1
            };
        }
    }

    /// Steps to the next image, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if let State::Open {
            cursor,
            visible_set,
        } = self
        {
            *cursor = if *cursor == visible_set.len() - 1 {
                0
            } else {
                *cursor + 1
            };
        }
    }

    /// Card index under the cursor.
    pub fn current(&self) -> Option<usize> {
        match self {
            State::Closed => None,
            State::Open {
                cursor,
                visible_set,
            } => visible_set.get(*cursor).copied(),
        }
    }

    /// One-based position and session total, for the "n / m" counter.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            State::Closed => None,
            State::Open {
                cursor,
                visible_set,
            } => Some((cursor + 1, visible_set.len())),
        }
    }
}

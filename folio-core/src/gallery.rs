//! The gallery state controller.
//!
//! The rendering surface lays the items out three times in a row and slides
//! across the strip. Here the strip is only index arithmetic: position `i`
//! of the tripled strip is item `i % N`, and `current_index` always stays in
//! `[0, 2N]`. After each transition settles it is pulled back into the middle
//! copy `[N, 2N)`, which shows the same items, so the surface can jump there
//! without a visible change.
//!
//! The controller never sleeps. An accepted `navigate` arms a settle deadline;
//! the owner's event loop calls `tick` once that deadline has passed.

use std::time::{Duration, Instant};

use crate::config::GalleryConfig;
use crate::model::Item;
use crate::observer::{Observers, SubscriptionId};
use crate::{GalleryError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// What subscribers receive on every state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryView {
    pub current_index: usize,
    pub item_count: usize,
    pub is_transitioning: bool,
}

#[derive(Debug)]
pub struct GalleryController {
    items: Vec<Item>,
    current_index: usize,
    is_transitioning: bool,
    transition: Duration,
    settle_at: Option<Instant>,
    observers: Observers<GalleryView>,
}

impl GalleryController {
    /// Fails with `InvalidArgument` when `items` is empty.
    pub fn new(items: Vec<Item>, config: &GalleryConfig) -> Result<Self> {
        if items.is_empty() {
            return Err(GalleryError::InvalidArgument(
                "gallery needs at least one item".to_string(),
            ));
        }

        let n = items.len();
        tracing::debug!("Gallery initialized with {} items", n);

        Ok(Self {
            items,
            current_index: n,
            is_transitioning: false,
            transition: config.transition(),
            settle_at: None,
            observers: Observers::new(),
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// When the running transition is due to settle, if one is running.
    pub fn settle_deadline(&self) -> Option<Instant> {
        self.settle_at
    }

    pub fn view(&self) -> GalleryView {
        GalleryView {
            current_index: self.current_index,
            item_count: self.items.len(),
            is_transitioning: self.is_transitioning,
        }
    }

    // ────────────────────────────────────────────────────────────────
    // Tripled strip
    // ────────────────────────────────────────────────────────────────

    pub fn tripled_len(&self) -> usize {
        self.items.len() * 3
    }

    /// Item at a position of the tripled strip.
    pub fn item_at(&self, position: usize) -> Option<&Item> {
        if position >= self.tripled_len() {
            return None;
        }
        self.items.get(position % self.items.len())
    }

    /// The whole tripled strip, without copying anything.
    pub fn strip(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().cycle().take(self.tripled_len())
    }

    /// `page_size` consecutive items starting at the current position.
    pub fn window(&self, page_size: usize) -> Vec<&Item> {
        let n = self.items.len();
        (0..page_size)
            .map(|k| &self.items[(self.current_index + k) % n])
            .collect()
    }

    /// Horizontal translate (percent of the viewport) for the strip.
    pub fn offset_percent(&self, page_size: usize) -> f64 {
        -(self.current_index as f64) * 100.0 / page_size.max(1) as f64
    }

    // ────────────────────────────────────────────────────────────────
    // Navigation
    // ────────────────────────────────────────────────────────────────

    pub fn navigate(&mut self, direction: Direction) -> bool {
        self.navigate_at(direction, Instant::now())
    }

    /// Returns false when the call was dropped because a transition is
    /// still running. Dropped calls are not queued.
    pub fn navigate_at(&mut self, direction: Direction, now: Instant) -> bool {
        if self.is_transitioning {
            tracing::debug!("Navigation {:?} dropped: transition in progress", direction);
            return false;
        }

        self.is_transitioning = true;
        self.current_index = match direction {
            Direction::Previous => self.current_index - 1,
            Direction::Next => self.current_index + 1,
        };
        self.settle_at = Some(now + self.transition);

        self.observers.notify(&self.view());
        true
    }

    /// Settle if the deadline has passed. Returns true if it settled.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.settle_at {
            Some(deadline) if now >= deadline => self.settle(),
            _ => false,
        }
    }

    /// End the running transition right away. Returns false if none was running.
    pub fn settle(&mut self) -> bool {
        if !self.is_transitioning {
            return false;
        }

        let n = self.items.len();
        self.is_transitioning = false;
        self.settle_at = None;

        if self.current_index < n {
            self.current_index += n;
        } else if self.current_index >= 2 * n {
            self.current_index -= n;
        }

        self.observers.notify(&self.view());
        true
    }

    // ────────────────────────────────────────────────────────────────
    // Subscribers
    // ────────────────────────────────────────────────────────────────

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&GalleryView) + Send + Sync + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}

//! Id-window paging used by the demo consumer
//!
//! A window of consecutive message ids grows by one page toward older ids
//! when the top region is revealed and toward newer ids for the bottom one.

use crate::config::PagingConfig;
use crate::reveal::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    from: i64,
    to: i64,
    min_id: i64,
    max_id: i64,
    page_size: i64,
}

impl PageWindow {
    pub fn new(config: &PagingConfig) -> Self {
        let min_id = config.min_id.unwrap_or(i64::MIN);
        let max_id = config.max_id.unwrap_or(i64::MAX).max(min_id);
        let from = config.initial_from.clamp(min_id, max_id);
        let to = config.initial_to.clamp(from, max_id);
        Self {
            from,
            to,
            min_id,
            max_id,
            page_size: config.page_size.max(1),
        }
    }

    pub fn from_id(&self) -> i64 {
        self.from
    }

    pub fn to_id(&self) -> i64 {
        self.to
    }

    pub fn len(&self) -> usize {
        (self.to - self.from + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.to < self.from
    }

    pub fn has_more_older(&self) -> bool {
        self.from > self.min_id
    }

    pub fn has_more_newer(&self) -> bool {
        self.to < self.max_id
    }

    /// Whether the region in `direction` can still produce data
    pub fn has_more(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.has_more_older(),
            Direction::Bottom => self.has_more_newer(),
        }
    }

    /// The window after loading one page toward `direction`
    pub fn expanded(&self, direction: Direction) -> Self {
        let mut next = *self;
        match direction {
            Direction::Top => {
                next.from = self.from.saturating_sub(self.page_size).max(self.min_id);
            }
            Direction::Bottom => {
                next.to = self.to.saturating_add(self.page_size).min(self.max_id);
            }
        }
        next
    }

    /// Position of `id` within the window
    pub fn index_of(&self, id: i64) -> Option<usize> {
        (self.from..=self.to)
            .contains(&id)
            .then(|| (id - self.from) as usize)
    }

    pub fn ids(&self) -> impl Iterator<Item = i64> {
        self.from..=self.to
    }

    pub fn items(&self) -> Vec<String> {
        self.ids().map(item_label).collect()
    }
}

pub fn item_label(id: i64) -> String {
    format!("message id={}", id)
}

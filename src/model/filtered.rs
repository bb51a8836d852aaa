//! Filtered views
//!
//! A [`FilteredList`] owns one entity collection together with the predicate
//! currently installed by consumers. Every mutation re-evaluates the predicate
//! before returning, so a view is never observed stale.

use std::fmt;

/// Predicate installed on a view.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Show-all predicate.
pub fn show_all<T: 'static>() -> Predicate<T> {
    Box::new(|_: &T| true)
}

/// Insertion-ordered collection with a derived, predicate-filtered projection.
pub struct FilteredList<T: 'static> {
    items: Vec<T>,
    predicate: Predicate<T>,
    visible: Vec<usize>,
}

impl<T: 'static> FilteredList<T> {
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    pub fn from_items(items: Vec<T>) -> Self {
        let mut list = Self {
            items,
            predicate: show_all(),
            visible: Vec::new(),
        };
        list.refresh();
        list
    }

    /// Backing collection, in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, f: impl Fn(&T) -> bool) -> Option<usize> {
        self.items.iter().position(f)
    }

    pub fn find(&self, f: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|&item| f(item))
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.refresh();
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.refresh();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.refresh();
    }

    /// Install a predicate and re-evaluate the view.
    pub fn set_predicate(&mut self, predicate: Predicate<T>) {
        self.predicate = predicate;
        self.refresh();
    }

    /// Items passing the current predicate, in insertion order.
    pub fn visible(&self) -> impl Iterator<Item = &T> {
        self.visible.iter().map(move |&i| &self.items[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    fn refresh(&mut self) {
        let predicate = &self.predicate;
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| predicate(item).then_some(i))
            .collect();
    }
}

impl<T: 'static> Default for FilteredList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for FilteredList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredList")
            .field("items", &self.items)
            .field("visible", &self.visible)
            .finish()
    }
}

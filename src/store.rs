//! Versioned store of values with a movable "current" cursor.
//!
//! The store is append-only: new slots are pushed at the end and become
//! current, while earlier versions stay available for inspection.

#[derive(Debug, Clone)]
pub struct Store<T> {
    items: Vec<T>,
    /// Index of the current item, `None` while the store is empty.
    current: Option<usize>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Moves the cursor to an existing slot.
    pub fn set_current_index(&mut self, index: usize) {
        assert!(
            index < self.items.len(),
            "Index {} is not in the store of size {}",
            index,
            self.items.len()
        );
        self.current = Some(index);
    }

    /// The current item, or `None` if the store is empty.
    pub fn current(&self) -> Option<&T> {
        self.current.map(|index| &self.items[index])
    }

    /// Mutable access to the current item, or `None` if the store is empty.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.current {
            Some(index) => Some(&mut self.items[index]),
            None => None,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Appends `value` as a new slot and makes it current. Returns its index.
    ///
    /// This is the by-value form of [`Store::extend`].
    pub fn push(&mut self, value: T) -> usize {
        let index = self.items.len();
        self.items.push(value);
        self.current = Some(index);
        index
    }

    /// All versions, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.current = None;
    }
}

impl<T: Default> Store<T> {
    /// Appends a default-initialized slot, makes it current and returns it.
    pub fn extend(&mut self) -> &mut T {
        let index = self.push(T::default());
        &mut self.items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_empty() {
        let store: Store<u32> = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.current_index(), None);
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_extend() {
        let mut store: Store<u32> = Store::default();
        *store.extend() = 5;
        assert_eq!(store.current_index(), Some(0));
        assert_eq!(store.current(), Some(&5));

        let slot = store.extend();
        assert_eq!(*slot, 0);
        *slot = 7;
        assert_eq!(store.len(), 2);
        assert_eq!(store.current_index(), Some(1));
        assert_eq!(store.iter().copied().collect::<Vec<_>>(), vec![5, 7]);
    }

    #[test]
    fn test_current_mut() {
        let mut store = Store::new();
        assert!(store.current_mut().is_none());
        store.push(1);
        if let Some(value) = store.current_mut() {
            *value += 10;
        }
        assert_eq!(store.current(), Some(&11));
    }

    #[test]
    fn test_move_cursor() {
        let mut store = Store::new();
        store.push("a");
        store.push("b");
        store.set_current_index(0);
        assert_eq!(store.current(), Some(&"a"));
        // Pushing always makes the new slot current
        store.push("c");
        assert_eq!(store.current_index(), Some(2));
        assert_eq!(store.get(1), Some(&"b"));
    }

    #[test]
    #[should_panic(expected = "not in the store")]
    fn test_move_cursor_out_of_range() {
        let mut store: Store<u8> = Store::new();
        store.set_current_index(0);
    }

    #[test]
    fn test_clear() {
        let mut store = Store::new();
        store.push(1);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.current_index(), None);
    }
}

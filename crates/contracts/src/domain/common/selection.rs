use super::RecordId;
use std::collections::BTreeSet;

/// Checked rows of a list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    ids: BTreeSet<RecordId>,
}

impl RowSelection {
    pub fn toggle(&mut self, id: RecordId, checked: bool) {
        if checked {
            self.ids.insert(id);
        } else {
            self.ids.remove(&id);
        }
    }

    /// Header checkbox: (un)select every visible row
    pub fn set_all(&mut self, visible: &[RecordId], checked: bool) {
        for id in visible {
            self.toggle(*id, checked);
        }
    }

    pub fn is_selected(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// True when every visible row is checked; false for an empty page
    pub fn all_selected(&self, visible: &[RecordId]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    pub fn any_selected(&self, visible: &[RecordId]) -> bool {
        visible.iter().any(|id| self.ids.contains(id))
    }

    /// Drop ids that are no longer on screen after a reload
    pub fn retain_visible(&mut self, visible: &[RecordId]) {
        self.ids.retain(|id| visible.contains(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.ids.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_checkbox_states() {
        let visible = [1, 2, 3];
        let mut selection = RowSelection::default();
        assert!(!selection.all_selected(&visible));
        assert!(!selection.all_selected(&[]));

        selection.toggle(2, true);
        assert!(selection.any_selected(&visible));
        assert!(!selection.all_selected(&visible));

        selection.set_all(&visible, true);
        assert!(selection.all_selected(&visible));
        assert_eq!(selection.ids(), vec![1, 2, 3]);

        selection.set_all(&visible, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_retain_visible() {
        let mut selection = RowSelection::default();
        selection.set_all(&[4, 5, 6], true);
        selection.retain_visible(&[5, 6, 7]);
        assert_eq!(selection.ids(), vec![5, 6]);
    }
}

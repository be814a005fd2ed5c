use std::sync::Arc;

use crate::group::{LedGroup, ZIndex};

/// Address of the shared allocation, ignoring trait-object metadata.
#[inline]
pub(crate) fn identity<T: ?Sized>(arc: &Arc<T>) -> *const () {
    Arc::as_ptr(arc).cast::<()>()
}

/// Attached groups in attach order; each instance appears at most once.
#[derive(Default)]
pub(crate) struct GroupRegistry {
    groups: Vec<Arc<dyn LedGroup>>,
}

impl GroupRegistry {
    pub(crate) fn contains(&self, id: *const ()) -> bool {
        self.groups.iter().any(|g| identity(g) == id)
    }

    /// Appends `group`. Returns false if it is already registered.
    pub(crate) fn insert(&mut self, group: Arc<dyn LedGroup>) -> bool {
        if self.contains(identity(&group)) {
            return false;
        }
        self.groups.push(group);
        true
    }

    /// Removes the group with the given identity, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: *const ()) -> Option<Arc<dyn LedGroup>> {
        let index = self.groups.iter().position(|g| identity(g) == id)?;
        Some(self.groups.remove(index))
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Arc<dyn LedGroup>> {
        self.groups.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.len()
    }

    /// Snapshot of the groups in paint order (bottom to top).
    ///
    /// Each z-index is read exactly once, so a concurrent z change cannot make
    /// the comparison inconsistent mid-sort. The sort is stable: equal z keeps
    /// attach order.
    pub(crate) fn paint_order(&self) -> Vec<Arc<dyn LedGroup>> {
        let mut keyed: Vec<(ZIndex, &Arc<dyn LedGroup>)> =
            self.groups.iter().map(|g| (g.z_index(), g)).collect();

        keyed.sort_by_key(|(z, _)| *z);

        keyed.into_iter().map(|(_, g)| g.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::ListLedGroup;

    fn group(name: &str, z: i32) -> Arc<dyn LedGroup> {
        Arc::new(ListLedGroup::new(name).with_z_index(z))
    }

    fn names(groups: &[Arc<dyn LedGroup>]) -> Vec<String> {
        groups.iter().map(|g| g.name().to_string()).collect()
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut reg = GroupRegistry::default();
        let a = group("a", 0);
        assert!(reg.insert(a.clone()));
        assert!(!reg.insert(a.clone()));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn remove_keeps_order() {
        let mut reg = GroupRegistry::default();
        let (a, b, c) = (group("a", 0), group("b", 0), group("c", 0));
        reg.insert(a.clone());
        reg.insert(b.clone());
        reg.insert(c.clone());

        assert!(reg.remove(identity(&b)).is_some());
        assert!(reg.remove(identity(&b)).is_none());
        assert_eq!(names(&reg.paint_order()), ["a", "c"]);
    }

    #[test]
    fn paint_order_sorts_by_z_then_attach_order() {
        let mut reg = GroupRegistry::default();
        reg.insert(group("top", 5));
        reg.insert(group("first-zero", 0));
        reg.insert(group("bottom", -3));
        reg.insert(group("second-zero", 0));

        assert_eq!(
            names(&reg.paint_order()),
            ["bottom", "first-zero", "second-zero", "top"]
        );
    }

    #[test]
    fn identity_ignores_trait_object_metadata() {
        let concrete = Arc::new(ListLedGroup::new("x").with_z_index(ZIndex(1)));
        let erased: Arc<dyn LedGroup> = concrete.clone();
        assert_eq!(identity(&concrete), identity(&erased));
    }
}

//! Element model shared by the algorithm animations and container structures
//!
//! An [`Element`] is a value plus a [`RoleSet`]: a set of mutually-independent
//! presentation tags ([`Role`]) that the renderer turns into colors and labels.
//! Roles carry no algorithmic meaning; every step function and container
//! operation is correct with the role set ignored entirely.

use rustc_hash::FxHashSet;

/// Presentation tag attached to an element.
///
/// Roles are independent of each other; an element may carry several at once
/// (e.g. `Sorted` + `Flash`). The presentation mapper resolves overlaps with a
/// fixed priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// About to be compared this tick
    Comparing,
    /// Just swapped this tick
    Swapping,
    /// In its final sorted position
    Sorted,
    /// Current partition pivot (quick sort)
    Pivot,
    /// Low bound of the active search range
    LeftBound,
    /// High bound of the active search range
    RightBound,
    /// Midpoint probed this iteration
    Mid,
    /// Search target located here
    Found,
    /// Outside the active search range
    Eliminated,
    /// Freshly mutated container slot, cleared after a short delay
    Flash,
}

/// Set of roles on one element.
#[derive(Debug, Clone, Default)]
pub struct RoleSet(FxHashSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        RoleSet(FxHashSet::default())
    }

    pub fn add(&mut self, role: Role) {
        self.0.insert(role);
    }

    pub fn remove(&mut self, role: Role) {
        self.0.remove(&role);
    }

    pub fn has(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A value with its presentation roles.
///
/// Algorithm pages use `Element<i64>`; container pages wrap string values.
/// Position within the owning sequence is semantically significant.
#[derive(Debug, Clone)]
pub struct Element<V> {
    pub value: V,
    pub roles: RoleSet,
}

impl<V> Element<V> {
    pub fn new(value: V) -> Self {
        Element {
            value,
            roles: RoleSet::new(),
        }
    }
}

/// Strip a role from every element in a sequence.
pub fn clear_role<V>(elements: &mut [Element<V>], role: Role) {
    for elem in elements {
        elem.roles.remove(role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_independent() {
        let mut roles = RoleSet::new();
        roles.add(Role::Sorted);
        roles.add(Role::Flash);
        assert!(roles.has(Role::Sorted));
        assert!(roles.has(Role::Flash));

        roles.remove(Role::Flash);
        assert!(roles.has(Role::Sorted));
        assert!(!roles.has(Role::Flash));
    }

    #[test]
    fn clear_role_leaves_other_roles() {
        let mut elems: Vec<Element<i64>> = vec![Element::new(1), Element::new(2)];
        elems[0].roles.add(Role::Comparing);
        elems[0].roles.add(Role::Sorted);
        elems[1].roles.add(Role::Comparing);

        clear_role(&mut elems, Role::Comparing);
        assert!(elems[0].roles.has(Role::Sorted));
        assert!(!elems[0].roles.has(Role::Comparing));
        assert!(elems[1].roles.is_empty());
    }
}

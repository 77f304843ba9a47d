//! Role-to-style mapping
//!
//! A pure lookup from an element's [`RoleSet`] to the color and label the
//! renderer draws. Roles can overlap (a found element was also the mid); the
//! mapping resolves overlaps with a fixed priority, highest first: Found,
//! Mid, Swapping, Comparing, Pivot, LeftBound, RightBound, Flash, Sorted,
//! Eliminated.

use ratatui::style::Color;

use crate::model::{Role, RoleSet};
use crate::ui::theme::DEFAULT_THEME;

/// Render style for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStyle {
    pub color: Color,
    pub label: Option<&'static str>,
}

/// Priority order for overlapping roles.
const PRIORITY: [Role; 10] = [
    Role::Found,
    Role::Mid,
    Role::Swapping,
    Role::Comparing,
    Role::Pivot,
    Role::LeftBound,
    Role::RightBound,
    Role::Flash,
    Role::Sorted,
    Role::Eliminated,
];

fn role_style(role: Role) -> ElementStyle {
    let theme = &DEFAULT_THEME;
    match role {
        Role::Found => style(theme.found, Some("FOUND")),
        Role::Mid => style(theme.mid, Some("MID")),
        Role::Swapping => style(theme.swapping, None),
        Role::Comparing => style(theme.comparing, None),
        Role::Pivot => style(theme.pivot, Some("PIVOT")),
        Role::LeftBound => style(theme.left_bound, Some("LOW")),
        Role::RightBound => style(theme.right_bound, Some("HIGH")),
        Role::Flash => style(theme.flash, None),
        Role::Sorted => style(theme.sorted, None),
        Role::Eliminated => style(theme.eliminated, None),
    }
}

fn style(color: Color, label: Option<&'static str>) -> ElementStyle {
    ElementStyle { color, label }
}

/// Map a role set to its render style. Elements with no roles get the
/// neutral "unsorted" color.
pub fn element_style(roles: &RoleSet) -> ElementStyle {
    for role in PRIORITY {
        if roles.has(role) {
            return role_style(role);
        }
    }
    style(DEFAULT_THEME.unsorted, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roles_use_neutral_color() {
        let style = element_style(&RoleSet::new());
        assert_eq!(style.color, DEFAULT_THEME.unsorted);
        assert!(style.label.is_none());
    }

    #[test]
    fn found_wins_over_mid_and_bounds() {
        let mut roles = RoleSet::new();
        roles.add(Role::Mid);
        roles.add(Role::LeftBound);
        roles.add(Role::Found);
        let style = element_style(&roles);
        assert_eq!(style.label, Some("FOUND"));
        assert_eq!(style.color, DEFAULT_THEME.found);
    }

    #[test]
    fn comparing_wins_over_sorted() {
        let mut roles = RoleSet::new();
        roles.add(Role::Sorted);
        roles.add(Role::Comparing);
        assert_eq!(element_style(&roles).color, DEFAULT_THEME.comparing);
    }
}

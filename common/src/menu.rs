//! System menu model.
//!
//! The system menu holds up to [`MAX_MENU_ITEMS`] custom items. Each item is
//! either a checkmark (value 0 or 1) or an options list (value = selected
//! index). Hosts keep a [`Menu`] behind
//! [`Platform::add_menu_item`](crate::platform::Platform::add_menu_item) and
//! call the application back when the user changes an item.

use core::fmt;

use heapless::Vec;

/// Custom item limit of the system menu.
pub const MAX_MENU_ITEMS: usize = 3;

/// Handle of a registered item.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MenuItemId(u8);

impl MenuItemId {
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }
}

/// Item flavor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuItemKind {
    /// On/off toggle.
    Checkmark,
    /// One of a fixed list of labels.
    Options(&'static [&'static str]),
}

/// A menu item and its current value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MenuItem {
    pub title: &'static str,
    pub kind: MenuItemKind,
    value: usize,
}

impl MenuItem {
    pub const fn checkmark(
        title: &'static str,
        checked: bool,
    ) -> Self {
        Self {
            title,
            kind: MenuItemKind::Checkmark,
            value: checked as usize,
        }
    }

    /// Options item with the first option selected.
    pub const fn options(
        title: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            kind: MenuItemKind::Options(options),
            value: 0,
        }
    }

    #[inline]
    pub const fn value(&self) -> usize { self.value }

    /// Largest valid value.
    const fn max_value(&self) -> usize {
        match self.kind {
            MenuItemKind::Checkmark => 1,
            MenuItemKind::Options(options) => options.len().saturating_sub(1),
        }
    }

    /// Set the value, clamped to the valid range.
    pub const fn set_value(
        &mut self,
        value: usize,
    ) {
        let max = self.max_value();
        self.value = if value > max { max } else { value };
    }

    /// Toggle a checkmark or advance an options item, wrapping at the end.
    pub const fn activate(&mut self) {
        let max = self.max_value();
        self.value = if self.value >= max { 0 } else { self.value + 1 };
    }

    /// Text shown next to the title.
    pub const fn value_label(&self) -> &'static str {
        match self.kind {
            MenuItemKind::Checkmark => {
                if self.value == 0 {
                    "[ ]"
                } else {
                    "[x]"
                }
            }
            MenuItemKind::Options(options) => {
                if options.is_empty() {
                    ""
                } else {
                    options[self.value]
                }
            }
        }
    }
}

/// Menu registration failure.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuError {
    /// All custom item slots are taken.
    Full,
}

impl fmt::Display for MenuError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Full => write!(f, "menu already holds {MAX_MENU_ITEMS} items"),
        }
    }
}

/// Registered custom menu items.
#[derive(Clone, Default, Debug)]
pub struct Menu {
    items: Vec<MenuItem, MAX_MENU_ITEMS>,
}

impl Menu {
    pub const fn new() -> Self { Self { items: Vec::new() } }

    /// Register an item.
    pub fn add(
        &mut self,
        item: MenuItem,
    ) -> Result<MenuItemId, MenuError> {
        let id = MenuItemId(self.items.len() as u8);
        self.items.push(item).map_err(|_| MenuError::Full)?;
        Ok(id)
    }

    pub fn get(
        &self,
        id: MenuItemId,
    ) -> Option<&MenuItem> {
        self.items.get(id.index())
    }

    /// Current value of an item, 0 for unknown handles.
    pub fn value(
        &self,
        id: MenuItemId,
    ) -> usize {
        self.get(id).map_or(0, MenuItem::value)
    }

    /// Set an item's value (clamped). Returns false for unknown handles.
    pub fn set_value(
        &mut self,
        id: MenuItemId,
        value: usize,
    ) -> bool {
        match self.items.get_mut(id.index()) {
            Some(item) => {
                item.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Activate an item as the user would, returning its new value.
    pub fn activate(
        &mut self,
        id: MenuItemId,
    ) -> Option<usize> {
        let item = self.items.get_mut(id.index())?;
        item.activate();
        Some(item.value())
    }

    /// Find an item by title.
    pub fn find(
        &self,
        title: &str,
    ) -> Option<MenuItemId> {
        self.items.iter().position(|item| item.title == title).map(|i| MenuItemId(i as u8))
    }

    /// Iterate over items in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (MenuItemId, &MenuItem)> {
        self.items.iter().enumerate().map(|(i, item)| (MenuItemId(i as u8), item))
    }

    #[inline]
    pub fn len(&self) -> usize { self.items.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Remove every item.
    pub fn clear(&mut self) { self.items.clear(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALES: &[&str] = &["1", "2", "4"];

    #[test]
    fn test_add_until_full() {
        let mut menu = Menu::new();
        assert!(menu.is_empty());
        for title in ["a", "b", "c"] {
            menu.add(MenuItem::checkmark(title, false)).unwrap();
        }
        assert_eq!(menu.len(), MAX_MENU_ITEMS);
        assert_eq!(menu.add(MenuItem::checkmark("d", false)), Err(MenuError::Full));
    }

    #[test]
    fn test_checkmark_toggle() {
        let mut menu = Menu::new();
        let id = menu.add(MenuItem::checkmark("Invert", false)).unwrap();
        assert_eq!(menu.value(id), 0);
        assert_eq!(menu.activate(id), Some(1));
        assert_eq!(menu.get(id).unwrap().value_label(), "[x]");
        assert_eq!(menu.activate(id), Some(0));
    }

    #[test]
    fn test_options_cycle_and_clamp() {
        let mut menu = Menu::new();
        let id = menu.add(MenuItem::options("Scale", SCALES)).unwrap();
        assert_eq!(menu.activate(id), Some(1));
        assert_eq!(menu.activate(id), Some(2));
        assert_eq!(menu.activate(id), Some(0));

        assert!(menu.set_value(id, 10));
        assert_eq!(menu.value(id), 2);
        assert_eq!(menu.get(id).unwrap().value_label(), "4");
    }

    #[test]
    fn test_find_and_iter() {
        let mut menu = Menu::new();
        menu.add(MenuItem::checkmark("Invert", true)).unwrap();
        let scale = menu.add(MenuItem::options("Scale", SCALES)).unwrap();
        assert_eq!(menu.find("Scale"), Some(scale));
        assert_eq!(menu.find("Flip"), None);

        let titles: std::vec::Vec<_> = menu.iter().map(|(_, item)| item.title).collect();
        assert_eq!(titles, ["Invert", "Scale"]);

        menu.clear();
        assert!(menu.is_empty());
    }

    #[test]
    fn test_unknown_handle() {
        let mut menu = Menu::new();
        let id = MenuItemId(2);
        assert_eq!(menu.value(id), 0);
        assert!(!menu.set_value(id, 1));
        assert_eq!(menu.activate(id), None);
    }
}

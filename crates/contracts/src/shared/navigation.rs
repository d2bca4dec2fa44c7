//! Static sidebar navigation data
//!
//! Process-wide, read-only; the sidebar renders it as an expandable tree.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub items: &'static [NavLink],
}

impl NavItem {
    pub fn has_children(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Workspace shown in the sidebar header switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub name: &'static str,
    pub logo: &'static str,
    pub plan: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: "dashboard",
        title: "Dashboard",
        url: "/",
        icon: "layout-dashboard",
        items: &[],
    },
    NavItem {
        id: "catalogue",
        title: "Catalogue",
        url: "/catalogue",
        icon: "book-open",
        items: &[
            NavLink { title: "Add Product", url: "/catalogue/add" },
            NavLink { title: "All Products", url: "/catalogue" },
            NavLink { title: "Favorites", url: "/catalogue?favorites=true" },
        ],
    },
    NavItem {
        id: "inventory",
        title: "Inventory",
        url: "/inventory",
        icon: "boxes",
        items: &[],
    },
    NavItem {
        id: "orders",
        title: "Orders",
        url: "/orders",
        icon: "box",
        items: &[
            NavLink { title: "Pending Orders", url: "/orders?status=pending" },
            NavLink { title: "Unshipped Orders", url: "/orders?status=unshipped" },
            NavLink { title: "Cancelled Orders", url: "/orders?status=cancelled" },
            NavLink { title: "Completed Orders", url: "/orders?status=completed" },
        ],
    },
    NavItem {
        id: "brands",
        title: "Brands",
        url: "/brands",
        icon: "settings",
        items: &[
            NavLink { title: "My Brands", url: "/brands" },
            NavLink { title: "Add Brand", url: "/brands/add" },
        ],
    },
];

pub const TEAMS: &[Team] = &[
    Team { name: "Acme Inc", logo: "gallery-vertical-end", plan: "Enterprise" },
    Team { name: "Acme Corp.", logo: "audio-waveform", plan: "Startup" },
    Team { name: "Evil Corp.", logo: "command", plan: "Free" },
];

/// Title for a url; child links win over their parent (`/catalogue` is "All Products")
pub fn title_for_url(url: &str) -> Option<&'static str> {
    NAV_ITEMS
        .iter()
        .flat_map(|item| item.items.iter())
        .find(|link| link.url == url)
        .map(|link| link.title)
        .or_else(|| {
            NAV_ITEMS
                .iter()
                .find(|item| item.url == url)
                .map(|item| item.title)
        })
}

/// Top-level item owning a child url
pub fn parent_of(url: &str) -> Option<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .find(|item| item.items.iter().any(|link| link.url == url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique() {
        let mut ids: Vec<_> = NAV_ITEMS.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
    }

    #[test]
    fn test_title_for_url() {
        assert_eq!(title_for_url("/catalogue/add"), Some("Add Product"));
        assert_eq!(title_for_url("/catalogue"), Some("All Products"));
        assert_eq!(title_for_url("/"), Some("Dashboard"));
        assert_eq!(title_for_url("/nowhere"), None);
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("/orders?status=pending").map(|i| i.id), Some("orders"));
        assert_eq!(parent_of("/catalogue/add").map(|i| i.id), Some("catalogue"));
        assert!(parent_of("/inventory").is_none());
    }

    #[test]
    fn test_leaf_items() {
        let leaves: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| !item.has_children())
            .map(|item| item.title)
            .collect();
        assert_eq!(leaves, vec!["Dashboard", "Inventory"]);
        assert_eq!(TEAMS.len(), 3);
        assert_eq!(TEAMS[0].plan, "Enterprise");
    }
}

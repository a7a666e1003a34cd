//! Routing
//!
//! Maps navigation paths onto the storefront's pages and the admin console's sub-views.

/// Admin console section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdminView {
    /// Product management
    #[default]
    Products,

    /// Viewing bookings
    Bookings,

    /// Customer wishlists
    Wishlists,
}

impl AdminView {
    /// Every section, in navigation order.
    pub const ALL: [Self; 3] = [Self::Products, Self::Bookings, Self::Wishlists];

    /// Section shown for `path`: bookings and wishlists by their paths, products otherwise.
    pub fn from_path(path: &str) -> Self {
        if path.contains("/admin/viewBookings") {
            Self::Bookings
        } else if path.contains("/admin/viewWishlist") {
            Self::Wishlists
        } else {
            Self::Products
        }
    }

    /// Canonical path of the section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Products => "/admin/addProducts",
            Self::Bookings => "/admin/viewBookings",
            Self::Wishlists => "/admin/viewWishlist",
        }
    }
}

/// Page a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Public catalog
    Inventory,

    /// Wishlist request form
    Wishlist,

    /// Booking request form
    Booking,

    /// Admin console section
    Admin(AdminView),
}

impl Route {
    /// Resolve `path`, following the `/admin` redirect and sending unknown paths to the
    /// inventory. Query strings and fragments are ignored.
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');

        let mut segments = path.split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some("" | "inventory"), None, None) => Self::Inventory,
            (Some("wishlist"), None, None) => Self::Wishlist,
            (Some("booking"), None, None) => Self::Booking,
            (Some("admin"), None | Some("addProducts"), None) => Self::Admin(AdminView::Products),
            (Some("admin"), Some("viewBookings"), None) => Self::Admin(AdminView::Bookings),
            (Some("admin"), Some("viewWishlist"), None) => Self::Admin(AdminView::Wishlists),
            _ => Self::Inventory,
        }
    }

    /// Canonical path of the page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Inventory => "/",
            Self::Wishlist => "/wishlist",
            Self::Booking => "/booking",
            Self::Admin(view) => view.path(),
        }
    }

    /// Admin section, when the route is inside the admin console.
    #[must_use]
    pub const fn admin_view(self) -> Option<AdminView> {
        match self {
            Self::Admin(view) => Some(view),
            _ => None,
        }
    }
}

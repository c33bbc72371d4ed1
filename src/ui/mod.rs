//! Terminal storefront.
//!
//! A thin presentation layer over the catalog, the selection store and the
//! view composer: header with cart badge, tab bar, product grid and footer.

pub mod app;
pub mod browse;
pub mod events;
pub mod footer;
pub mod grid;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod tabs;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;

use crate::catalog::{Catalog, Product};
use crate::config::UiConfig;
use crate::mvi::{dispatch_mvi, Reducer};
use crate::store::SelectionStore;
use crate::ui::browse::{BrowseIntent, BrowseReducer, BrowseState};
use crate::ui::layout::{grid_columns, layout_regions};
use crate::view::{Tab, ViewComposer};
use ratatui::layout::Rect;

/// Ticks a footer notice stays visible.
const NOTICE_TICKS: u32 = 12;

/// Terminal size assumed until the first resize event arrives.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    text: String,
    ticks_left: u32,
}

/// One shopping session: the catalog, the shopper's selection and the
/// browsing cursor.
pub struct App {
    should_quit: bool,
    size: (u16, u16),
    config: UiConfig,
    catalog: Catalog,
    store: SelectionStore,
    /// Tab and grid cursor (MVI pattern).
    browse: BrowseState,
    notice: Option<Notice>,
}

impl App {
    pub fn new(catalog: Catalog, config: UiConfig) -> Self {
        let store = SelectionStore::new(&catalog);
        Self {
            should_quit: false,
            size: DEFAULT_SIZE,
            config,
            catalog,
            store,
            browse: BrowseState::default(),
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn composer(&self) -> ViewComposer<'_> {
        ViewComposer::new(&self.catalog, &self.store)
    }

    pub fn browse(&self) -> &BrowseState {
        &self.browse
    }

    pub fn tab(&self) -> Tab {
        self.browse.tab
    }

    /// Products listed on the active tab.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.composer().products_for(self.browse.tab)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.visible_products().get(self.browse.selected).copied()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|notice| notice.text.as_str())
    }

    /// Number of card columns for the current terminal width.
    pub fn grid_columns(&self) -> usize {
        let (cols, rows) = self.size;
        let body = layout_regions(Rect::new(0, 0, cols, rows)).body;
        grid_columns(body.width, self.config.max_columns)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
    }

    pub fn on_tick(&mut self) {
        let expired = match &mut self.notice {
            Some(notice) => {
                notice.ticks_left = notice.ticks_left.saturating_sub(1);
                notice.ticks_left == 0
            }
            None => false,
        };
        if expired {
            self.notice = None;
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.dispatch_browse(BrowseIntent::SelectTab { tab });
    }

    pub fn next_tab(&mut self) {
        self.dispatch_browse(BrowseIntent::NextTab);
    }

    pub fn move_selection(&mut self, direction: GridMove) {
        let len = self.visible_products().len();
        let columns = self.grid_columns();
        let intent = match direction {
            GridMove::Left => BrowseIntent::MoveLeft { len },
            GridMove::Right => BrowseIntent::MoveRight { len },
            GridMove::Up => BrowseIntent::MoveUp { columns },
            GridMove::Down => BrowseIntent::MoveDown { len, columns },
        };
        self.dispatch_browse(intent);
    }

    /// Toggle favorite on the card under the cursor.
    pub fn toggle_selected_favorite(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        let (id, name) = (product.id, product.name.clone());

        match self.store.toggle_favorite(id) {
            Ok(true) => self.set_notice(format!("Saved {} to favorites", name)),
            Ok(false) => self.set_notice(format!("Removed {} from favorites", name)),
            Err(err) => self.set_notice(err.to_string()),
        }

        // Unfavoriting on the favorites tab shrinks the list under the cursor.
        let len = self.visible_products().len();
        self.dispatch_browse(BrowseIntent::Clamp { len });
    }

    /// Add one unit of the card under the cursor to the cart.
    pub fn add_selected_to_cart(&mut self) {
        let Some(product) = self.selected_product() else {
            return;
        };
        let (id, name) = (product.id, product.name.clone());

        match self.store.add_to_cart(id) {
            Ok(count) => self.set_notice(format!("Added {} to cart ({} in cart)", name, count)),
            Err(err) => self.set_notice(err.to_string()),
        }
    }

    /// Dispatch an intent to the browse reducer.
    pub fn dispatch_browse(&mut self, intent: BrowseIntent) {
        dispatch_mvi!(self, browse, BrowseReducer, intent);
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            ticks_left: NOTICE_TICKS,
        });
    }
}

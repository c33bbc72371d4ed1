use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::grid::{render_empty_favorites, render_grid};
use crate::ui::header::{page_heading, Header};
use crate::ui::layout::layout_regions;
use crate::ui::tabs::TabBar;
use crate::view::Tab;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);
    let composer = app.composer();
    let badges = composer.badges();

    frame.render_widget(Header::new(badges.cart).widget(regions.header), regions.header);
    frame.render_widget(page_heading(), regions.heading);
    frame.render_widget(TabBar::new(app.tab(), badges).widget(), regions.tabs);

    frame.render_widget(Clear, regions.body);
    let products = composer.products_for(app.tab());
    // An empty favorites tab explains itself; the composer only knows it is empty.
    if products.is_empty() && app.tab() == Tab::Favorites {
        render_empty_favorites(frame, regions.body);
    } else {
        render_grid(
            frame,
            regions.body,
            &products,
            &composer,
            app.browse().selected,
            app.grid_columns(),
        );
    }

    frame.render_widget(Footer::new(app.notice()).widget(regions.footer), regions.footer);
}

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::product::render_product_view;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.state(), app.catalog_label()), header);

    frame.render_widget(Clear, body);
    render_product_view(frame, body, app.state());

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, app.prompt()), footer);
}

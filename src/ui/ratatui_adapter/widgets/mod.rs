//! Ratatui widgets for the reader TUI

use ratatui::layout::Rect;

mod alert_dialog;
mod book_info;
mod help_bar;
mod help_overlay;
mod item_list;
mod reading_pane;
mod status_bar;

pub use alert_dialog::AlertDialog;
pub use book_info::BookInfo;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_list::{ItemList, ListRow};
pub use reading_pane::ReadingPane;
pub use status_bar::StatusBar;

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

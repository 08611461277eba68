mod menu_item_row;

pub use menu_item_row::{MenuItemRow, NewMenuItemRow};

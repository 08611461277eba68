use crate::db::schema::t_menu_item;
use diesel::prelude::*;
use ll_core::menu::MenuItem;

#[derive(Debug, Queryable)]
pub struct MenuItemRow {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = t_menu_item)]
pub struct NewMenuItemRow<'a> {
    pub name: &'a str,
    pub price: f64,
    pub description: &'a str,
    pub image: &'a str,
    pub category: &'a str,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            name: row.name,
            price: row.price,
            description: row.description,
            image: row.image,
            category: row.category,
        }
    }
}

impl<'a> From<&'a MenuItem> for NewMenuItemRow<'a> {
    fn from(item: &'a MenuItem) -> Self {
        NewMenuItemRow {
            name: &item.name,
            price: item.price,
            description: &item.description,
            image: &item.image,
            category: &item.category,
        }
    }
}

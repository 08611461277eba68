use async_trait::async_trait;
use diesel::prelude::*;

use ll_core::menu::MenuItem;
use ll_core::ports::{MenuRepositoryError, MenuRepositoryPort};

use crate::db::{
    models::{MenuItemRow, NewMenuItemRow},
    pool::DbPool,
    schema::t_menu_item::dsl::*,
};

pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepositoryPort for DieselMenuRepository {
    async fn load(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        let rows = t_menu_item
            .order(id.asc())
            .load::<MenuItemRow>(&mut conn)
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn is_empty(&self) -> Result<bool, MenuRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        let count: i64 = t_menu_item
            .count()
            .get_result(&mut conn)
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        Ok(count == 0)
    }

    async fn populate(&self, items: &[MenuItem]) -> Result<(), MenuRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| MenuRepositoryError::Storage(e.to_string()))?;

        let rows: Vec<NewMenuItemRow> = items.iter().map(NewMenuItemRow::from).collect();

        // Guard and insert run in one transaction so a failed populate writes
        // nothing and a double populate cannot interleave.
        let result = conn.transaction::<_, anyhow::Error, _>(|conn| {
            let count: i64 = t_menu_item.count().get_result(conn)?;
            if count > 0 {
                return Err(anyhow::Error::new(MenuRepositoryError::AlreadyPopulated));
            }

            diesel::insert_into(t_menu_item).values(&rows).execute(conn)?;
            Ok(())
        });

        result.map_err(|e| match e.downcast::<MenuRepositoryError>() {
            Ok(repo_err) => repo_err,
            Err(other) => MenuRepositoryError::Storage(other.to_string()),
        })
    }
}

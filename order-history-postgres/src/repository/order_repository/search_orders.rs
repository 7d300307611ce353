use async_trait::async_trait;
use order_history_db::models::order::OrderModel;
use order_history_db::repository::order_filter::{OrderFilter, OrderSort};
use order_history_db::repository::search_orders::SearchOrders;
use sqlx::{Postgres, QueryBuilder};
use std::error::Error;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn search_orders_impl(
        repo: &OrderRepositoryImpl,
        filter: &OrderFilter,
        sort: OrderSort,
        limit: usize,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        if limit == 0 || filter.states.is_empty() {
            return Ok(Vec::new());
        }

        let states: Vec<&str> = filter.states.iter().map(|state| state.as_str()).collect();
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, name, customer_id, state, date_order FROM sale_order WHERE customer_id = ",
        );
        query.push_bind(filter.customer_id);
        query.push(" AND state::text = ANY(");
        query.push_bind(states);
        query.push(")");
        if let Some(date_from) = filter.date_from {
            query.push(" AND date_order >= ");
            query.push_bind(date_from);
        }
        if let Some(exclude_order_id) = filter.exclude_order_id {
            query.push(" AND id <> ");
            query.push_bind(exclude_order_id);
        }
        query.push(" ORDER BY ");
        query.push(sort.sql());
        query.push(", id LIMIT ");
        query.push_bind(i64::try_from(limit).unwrap_or(i64::MAX));

        let rows = query.build().fetch_all(&*repo.pool).await?;
        Self::orders_from_rows(&repo.pool, &rows).await
    }
}

#[async_trait]
impl SearchOrders for OrderRepositoryImpl {
    async fn search_orders(
        &self,
        filter: &OrderFilter,
        sort: OrderSort,
        limit: usize,
    ) -> Result<Vec<OrderModel>, Box<dyn Error + Send + Sync>> {
        Self::search_orders_impl(self, filter, sort, limit).await
    }
}

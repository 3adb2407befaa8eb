//! Stock management service

use crate::{
    error::AppResult,
    models::stock::{StockDetails, StockPayload, StockQuantityAdd, StocksPage},
    pagination::pagination_details,
    repository::Repository,
};

#[derive(Clone)]
pub struct StocksService {
    repository: Repository,
}

impl StocksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Provision a stock row for a book. Books do not get one automatically.
    pub async fn create(&self, stock: StockPayload) -> AppResult<StockDetails> {
        self.repository.books.get_by_id(stock.book_id).await?;
        let created = self.repository.stocks.create(&stock).await?;
        self.repository
            .stocks
            .get_details_by_book_id(created.book_id)
            .await
    }

    pub async fn get(&self, book_id: i32) -> AppResult<StockDetails> {
        self.repository.stocks.get_details_by_book_id(book_id).await
    }

    /// List stocks with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<StocksPage> {
        let count = self.repository.stocks.count().await?;
        let stocks = self.repository.stocks.list_details(skip, limit).await?;

        Ok(StocksPage {
            stocks,
            number_of_stocks: count,
            page: pagination_details(skip, limit, count),
        })
    }

    /// Restock: add copies to an existing stock row. Uses the same atomic
    /// increment as the return path so concurrent restocks and returns never
    /// lose an update.
    pub async fn add_quantity(
        &self,
        book_id: i32,
        add: StockQuantityAdd,
    ) -> AppResult<StockDetails> {
        self.repository
            .stocks
            .add_quantity(book_id, add.stock_quantity)
            .await?;
        self.repository.stocks.get_details_by_book_id(book_id).await
    }
}

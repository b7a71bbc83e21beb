use tickerdash_core::{DashError, NewsArticle, NewsRequest};

use crate::Dashboard;

impl Dashboard {
    /// Fetch recent news for a ticker using the configured card count.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support news.
    pub async fn news(&self, ticker: &str) -> Result<Vec<NewsArticle>, DashError> {
        self.news_with_count(ticker, self.cfg.news_count).await
    }

    /// Fetch recent news for a ticker, newest first, bounded by `count`.
    ///
    /// A provider returning fewer articles than requested is a normal
    /// outcome, not a failure; the result is simply shorter.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support news.
    pub async fn news_with_count(
        &self,
        ticker: &str,
        count: usize,
    ) -> Result<Vec<NewsArticle>, DashError> {
        let ticker = ticker.to_string();
        let req = NewsRequest { count };
        let mut articles = self
            .fetch_single("news", &format!("news for {ticker}"), move |c| {
                c.as_news_provider()?;
                let t = ticker.clone();
                Some(async move {
                    let Some(p) = c.as_news_provider() else {
                        return Err(DashError::connector(
                            c.name(),
                            "missing news capability during call",
                        ));
                    };
                    p.news(&t, req).await
                })
            })
            .await?;
        articles.truncate(count);
        Ok(articles)
    }
}

use tickerdash_core::{CompanyInfo, DashError};

use crate::Dashboard;

impl Dashboard {
    /// Fetch the eight-field fundamentals record for a ticker.
    ///
    /// Behavior: connectors fail with a `Data` error when the upstream
    /// mapping lacks a required field; there is no partial record and no
    /// fallback value.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support profiles.
    pub async fn company_info(&self, ticker: &str) -> Result<CompanyInfo, DashError> {
        let ticker = ticker.to_string();
        self.fetch_single(
            "profile",
            &format!("profile for {ticker}"),
            move |c| {
                c.as_profile_provider()?;
                let t = ticker.clone();
                Some(async move {
                    let Some(p) = c.as_profile_provider() else {
                        return Err(DashError::connector(
                            c.name(),
                            "missing profile capability during call",
                        ));
                    };
                    p.company_info(&t).await
                })
            },
        )
        .await
    }
}

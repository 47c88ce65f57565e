use crate::{Error, LaunchOptions, Result};
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::Page;
use futures::StreamExt;
use jobscout_core::scrape::PageSource;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One browser process with a single tab, owned for the length of a run
///
/// Call [`BrowserSession::finish`] or [`BrowserSession::close`] to shut the
/// browser down. If neither runs (panic, early drop) the CDP handler is
/// aborted on drop and chromiumoxide kills the child process.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: Option<JoinHandle<()>>,
    navigation_timeout: Duration,
    settle_delay: Duration,
}

impl BrowserSession {
    /// Start the browser and open a blank tab
    pub async fn launch(options: &LaunchOptions) -> Result<Self> {
        tracing::info!(
            "Launching Chrome from {} (headless: {})",
            options.chrome_path.display(),
            options.headless
        );

        let (mut browser, mut handler) = Browser::launch(options.to_config()?).await?;

        // The handler has to be polled for any CDP command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                handler_task.abort();
                return Err(e.into());
            }
        };

        tracing::debug!("Browser session ready");

        Ok(Self {
            browser,
            page,
            handler_task: Some(handler_task),
            navigation_timeout: options.navigation_timeout,
            settle_delay: options.settle_delay,
        })
    }

    /// Navigate the tab and give scripts time to render the listings
    pub async fn navigate(&mut self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", url);

        tokio::time::timeout(self.navigation_timeout, self.page.goto(url))
            .await
            .map_err(|_| Error::Timeout {
                url: url.to_string(),
                secs: self.navigation_timeout.as_secs(),
            })??;

        tokio::time::sleep(self.settle_delay).await;
        Ok(())
    }

    /// Current DOM serialized as HTML
    pub async fn content(&self) -> Result<String> {
        Ok(self.page.content().await?)
    }

    /// Close the browser and wait for the process to exit
    pub async fn close(mut self) -> Result<()> {
        tracing::debug!("Closing browser");

        let closed = self.browser.close().await;
        let waited = self.browser.wait().await;

        if let Some(task) = self.handler_task.take() {
            task.abort();
        }

        closed?;
        waited?;
        tracing::debug!("Browser closed");
        Ok(())
    }

    /// Close the browser, then hand back the outcome of the work done with it
    ///
    /// The work's own error wins over a failure to close.
    pub async fn finish<T, E>(self, outcome: std::result::Result<T, E>) -> std::result::Result<T, E>
    where
        E: From<Error>,
    {
        let closed = self.close().await;
        merge_outcome(outcome, closed)
    }
}

/// Combine the result of a run with the result of closing its browser
///
/// The run's own error wins; a close failure only surfaces when the run succeeded.
fn merge_outcome<T, E>(outcome: std::result::Result<T, E>, closed: Result<()>) -> std::result::Result<T, E>
where
    E: From<Error>,
{
    match outcome {
        Ok(value) => {
            closed?;
            Ok(value)
        }
        Err(e) => {
            if let Err(close_err) = closed {
                tracing::warn!("Failed to close browser after error: {}", close_err);
            }
            Err(e)
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(task) = self.handler_task.take() {
            tracing::debug!("Browser session dropped without close; aborting CDP handler");
            task.abort();
        }
    }
}

#[async_trait]
impl PageSource for BrowserSession {
    async fn load(&mut self, url: &str) -> jobscout_core::Result<String> {
        let loaded = match self.navigate(url).await {
            Ok(()) => self.content().await,
            Err(e) => Err(e),
        };

        loaded.map_err(|e| jobscout_core::Error::PageLoad {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

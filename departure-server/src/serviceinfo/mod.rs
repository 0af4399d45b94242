//! Service-info enrichment.
//!
//! The departure feed itself only knows which stations a train calls at.
//! An external service-info API adds per-stop platforms, times and delays.
//! That data is a nice-to-have: a lookup that fails for any reason (timeout,
//! bad JSON, server error) yields "no data" and the feed is built without it.

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

use chrono::NaiveDate;
use tracing::{Level, debug, error, warn};

pub use client::{REQUEST_TIMEOUT, ServiceInfoClient, ServiceInfoConfig};
pub use error::ServiceInfoError;
pub use mock::MockServiceInfo;
pub use types::{Service, ServiceInfoResponse, ServiceStop};

/// Source of enrichment data for stop lists.
///
/// `lookup` never fails: `None` means no enrichment is available, whether
/// because the source is disabled or because fetching went wrong.
pub trait ServiceInfoSource: Send + Sync {
    fn lookup(
        &self,
        train_number: &str,
        service_date: NaiveDate,
    ) -> impl Future<Output = Option<Vec<Service>>> + Send;
}

impl ServiceInfoSource for ServiceInfoClient {
    async fn lookup(&self, train_number: &str, service_date: NaiveDate) -> Option<Vec<Service>> {
        match self.fetch(train_number, service_date).await {
            Ok(services) => {
                if services.is_none() && self.is_enabled() {
                    debug!(
                        train = train_number,
                        %service_date,
                        "no services in serviceinfo response"
                    );
                }
                services
            }
            Err(e) => {
                if e.log_level() == Level::WARN {
                    warn!(train = train_number, %service_date, "serviceinfo timeout: {e}");
                } else {
                    error!(
                        train = train_number,
                        %service_date,
                        "serviceinfo lookup failed, no serviceinfo available: {e}"
                    );
                }
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Local HTTP servers standing in for the service-info API.

    use axum::Router;
    use tokio::net::TcpListener;

    /// Serve `app` on an ephemeral port; returns the base URL with trailing slash.
    pub async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    /// Accept connections but never answer, so clients run into their timeout.
    pub async fn serve_silent() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        format!("http://{addr}/")
    }
}

#[cfg(test)]
mod tests {
    use super::test_server::{serve, serve_silent};
    use super::*;
    use axum::Router;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[tokio::test]
    async fn lookup_disabled() {
        let client = ServiceInfoClient::new(None).unwrap();
        assert!(client.lookup("3041", date()).await.is_none());
    }

    #[tokio::test]
    async fn lookup_success() {
        let body = r#"{"services": [{"stops": [{"station": "UT"}]}]}"#;
        let app = Router::new().fallback(move || async move { body });
        let url = serve(app).await;
        let client = ServiceInfoClient::new(Some(ServiceInfoConfig::new(url))).unwrap();

        let services = client.lookup("3041", date()).await.unwrap();
        assert_eq!(services[0].stops[0].station, "UT");
    }

    #[tokio::test]
    async fn lookup_swallows_bad_json() {
        let app = Router::new().fallback(|| async { "not json" });
        let url = serve(app).await;
        let client = ServiceInfoClient::new(Some(ServiceInfoConfig::new(url))).unwrap();

        assert!(client.lookup("3041", date()).await.is_none());
    }

    /// Log output captured in memory, without ANSI colours.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn subscriber(self) -> impl tracing::Subscriber + Send + Sync {
            tracing_subscriber::fmt()
                .with_writer(move || self.clone())
                .with_max_level(Level::INFO)
                .with_ansi(false)
                .finish()
        }

        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn timeout_logged_as_warning() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.clone().subscriber());

        let url = serve_silent().await;
        let client = ServiceInfoClient::new(Some(ServiceInfoConfig::new(url))).unwrap();
        assert!(client.lookup("3041", date()).await.is_none());

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("serviceinfo timeout"), "{output}");
        assert!(!output.contains("ERROR"), "{output}");
    }

    #[tokio::test]
    async fn bad_json_logged_as_error() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.clone().subscriber());

        let app = Router::new().fallback(|| async { "not json" });
        let url = serve(app).await;
        let client = ServiceInfoClient::new(Some(ServiceInfoConfig::new(url))).unwrap();
        assert!(client.lookup("3041", date()).await.is_none());

        let output = logs.contents();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("no serviceinfo available"), "{output}");
        assert!(!output.contains("WARN"), "{output}");
    }

    #[tokio::test]
    async fn refused_connection_logged_as_error() {
        let logs = CapturedLogs::default();
        let _guard = tracing::subscriber::set_default(logs.clone().subscriber());

        // Bind and drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ServiceInfoConfig::new(format!("http://{addr}/"));
        let client = ServiceInfoClient::new(Some(config)).unwrap();
        assert!(client.lookup("3041", date()).await.is_none());

        let output = logs.contents();
        assert!(output.contains("ERROR"), "{output}");
        assert!(!output.contains("WARN"), "{output}");
    }

    #[tokio::test]
    async fn lookup_swallows_timeout() {
        let url = serve_silent().await;
        let client = ServiceInfoClient::new(Some(ServiceInfoConfig::new(url))).unwrap();

        let started = std::time::Instant::now();
        assert!(client.lookup("3041", date()).await.is_none());
        assert!(started.elapsed() < REQUEST_TIMEOUT * 3);
    }
}

// crates/geonames-core/src/fetch.rs
use crate::error::Result;

/// Retrieves the raw bytes behind a URL.
///
/// The pipeline only ever talks to this trait, so tests and demos can feed it
/// canned payloads instead of hitting the network.
pub trait Fetch {
    /// Returns the full response body, or [`GeoNamesError::Retrieval`] when the
    /// request cannot be completed.
    ///
    /// [`GeoNamesError::Retrieval`]: crate::GeoNamesError::Retrieval
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

#[cfg(feature = "fetch")]
pub use http::HttpFetcher;

#[cfg(feature = "fetch")]
mod http {
    use super::Fetch;
    use crate::error::{GeoNamesError, Result};
    use log::debug;

    /// Blocking HTTP GET with the transport's default settings.
    #[derive(Debug, Clone, Default)]
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Fetch for HttpFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            let retrieval = |reason: String| GeoNamesError::Retrieval {
                url: url.to_string(),
                reason,
            };

            debug!("GET {url}");
            let response = self
                .client
                .get(url)
                .send()
                .map_err(|e| retrieval(transport_reason(&e)))?;

            let status = response.status();
            if !status.is_success() {
                let reason = status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.as_str().to_string());
                return Err(retrieval(reason));
            }

            let body = response
                .bytes()
                .map_err(|e| retrieval(transport_reason(&e)))?;
            debug!("{url}: {} bytes", body.len());
            Ok(body.to_vec())
        }
    }

    /// The innermost cause is the most useful one (e.g. "Connection refused").
    fn transport_reason(err: &reqwest::Error) -> String {
        let mut source: &dyn std::error::Error = err;
        while let Some(next) = source.source() {
            source = next;
        }
        source.to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::{Read, Write};
        use std::net::TcpListener;
        use std::thread;

        /// Answers a single request with the raw `response`, after reading its headers.
        fn serve_once(response: &'static str) -> (String, thread::JoinHandle<()>) {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let url = format!("http://{}/countryInfo.txt", listener.local_addr().unwrap());
            let handle = thread::spawn(move || {
                let (mut stream, _) = listener.accept().unwrap();
                let mut request = Vec::new();
                let mut chunk = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut chunk).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&chunk[..n]);
                }
                stream.write_all(response.as_bytes()).unwrap();
            });
            (url, handle)
        }

        #[test]
        fn error_status_uses_canonical_reason() {
            let (url, server) = serve_once(
                "HTTP/1.1 404 Nope\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
            let err = HttpFetcher::new().fetch(&url).unwrap_err();
            server.join().unwrap();

            assert_eq!(
                err.to_string(),
                format!("Failed to download {url}. Reason: \"Not Found\".")
            );
        }

        #[test]
        fn success_status_returns_body() {
            let (url, server) = serve_once(
                "HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nh\nA\tB",
            );
            let body = HttpFetcher::new().fetch(&url).unwrap();
            server.join().unwrap();

            assert_eq!(body, b"h\nA\tB");
        }

        #[test]
        fn refused_connection_is_a_retrieval_error() {
            // Port 1 on loopback is never served in a test environment.
            let url = "http://127.0.0.1:1/countryInfo.txt";
            let err = HttpFetcher::new().fetch(url).unwrap_err();
            match err {
                GeoNamesError::Retrieval { url: u, reason } => {
                    assert_eq!(u, url);
                    assert!(!reason.is_empty());
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn invalid_url_is_a_retrieval_error() {
            let err = HttpFetcher::new().fetch("not a url").unwrap_err();
            assert!(err.to_string().starts_with("Failed to download not a url. Reason: \""));
        }
    }
}

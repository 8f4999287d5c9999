#![allow(dead_code)]

pub mod fixtures {
    use funserver::dispatcher::Dispatcher;
    use funserver::static_files::StaticFiles;
    use funserver::upstream::{FetchError, RepoFetcher};
    use std::fs;
    use std::path::Path;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    pub const ROOT_HTML: &str = "<html><body>Files:\n${links}</body></html>";
    pub const INDEX_HTML: &str = "<html><body>random page</body></html>";
    pub const KITTY1_HTML: &str = "<html>kitty one</html>";
    pub const KITTY2_HTML: &str = "<html>kitty two</html>";
    pub const FAKE_API: &str = "http://github.invalid";

    /// On-disk layout the dispatcher reads from: `www/`, `images/`, `files/`.
    pub struct Site {
        pub dir: TempDir,
    }

    impl Site {
        pub fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let root = dir.path();
            fs::create_dir_all(root.join("www")).unwrap();
            fs::create_dir_all(root.join("images")).unwrap();
            fs::create_dir_all(root.join("files/docs")).unwrap();
            fs::write(root.join("www/root.html"), ROOT_HTML).unwrap();
            fs::write(root.join("www/index.html"), INDEX_HTML).unwrap();
            fs::write(root.join("images/kitty1.html"), KITTY1_HTML).unwrap();
            fs::write(root.join("images/kitty2.html"), KITTY2_HTML).unwrap();
            fs::write(root.join("files/docs/readme.txt"), "hello").unwrap();
            Self { dir }
        }

        pub fn path(&self) -> &Path {
            self.dir.path()
        }

        pub fn dispatcher(&self, fetcher: Arc<dyn RepoFetcher>) -> Dispatcher {
            Dispatcher::new(
                StaticFiles::new(self.path().join("www")),
                StaticFiles::new(self.path().join("images")),
                StaticFiles::new(self.path().join("files")),
                fetcher,
                FAKE_API,
            )
        }
    }

    /// Returns a canned body and records every URL it was asked for.
    pub struct MockFetcher {
        response: Result<String, u16>,
        pub urls: Mutex<Vec<String>>,
    }

    impl MockFetcher {
        pub fn ok(body: &str) -> Arc<Self> {
            Arc::new(Self {
                response: Ok(body.to_string()),
                urls: Mutex::new(Vec::new()),
            })
        }

        pub fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                response: Err(status),
                urls: Mutex::new(Vec::new()),
            })
        }

        pub fn requested(&self) -> Vec<String> {
            self.urls.lock().unwrap().clone()
        }
    }

    impl RepoFetcher for MockFetcher {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.urls.lock().unwrap().push(url.to_string());
            match &self.response {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(FetchError::Status {
                    url: url.to_string(),
                    status: *status,
                }),
            }
        }
    }
}

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    /// Write `raw` to a fresh connection and read until the server closes it.
    pub fn send_request(addr: &SocketAddr, raw: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        stream.write_all(raw.as_bytes()).unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }

    /// Split a response into status code, reason, content type and body.
    pub fn parse_response(resp: &str) -> (u16, String, String, String) {
        let (head, body) = resp.split_once("\n\n").unwrap_or((resp, ""));
        let mut lines = head.lines();
        let status_line = lines.next().unwrap_or("");
        let mut parts = status_line.splitn(3, ' ');
        assert_eq!(parts.next(), Some("HTTP/1.1"));
        let status = parts.next().unwrap_or("0").parse().unwrap();
        let reason = parts.next().unwrap_or("").to_string();
        let mut content_type = String::new();
        for line in lines {
            if let Some((name, val)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-type") {
                    content_type = val.trim().to_string();
                }
            }
        }
        (status, reason, content_type, body.to_string())
    }
}

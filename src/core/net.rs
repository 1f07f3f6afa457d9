// src/core/net.rs
// HTTP/1.0 GET over TCP (std-only).
// HTTP/1.0 + `Connection: close` means the server ends the body with EOF,
// so there is no chunked decoding. No TLS: `https://` is rejected.

use std::{fmt, io::{Read, Write}, net::TcpStream, time::Duration};
use crate::config::consts::{MAX_REDIRECTS, NET_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug)]
pub enum FetchError {
    Io(std::io::Error),
    BadUrl(String),
    Unsupported(String),
    Status { code: u16, url: String },
    Malformed(String),
    TooManyRedirects(String),
    /// Transport or TLS failure reported by the HTTPS client.
    Client(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Io(e) => write!(f, "network error: {e}"),
            FetchError::BadUrl(u) => write!(f, "bad url: {u}"),
            FetchError::Unsupported(u) => write!(f, "unsupported url (plain http only): {u}"),
            FetchError::Status { code, url } => write!(f, "HTTP error: {code} {url}"),
            FetchError::Malformed(u) => write!(f, "malformed HTTP response from {u}"),
            FetchError::TooManyRedirects(u) => write!(f, "too many redirects starting at {u}"),
            FetchError::Client(e) => write!(f, "request failed: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Io(e) => Some(e),
            FetchError::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(e: std::io::Error) -> Self { FetchError::Io(e) }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_redirect() {
            let url = e.url().map(|u| u.to_string()).unwrap_or_default();
            return FetchError::TooManyRedirects(url);
        }
        FetchError::Client(e)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpUrl {
    pub host: String,
    pub port: u16,
    /// Path + query, always starting with `/`.
    pub path: String,
}

impl HttpUrl {
    pub fn parse(url: &str) -> Result<Self, FetchError> {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("https://") {
            return Err(FetchError::Unsupported(s!(url)));
        }
        let rest = url
            .get(..7)
            .filter(|scheme| scheme.eq_ignore_ascii_case("http://"))
            .map(|_| &url[7..])
            .ok_or_else(|| FetchError::BadUrl(s!(url)))?;

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, "/"),
        };
        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => {
                let port = p.parse::<u16>().map_err(|_| FetchError::BadUrl(s!(url)))?;
                (h, port)
            }
            None => (authority, 80),
        };
        if host.is_empty() {
            return Err(FetchError::BadUrl(s!(url)));
        }
        Ok(Self { host: s!(host), port, path: s!(path) })
    }

    /// Resolve a `Location` header against this URL.
    pub fn join(&self, location: &str) -> Result<Self, FetchError> {
        let loc = location.trim();
        if loc.starts_with('/') {
            return Ok(Self { host: self.host.clone(), port: self.port, path: s!(loc) });
        }
        Self::parse(loc)
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port == 80 {
            write!(f, "http://{}{}", self.host, self.path)
        } else {
            write!(f, "http://{}:{}{}", self.host, self.port, self.path)
        }
    }
}

#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

/// GET `url`, following redirects, and return the body of the final 200.
pub fn http_get(url: &str) -> Result<String, FetchError> {
    let mut target = HttpUrl::parse(url)?;

    for hop in 0..=MAX_REDIRECTS {
        let resp = get_once(&target)?;
        match resp.status {
            200 => return Ok(resp.body),
            301 | 302 | 303 | 307 | 308 => {
                let loc = resp.location.ok_or_else(|| FetchError::Malformed(target.to_string()))?;
                let next = target.join(&loc)?;
                logd!("net: redirect {hop} {target} -> {next}");
                target = next;
            }
            code => return Err(FetchError::Status { code, url: target.to_string() }),
        }
    }
    Err(FetchError::TooManyRedirects(s!(url)))
}

fn get_once(url: &HttpUrl) -> Result<Response, FetchError> {
    let timeout = Some(Duration::from_secs(NET_TIMEOUT_SECS));
    let mut s = TcpStream::connect((url.host.as_str(), url.port))?;
    s.set_read_timeout(timeout)?;
    s.set_write_timeout(timeout)?;

    let req = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nAccept: text/html\r\nConnection: close\r\n\r\n",
        url.path, url.host, USER_AGENT
    );
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    parse_response(&buf).ok_or_else(|| FetchError::Malformed(url.to_string()))
}

/// Split a raw HTTP response into status, `Location` and body.
pub fn parse_response(raw: &[u8]) -> Option<Response> {
    let resp = String::from_utf8_lossy(raw);
    let head_end = resp.find("\r\n\r\n")?;
    let head = &resp[..head_end];
    let body = s!(&resp[head_end + 4..]);

    let mut lines = head.split("\r\n");
    let status = lines.next()?.split_whitespace().nth(1)?.parse::<u16>().ok()?;
    let location = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(k, _)| k.trim().eq_ignore_ascii_case("location"))
        .map(|(_, v)| s!(v.trim()));

    Some(Response { status, location, body })
}

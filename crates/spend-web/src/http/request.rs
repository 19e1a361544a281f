//! Minimal HTTP/1.1 request parsing over a blocking reader.

use std::io::{BufRead, Read};

use super::HttpError;

/// Longest request line or header line accepted.
const MAX_LINE_BYTES: usize = 8 * 1024;
/// Most header lines accepted per request.
const MAX_HEADERS: usize = 64;

/// A parsed request. Header names are lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn body_str(&self) -> Result<&str, HttpError> {
        std::str::from_utf8(&self.body)
            .map_err(|_| HttpError::BadRequest("body is not valid UTF-8".into()))
    }
}

/// Read one request: request line, headers, then a `Content-Length` body
/// of at most `max_body_bytes`.
pub fn read_request<R: BufRead>(reader: &mut R, max_body_bytes: usize) -> Result<Request, HttpError> {
    let request_line = read_line(reader)?;
    if request_line.is_empty() {
        return Err(HttpError::BadRequest("empty request".into()));
    }

    // GET /predict?x=1 HTTP/1.1
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(HttpError::BadRequest(format!("malformed request line: {request_line:?}")));
    };
    if !version.starts_with("HTTP/1.") {
        return Err(HttpError::BadRequest(format!("unsupported version: {version}")));
    }
    // Routing ignores the query string.
    let path = target.split_once('?').map_or(target, |(p, _)| p).to_string();

    let mut headers = Vec::new();
    loop {
        let line = read_line(reader)?;
        if line.is_empty() {
            break;
        }
        if headers.len() == MAX_HEADERS {
            return Err(HttpError::BadRequest("too many headers".into()));
        }
        let Some((name, value)) = line.split_once(':') else {
            return Err(HttpError::BadRequest(format!("malformed header: {line:?}")));
        };
        headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
    }

    let mut request = Request {
        method: method.to_ascii_uppercase(),
        path,
        headers,
        body: Vec::new(),
    };

    let content_length = match request.header("content-length") {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| HttpError::BadRequest(format!("invalid Content-Length: {raw:?}")))?,
        None => 0,
    };
    if content_length > max_body_bytes {
        return Err(HttpError::PayloadTooLarge {
            size: content_length,
            limit: max_body_bytes,
        });
    }
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body)?;
        request.body = body;
    }

    Ok(request)
}

/// Read a CRLF- or LF-terminated line without its terminator.
fn read_line<R: BufRead>(reader: &mut R) -> Result<String, HttpError> {
    let mut buf = Vec::new();
    let read = reader
        .by_ref()
        .take(MAX_LINE_BYTES as u64 + 1)
        .read_until(b'\n', &mut buf)?;
    if read > MAX_LINE_BYTES {
        return Err(HttpError::BadRequest("line too long".into()));
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    String::from_utf8(buf).map_err(|_| HttpError::BadRequest("non-UTF-8 header line".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Request, HttpError> {
        read_request(&mut raw.as_bytes(), 1024)
    }

    #[test]
    fn query_string_is_stripped_from_path() {
        let req = parse("GET /health?verbose=1 HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/health");
        assert_eq!(req.header("HOST"), Some("localhost"));
        assert!(req.body.is_empty());
    }

    #[test]
    fn reads_body_by_content_length() {
        let raw = "POST /predict HTTP/1.1\r\nContent-Length: 5\r\n\r\nab=cdEXTRA";
        let req = parse(raw).unwrap();
        assert_eq!(req.body, b"ab=cd");
    }

    #[test]
    fn oversized_body_is_rejected_before_reading() {
        let raw = "POST / HTTP/1.1\r\nContent-Length: 4096\r\n\r\n";
        assert!(matches!(
            parse(raw),
            Err(HttpError::PayloadTooLarge { size: 4096, limit: 1024 })
        ));
    }

    #[test]
    fn malformed_lines_are_bad_requests() {
        assert!(matches!(parse("GARBAGE\r\n\r\n"), Err(HttpError::BadRequest(_))));
        assert!(matches!(
            parse("GET / HTTP/1.1\r\nno-colon-here\r\n\r\n"),
            Err(HttpError::BadRequest(_))
        ));
        assert!(matches!(
            parse("POST / HTTP/1.1\r\nContent-Length: ten\r\n\r\n"),
            Err(HttpError::BadRequest(_))
        ));
    }

    #[test]
    fn truncated_body_is_an_io_error() {
        let raw = "POST / HTTP/1.1\r\nContent-Length: 10\r\n\r\nabc";
        assert!(matches!(parse(raw), Err(HttpError::Io(_))));
    }
}

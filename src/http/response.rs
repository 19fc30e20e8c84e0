use chrono::{DateTime, Utc};

use crate::http::mime::ContentType;

/// HTTP status codes the responder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// `Date` header value: IMF-fixdate, always GMT and always English.
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Date substituted for the `<cs371date>` marker.
pub fn marker_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y").to_string()
}

/// Everything that goes in front of the body.
///
/// No `Content-Length` is sent; the body ends when the connection closes.
#[derive(Debug, Clone)]
pub struct ResponseHead<'a> {
    pub status: StatusCode,
    pub date: DateTime<Utc>,
    pub server: &'a str,
    pub content_type: ContentType,
}

impl ResponseHead<'_> {
    pub fn serialize(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\n\
             Date: {}\r\n\
             Server: {}\r\n\
             Connection: close\r\n\
             Content-Type: {}\r\n\
             \r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            http_date(self.date),
            self.server,
            self.content_type.mime(),
        );
        head.into_bytes()
    }
}

//! Content category detection from the request target's extension.

/// Coarse content category of a served resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Png,
    Jpeg,
    Gif,
}

/// Checked in order, first match wins. `.jpg` maps to PNG.
const SUFFIX_TABLE: &[(&str, ContentType)] = &[
    (".png", ContentType::Png),
    (".jpg", ContentType::Png),
    (".jpeg", ContentType::Jpeg),
    (".gif", ContentType::Gif),
];

impl ContentType {
    /// Classify a request target.
    ///
    /// Matching is a case-sensitive substring test, so `/a.png.html` is a PNG.
    ///
    /// # Example
    ///
    /// ```
    /// # use webworker::http::mime::ContentType;
    /// assert_eq!(ContentType::resolve("/logo.gif"), ContentType::Gif);
    /// assert_eq!(ContentType::resolve("/index.html"), ContentType::Html);
    /// assert_eq!(ContentType::resolve("/LOGO.GIF"), ContentType::Html);
    /// ```
    pub fn resolve(path: &str) -> Self {
        SUFFIX_TABLE
            .iter()
            .find(|(suffix, _)| path.contains(suffix))
            .map(|&(_, content_type)| content_type)
            .unwrap_or(ContentType::Html)
    }

    /// Value of the `Content-Type` header.
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Png => "image/png",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Gif => "image/gif",
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, ContentType::Html)
    }
}

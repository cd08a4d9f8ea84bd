/// Link inline type `[text](url)`.
///
/// The text may not contain `]` and the url may not contain `)`; both must be
/// non-empty.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Separates the link text from the url.
    pub const MIDDLE: &'static [u8] = b"](";
    pub const CLOSE: u8 = b')';
}

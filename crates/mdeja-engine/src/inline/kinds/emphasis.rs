/// Strong emphasis `**text**`. Tried before [`Emphasis`] so a double
/// asterisk is never split into two single ones.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8] = b"**";
}

/// Emphasis `*text*`.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';
}

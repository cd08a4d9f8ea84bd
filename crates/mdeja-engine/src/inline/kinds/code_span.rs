/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: `*` inside backticks is never emphasis.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}

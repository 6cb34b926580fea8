//! HTML 编码器
//!
//! 内容节点只决定**是否**编码，编码的具体算法由调用方传入的 [`HtmlEncoder`] 负责。

use std::io::{self, Write};

/// 将原始文本转义为可安全写入 HTML 的形式，并直接写入目标写出器。
pub trait HtmlEncoder: Send + Sync {
    fn html_encode(&self, value: &str, writer: &mut dyn Write) -> io::Result<()>;
}

/// 默认编码器：转义 `& < > " '`，可选地把非 ASCII 字符写成数字字符引用。
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHtmlEncoder {
    encode_non_ascii: bool,
}

impl DefaultHtmlEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_non_ascii(encode_non_ascii: bool) -> Self {
        Self { encode_non_ascii }
    }

    pub fn encode_non_ascii(&self) -> bool {
        self.encode_non_ascii
    }
}

impl HtmlEncoder for DefaultHtmlEncoder {
    fn html_encode(&self, value: &str, mut writer: &mut dyn Write) -> io::Result<()> {
        if !self.encode_non_ascii {
            return html_escape::encode_quoted_attribute_to_writer(value, &mut writer);
        }
        // 非 ASCII 字符写成数字字符引用，其间的片段交给 html_escape
        let mut start = 0;
        for (i, c) in value.char_indices().filter(|(_, c)| !c.is_ascii()) {
            html_escape::encode_quoted_attribute_to_writer(&value[start..i], &mut writer)?;
            write!(writer, "&#x{:X};", c as u32)?;
            start = i + c.len_utf8();
        }
        html_escape::encode_quoted_attribute_to_writer(&value[start..], &mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(encoder: &DefaultHtmlEncoder, value: &str) -> String {
        let mut out = Vec::new();
        encoder.html_encode(value, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_escape_special_chars() {
        let encoder = DefaultHtmlEncoder::new();
        assert_eq!(
            encode(&encoder, "<script>alert('xss') & \"x\"</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;) &amp; &quot;x&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_plain_text_passthrough() {
        let encoder = DefaultHtmlEncoder::new();
        assert_eq!(encode(&encoder, "hello world"), "hello world");
        assert_eq!(encode(&encoder, ""), "");
    }

    #[test]
    fn test_non_ascii_kept_by_default() {
        let encoder = DefaultHtmlEncoder::new();
        assert_eq!(encode(&encoder, "文件<列表>"), "文件&lt;列表&gt;");
    }

    #[test]
    fn test_non_ascii_numeric() {
        let encoder = DefaultHtmlEncoder::with_non_ascii(true);
        assert!(encoder.encode_non_ascii());
        assert_eq!(encode(&encoder, "é<"), "&#xE9;&lt;");
        assert_eq!(encode(&encoder, "a文b"), "a&#x6587;b");
    }

    #[test]
    fn test_non_ascii_mixed_with_special_chars() {
        let encoder = DefaultHtmlEncoder::with_non_ascii(true);
        assert_eq!(
            encode(&encoder, "<文>&'é'"),
            "&lt;&#x6587;&gt;&amp;&#x27;&#xE9;&#x27;"
        );
        assert_eq!(encode(&encoder, "文"), "&#x6587;");
        assert_eq!(encode(&encoder, ""), "");
    }
}

// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

#[cfg(test)]
mod render_tests {
    //! # 缓冲内容渲染测试套件
    //!
    //! 通过公开接口验证缓冲 HTML 内容的行为：
    //! - 原始文本在写出时编码，已编码文本原样输出
    //! - 追加缓冲区时立即展开，与源缓冲区后续的修改无关
    //! - 字符数组的分块边界在输出中不可见
    //! - 参数越界时失败且不修改缓冲区

    use proptest::prelude::*;
    use std::io::{self, Write};
    use std::sync::Arc;
    use viewrender::{
        BufferedHtmlContent, DefaultHtmlEncoder, Exception, HtmlContent, HtmlEncoder, HtmlString,
        StringHtmlContent,
    };

    fn encode(value: &str) -> String {
        let mut out = Vec::new();
        DefaultHtmlEncoder::new().html_encode(value, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// 实现了写出能力的外部内容类型
    struct Hr;

    impl HtmlContent for Hr {
        fn write_to(&self, writer: &mut dyn Write, _encoder: &dyn HtmlEncoder) -> io::Result<()> {
            writer.write_all(b"<hr/>")
        }
    }

    /// ## 编码旁路
    /// 同一段文本经原始路径写出会被转义，经已编码路径写出保持原样。
    #[test]
    fn test_encoded_and_raw_paths() {
        let mut encoded = BufferedHtmlContent::new();
        encoded.append_encoded("<b>");
        assert_eq!(encoded.to_string(), "<b>");

        let mut raw = BufferedHtmlContent::new();
        raw.append("<b>");
        assert_eq!(raw.to_string(), "&lt;b&gt;");
    }

    /// ## 展开
    /// B = "pre" + A + "post"，之后清空 A 不影响 B。
    #[test]
    fn test_flattening_is_decoupled_from_source() {
        let mut a = BufferedHtmlContent::new();
        a.append("x<");
        a.append_html(Hr);

        let mut b = BufferedHtmlContent::new();
        b.append("pre");
        b.append_buffer(&a);
        b.append("post");

        let expected = "prex&lt;<hr/>post";
        assert_eq!(b.to_string(), expected);

        a.clear();
        assert_eq!(a.to_string(), "");
        assert_eq!(b.to_string(), expected);
    }

    /// 通过共享句柄追加缓冲区时同样展开
    #[test]
    fn test_flattening_through_shared_handle() {
        let mut a = BufferedHtmlContent::new();
        a.append("1");
        let shared: Arc<dyn HtmlContent> = Arc::new(a.clone());

        let mut b = BufferedHtmlContent::new();
        b.append_content(Some(shared));
        a.append("2");

        assert_eq!(b.len(), 1);
        assert_eq!(b.to_string(), "1");
    }

    /// ## 空值容忍
    #[test]
    fn test_none_inputs_are_noops() {
        let mut buffer = BufferedHtmlContent::new();
        buffer.append_html(HtmlString::new("<i>"));
        let before = buffer.to_string();

        buffer.append(None);
        buffer.append_content(None);
        buffer.append_encoded(None);

        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.to_string(), before);
    }

    /// ## 越界参数
    #[test]
    fn test_bounds_fail_before_mutation() {
        let value: Vec<char> = "abcdef".chars().collect();
        let mut buffer = BufferedHtmlContent::new();
        buffer.append("seed");

        assert_eq!(
            buffer.append_chars(&value, -1, 5),
            Err(Exception::IndexOutOfRange)
        );
        assert_eq!(
            buffer.append_chars(&value, 0, value.len() as isize + 1),
            Err(Exception::CountOutOfRange)
        );
        assert_eq!(buffer.to_string(), "seed");
    }

    /// ## 清空后可继续使用
    #[test]
    fn test_clear_then_reuse() {
        let mut buffer = BufferedHtmlContent::new();
        buffer.append("a");
        buffer.append_encoded("<br>");
        buffer.clear();
        assert_eq!(buffer.to_string(), "");

        buffer.append("b&");
        assert_eq!(buffer.to_string(), "b&amp;");
    }

    /// ## 2500 个字符一次追加
    #[test]
    fn test_large_char_array_matches_single_string() {
        let text: String = "<&>\"'abc文".chars().cycle().take(2500).collect();
        let value: Vec<char> = text.chars().collect();

        let mut chunked = BufferedHtmlContent::new();
        chunked.append_chars(&value, 0, 2500).unwrap();

        let mut single = BufferedHtmlContent::new();
        single.append(text.as_str());

        assert_eq!(chunked.to_string(), single.to_string());
        assert_eq!(chunked.len(), 3);
    }

    #[test]
    fn test_string_content_to_string() {
        assert_eq!(StringHtmlContent::new("a<b").to_string(), "a&lt;b");
        assert_eq!(StringHtmlContent::from_encoded_text("a<b").to_string(), "a<b");
    }

    proptest! {
        /// 任意追加序列的输出等于各值编码后的顺序拼接
        #[test]
        fn prop_output_is_encoded_concatenation(values in proptest::collection::vec(".*", 0..16)) {
            let mut buffer = BufferedHtmlContent::new();
            for value in &values {
                buffer.append(value.as_str());
            }
            let expected: String = values.iter().map(|v| encode(v)).collect();
            prop_assert_eq!(buffer.to_string(), expected);
        }

        /// 分块大小与起止位置都不影响输出
        #[test]
        fn prop_chunk_boundaries_invisible(
            text in ".{0,300}",
            chunk_size in 1usize..64,
            split in 0usize..300,
        ) {
            let value: Vec<char> = text.chars().collect();
            let index = split.min(value.len());
            let count = value.len() - index;

            let mut chunked = BufferedHtmlContent::with_chunk_size(chunk_size);
            chunked.append_chars(&value, index as isize, count as isize).unwrap();

            let tail: String = value[index..].iter().collect();
            prop_assert_eq!(chunked.to_string(), encode(&tail));
        }
    }
}

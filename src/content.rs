// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # HTML 内容模块
//!
//! 定义了所有可写出 HTML 内容的公共能力 [`HtmlContent`]，以及两种基于字符串的内容：
//! - [`StringHtmlContent`]：根据构造方式决定写出时是否编码。
//! - [`HtmlString`]：已经编码过的 HTML 片段，写出时原样输出。

use std::fmt;
use std::io::{self, Write};

use crate::buffer::BufferedHtmlContent;
use crate::encoder::{DefaultHtmlEncoder, HtmlEncoder};

/// 能把自身写入目标写出器的 HTML 内容。
///
/// 缓冲区中的每个节点都实现该特性。实现方必须是 `Send + Sync`，以便缓冲区能在异步任务中被写出。
pub trait HtmlContent: Send + Sync {
    /// 使用给定编码器将内容写入 `writer`。
    fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> io::Result<()>;

    /// 若该内容本身是一个缓冲区则返回它，追加时据此把节点展开到目标缓冲区中。
    fn as_buffered(&self) -> Option<&BufferedHtmlContent> {
        None
    }
}

/// 使用默认编码器将内容渲染到一个新的内存写出器，返回得到的字符串。
///
/// 节点写出的非 UTF-8 字节按替换字符（U+FFFD）解码；只有节点自身返回的错误会向上传播。
pub fn render_to_string(content: &dyn HtmlContent) -> io::Result<String> {
    let mut writer = Vec::new();
    content.write_to(&mut writer, &DefaultHtmlEncoder::new())?;
    Ok(String::from_utf8_lossy(&writer).into_owned())
}

/// 基于字符串的 HTML 内容。
///
/// 构造后文本与编码标记都不可再修改。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringHtmlContent {
    text: String,
    encode_on_write: bool,
}

impl StringHtmlContent {
    /// 由原始文本构造，写出时会经过编码器。
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            encode_on_write: true,
        }
    }

    /// 由已经编码过的文本构造，写出时原样输出。不做任何校验，允许空字符串。
    pub fn from_encoded_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            encode_on_write: false,
        }
    }

    /// 空内容
    pub fn empty() -> Self {
        Self::from_encoded_text(String::new())
    }

    /// 获取未经处理的文本
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encode_on_write(&self) -> bool {
        self.encode_on_write
    }
}

impl HtmlContent for StringHtmlContent {
    fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> io::Result<()> {
        if self.encode_on_write {
            encoder.html_encode(&self.text, writer)
        } else {
            writer.write_all(self.text.as_bytes())
        }
    }
}

impl fmt::Display for StringHtmlContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = render_to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// 已编码的 HTML 片段，写出时不再经过编码器。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlString(StringHtmlContent);

impl HtmlString {
    pub fn new(input: impl Into<String>) -> Self {
        Self(StringHtmlContent::from_encoded_text(input))
    }

    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn text(&self) -> &str {
        self.0.text()
    }
}

impl HtmlContent for HtmlString {
    fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> io::Result<()> {
        self.0.write_to(writer, encoder)
    }
}

impl fmt::Display for HtmlString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

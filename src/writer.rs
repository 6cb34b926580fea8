// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 缓冲写出器模块
//!
//! - [`BufferedTextWriter`]：能够缓冲内容的写出器契约，提供同步与异步两种复制方式。
//! - [`HtmlTextWriter`]：契约的具体实现。缓冲期间的写入累积在 [`BufferedHtmlContent`] 中，
//!   调用 [`HtmlTextWriter::flush`] 后把累积内容写到内层写出器，并切换为直写模式。
//!
//! 同一个写出目标的访问顺序由调用方保证，这里不做任何加锁。

use std::io::{self, Write};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWrite;

use crate::{
    buffer::BufferedHtmlContent,
    config::Config,
    content::{HtmlContent, StringHtmlContent},
    encoder::{DefaultHtmlEncoder, HtmlEncoder},
};

/// 会缓冲内容的写出器契约。
#[async_trait]
pub trait BufferedTextWriter: Send + Sync {
    /// 当前是否处于缓冲模式
    fn is_buffering(&self) -> bool;

    /// 把缓冲的内容同步复制到 `writer`，逐节点按需编码。
    fn copy_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> io::Result<()>;

    /// 把缓冲的内容异步复制到 `writer`，输出与 [`copy_to`](Self::copy_to) 逐字节一致。
    async fn copy_to_async(
        &self,
        writer: &mut (dyn AsyncWrite + Unpin + Send),
        encoder: &dyn HtmlEncoder,
    ) -> io::Result<()>;
}

pub struct HtmlTextWriter<W> {
    content: BufferedHtmlContent,
    inner: W,
    encoder: Arc<dyn HtmlEncoder>,
    buffering: bool,
}

impl<W: Write> HtmlTextWriter<W> {
    /// 创建一个处于缓冲模式的写出器。
    pub fn new(inner: W, encoder: Arc<dyn HtmlEncoder>) -> Self {
        Self {
            content: BufferedHtmlContent::new(),
            inner,
            encoder,
            buffering: true,
        }
    }

    /// 创建一个直接写到 `inner` 的写出器。
    pub fn streaming(inner: W, encoder: Arc<dyn HtmlEncoder>) -> Self {
        Self {
            buffering: false,
            ..Self::new(inner, encoder)
        }
    }

    /// 按配置决定分块大小、初始模式和默认编码器的行为。
    pub fn from_config(inner: W, config: &Config) -> Self {
        let encoder = Arc::new(DefaultHtmlEncoder::with_non_ascii(config.encode_non_ascii()));
        Self {
            content: BufferedHtmlContent::with_chunk_size(config.chunk_size()),
            inner,
            encoder,
            buffering: config.buffering(),
        }
    }

    /// 写入原始文本，写出时编码。
    pub fn write(&mut self, value: &str) -> io::Result<()> {
        if self.buffering {
            self.content.append(value);
            return Ok(());
        }
        StringHtmlContent::new(value).write_to(&mut self.inner, self.encoder.as_ref())
    }

    /// 写入已编码的文本。
    pub fn write_encoded(&mut self, value: &str) -> io::Result<()> {
        if self.buffering {
            self.content.append_encoded(value);
            return Ok(());
        }
        self.inner.write_all(value.as_bytes())
    }

    /// 写入字符数组的一段。
    ///
    /// 下标或长度越界时返回 `InvalidInput` 类型的 I/O 错误，内部包含对应的 [`Exception`](crate::Exception)，
    /// 并且不会写入任何内容。
    pub fn write_chars(&mut self, value: &[char], index: isize, count: isize) -> io::Result<()> {
        if self.buffering {
            return self
                .content
                .append_chars(value, index, count)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e));
        }
        let mut chunks = BufferedHtmlContent::with_chunk_size(self.content.chunk_size());
        chunks
            .append_chars(value, index, count)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        chunks.write_to(&mut self.inner, self.encoder.as_ref())
    }

    /// 写入任意内容节点；缓冲区会被展开。
    pub fn write_content(&mut self, content: Arc<dyn HtmlContent>) -> io::Result<()> {
        if self.buffering {
            self.content.append_content(Some(content));
            return Ok(());
        }
        content.write_to(&mut self.inner, self.encoder.as_ref())
    }

    /// 把缓冲内容写到内层写出器并清空，此后所有写入都直接到达内层写出器。
    pub fn flush(&mut self) -> io::Result<()> {
        if self.buffering {
            debug!("结束缓冲，写出 {} 个内容节点", self.content.len());
            self.content.write_to(&mut self.inner, self.encoder.as_ref())?;
            self.content.clear();
            self.buffering = false;
        }
        self.inner.flush()
    }

    pub fn content(&self) -> &BufferedHtmlContent {
        &self.content
    }

    pub fn encoder(&self) -> &dyn HtmlEncoder {
        self.encoder.as_ref()
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[async_trait]
impl<W: Write + Send + Sync> BufferedTextWriter for HtmlTextWriter<W> {
    fn is_buffering(&self) -> bool {
        self.buffering
    }

    fn copy_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> io::Result<()> {
        self.content.write_to(writer, encoder)
    }

    async fn copy_to_async(
        &self,
        writer: &mut (dyn AsyncWrite + Unpin + Send),
        encoder: &dyn HtmlEncoder,
    ) -> io::Result<()> {
        self.content.write_to_async(writer, encoder).await
    }
}

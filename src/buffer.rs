// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 缓冲 HTML 内容模块
//!
//! [`BufferedHtmlContent`] 是一个按追加顺序保存内容节点的集合，并且知道如何把自身一次性写出。
//!
//! ## 不变式
//! - 追加另一个缓冲区时，立即把它**当前**的节点复制进来（展开），缓冲区之间从不嵌套。
//!   之后对源缓冲区的任何修改（继续追加或清空）都不会影响已经复制过来的节点。
//! - 追加缺失的值（`None`）不做任何事情。
//! - 写出时按追加顺序逐个节点直写，一遍完成，不做递归。

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use log::{debug, error};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{
    content::{render_to_string, HtmlContent, StringHtmlContent},
    encoder::HtmlEncoder,
    exception::Exception,
    param::MAX_CHAR_TO_STRING_LENGTH,
};

/// 能够写出自身的 HTML 内容节点集合。
#[derive(Clone)]
pub struct BufferedHtmlContent {
    entries: Vec<Arc<dyn HtmlContent>>,
    chunk_size: usize,
}

impl BufferedHtmlContent {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            chunk_size: MAX_CHAR_TO_STRING_LENGTH,
        }
    }

    /// 指定字符数组追加时每个文本节点的最大字符数。
    ///
    /// 取值会被限制在 `1..=MAX_CHAR_TO_STRING_LENGTH` 之间；分块大小不影响写出结果。
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            chunk_size: chunk_size.clamp(1, MAX_CHAR_TO_STRING_LENGTH),
        }
    }

    /// 追加一段原始文本，写出时会被编码。
    ///
    /// 传入 `None` 时不做任何事情。
    pub fn append<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        if let Some(value) = value.into() {
            self.entries.push(Arc::new(StringHtmlContent::new(value)));
        }
    }

    /// 追加字符数组中 `[index, index + count)` 范围内的字符。
    ///
    /// 大的字符数组会被切分为若干不超过分块上限的文本节点，按从左到右的顺序追加。
    ///
    /// # 错误处理
    /// - `index < 0` 时返回 [`Exception::IndexOutOfRange`]。
    /// - `count < 0` 或剩余长度不足 `count` 时返回 [`Exception::CountOutOfRange`]。
    ///
    /// 两种校验都在修改缓冲区之前完成，失败时缓冲区保持不变。
    pub fn append_chars(
        &mut self,
        value: &[char],
        index: isize,
        count: isize,
    ) -> Result<(), Exception> {
        if index < 0 {
            error!("字符数组追加的起始下标非法：{}", index);
            return Err(Exception::IndexOutOfRange);
        }
        if count < 0 || (value.len() as isize) - index < count {
            error!(
                "字符数组追加的长度非法：index={}, count={}, len={}",
                index,
                count,
                value.len()
            );
            return Err(Exception::CountOutOfRange);
        }

        let mut index = index as usize;
        let mut count = count as usize;
        debug!(
            "字符数组追加：{} 个字符，分块上限 {}",
            count, self.chunk_size
        );
        while count > 0 {
            let current = count.min(self.chunk_size);
            let chunk: String = value[index..index + current].iter().collect();
            self.append(chunk.as_str());
            index += current;
            count -= current;
        }
        Ok(())
    }

    /// 追加一个内容节点。
    ///
    /// - 若内容本身是缓冲区，则把它当前的全部节点按顺序复制进来。
    /// - 否则作为单个不透明节点追加。
    /// - 传入 `None` 时不做任何事情。
    pub fn append_content(&mut self, content: Option<Arc<dyn HtmlContent>>) {
        let Some(content) = content else {
            return;
        };
        if let Some(buffered) = content.as_buffered() {
            self.entries.extend(buffered.entries.iter().cloned());
            return;
        }
        self.entries.push(content);
    }

    /// [`append_content`](Self::append_content) 的便捷形式，接受任意具体的内容类型。
    pub fn append_html<C: HtmlContent + 'static>(&mut self, content: C) {
        self.append_content(Some(Arc::new(content)));
    }

    /// 展开追加另一个缓冲区，调用方保留对源缓冲区的所有权。
    pub fn append_buffer(&mut self, other: &BufferedHtmlContent) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// 追加一段已经编码过的文本，写出时原样输出。
    ///
    /// 传入 `None` 时不做任何事情。
    pub fn append_encoded<'a>(&mut self, encoded: impl Into<Option<&'a str>>) {
        if let Some(encoded) = encoded.into() {
            self.entries
                .push(Arc::new(StringHtmlContent::from_encoded_text(encoded)));
        }
    }

    /// 移除全部节点，缓冲区本身仍可继续使用。
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// 按追加顺序遍历节点，可重复遍历。
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn HtmlContent>> {
        self.entries.iter()
    }

    /// 异步写出全部节点，输出与 [`HtmlContent::write_to`] 逐字节一致。
    ///
    /// 每个节点先编码到临时缓冲，再整体写入异步写出器；只在写入时挂起。
    pub async fn write_to_async<W>(
        &self,
        writer: &mut W,
        encoder: &dyn HtmlEncoder,
    ) -> io::Result<()>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let mut scratch = Vec::new();
        for entry in &self.entries {
            scratch.clear();
            entry.write_to(&mut scratch, encoder)?;
            writer.write_all(&scratch).await?;
        }
        Ok(())
    }
}

impl Default for BufferedHtmlContent {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlContent for BufferedHtmlContent {
    fn write_to(&self, writer: &mut dyn Write, encoder: &dyn HtmlEncoder) -> io::Result<()> {
        for entry in &self.entries {
            entry.write_to(writer, encoder)?;
        }
        Ok(())
    }

    fn as_buffered(&self) -> Option<&BufferedHtmlContent> {
        Some(self)
    }
}

impl<'a> IntoIterator for &'a BufferedHtmlContent {
    type Item = &'a Arc<dyn HtmlContent>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn HtmlContent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for BufferedHtmlContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = render_to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for BufferedHtmlContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedHtmlContent")
            .field("entries", &self.entries.len())
            .field("chunk_size", &self.chunk_size)
            .finish()
    }
}

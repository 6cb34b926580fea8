// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # Exception 模块
//!
//! 该模块定义了视图渲染层在构建内容以及加载配置时可能抛出的各类异常情况。
//!
//! ## 设计意图
//! - **参数校验**：字符数组分块追加时的越界参数在修改缓冲区之前即被拒绝。
//! - **I/O 错误不在此列**：写出内容时产生的 `std::io::Error` 原样向上传播，不做包装。

use std::fmt;

/// 渲染过程中发生的异常类型。
///
/// 该枚举通常作为 `Result` 的 `Err` 部分返回，用于指示处理失败的具体原因。
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exception {
    /// 字符数组追加时起始下标为负数。
    IndexOutOfRange,
    /// 字符数组追加时长度为负数，或超出了从起始下标开始的剩余长度。
    CountOutOfRange,
    /// 找不到指定的配置文件。
    ConfigNotFound,
}

use Exception::*;

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexOutOfRange => write!(f, "Index was out of range (index must be non-negative)"),
            CountOutOfRange => write!(f, "Count was out of range for the given index"),
            ConfigNotFound => write!(f, "Configuration file not found"),
        }
    }
}

impl std::error::Error for Exception {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert!(IndexOutOfRange.to_string().contains("Index"));
        assert!(CountOutOfRange.to_string().contains("Count"));
        assert_eq!(ConfigNotFound.to_string(), "Configuration file not found");
    }
}

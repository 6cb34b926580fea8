// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 渲染参数与常量模块
//!
//! 该模块定义了视图渲染层使用的常量，包括：
//! - 字符数组分块追加的上限。
//! - 默认的配置文件路径。

/// 字符数组追加时，单个文本节点允许包含的最大字符数
pub const MAX_CHAR_TO_STRING_LENGTH: usize = 1024;

/// 默认的日志配置文件路径
pub const LOG_CONFIG: &str = r"config/log4rs.yaml";

/// 默认的渲染配置文件路径
pub const RENDER_CONFIG: &str = r"config/development.toml";

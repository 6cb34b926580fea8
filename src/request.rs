// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 请求上下文模块
//!
//! 演示程序专用：把命令行拼出的原始请求字节解析为 [`RequestContext`]，作为动作调用上下文中的
//! 请求上下文。只处理：
//! 1. 请求行（方法、路径、查询字符串、版本）。
//! 2. `User-Agent` 标头。
//! 3. 查询参数（按 `&` 与 `=` 拆分，不做百分号解码）。

use log::error;
use std::collections::HashMap;
use std::fmt;

/// HTTP 协议规定的换行符（Carriage Return Line Feed）
const CRLF: &str = "\r\n";

/// 请求解析失败的原因
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// 请求字节流无法解析为合法的 UTF-8 字符串。
    NotUtf8,
    /// 暂不支持的 HTTP 方法，或请求行格式不正确。
    UnsupportedMethod,
    /// 不支持的 HTTP 协议版本。
    UnsupportedVersion,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::NotUtf8 => write!(f, "Request bytes can't be parsed in UTF-8"),
            RequestError::UnsupportedMethod => write!(f, "Unsupported request method"),
            RequestError::UnsupportedVersion => write!(f, "Unsupported HTTP version"),
        }
    }
}

impl std::error::Error for RequestError {}

/// 标准 HTTP 请求方法
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HttpRequestMethod {
    Get,
    Head,
    Post,
}

impl fmt::Display for HttpRequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HttpRequestMethod::Get => write!(f, "GET"),
            HttpRequestMethod::Head => write!(f, "HEAD"),
            HttpRequestMethod::Post => write!(f, "POST"),
        }
    }
}

/// 一次请求的只读上下文。
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// 全局请求 ID，用于日志追踪
    id: u128,
    method: HttpRequestMethod,
    /// 不含查询字符串的路径
    path: String,
    query: HashMap<String, String>,
    user_agent: String,
}

impl RequestContext {
    /// 从原始字节缓冲区尝试构建请求上下文。
    ///
    /// # 错误处理
    /// 非 UTF-8 数据、请求行格式不正确、不支持的方法或版本（仅支持 HTTP/1.1）都会返回相应的 [`RequestError`]。
    pub fn try_from(buffer: &[u8], id: u128) -> Result<Self, RequestError> {
        let request_string = match std::str::from_utf8(buffer) {
            Ok(string) => string,
            Err(_) => {
                error!("[ID{}]无法解析HTTP请求", id);
                return Err(RequestError::NotUtf8);
            }
        };

        let request_lines: Vec<&str> = request_string.split(CRLF).collect();
        let first_line_parts: Vec<&str> = request_lines[0].split(' ').collect();
        if first_line_parts.len() != 3 {
            error!("[ID{}]HTTP请求行格式不正确：{}", id, request_lines[0]);
            return Err(RequestError::UnsupportedMethod);
        }

        let method = match first_line_parts[0].to_uppercase().as_str() {
            "GET" => HttpRequestMethod::Get,
            "HEAD" => HttpRequestMethod::Head,
            "POST" => HttpRequestMethod::Post,
            other => {
                error!("[ID{}]不支持的HTTP请求方法：{}", id, other);
                return Err(RequestError::UnsupportedMethod);
            }
        };

        let version = first_line_parts[2].to_uppercase();
        if version != "HTTP/1.1" {
            error!("[ID{}]不支持的HTTP协议版本：{}", id, version);
            return Err(RequestError::UnsupportedVersion);
        }

        let (path, query) = match first_line_parts[1].split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query(query)),
            None => (first_line_parts[1].to_string(), HashMap::new()),
        };

        let mut user_agent = String::new();
        // 空行之后是请求体
        for line in request_lines.iter().skip(1).take_while(|l| !l.is_empty()) {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            if name.trim().eq_ignore_ascii_case("user-agent") {
                user_agent = value.trim().to_string();
            }
        }

        Ok(Self {
            id,
            method,
            path,
            query,
            user_agent,
        })
    }

    pub fn id(&self) -> u128 {
        self.id
    }

    pub fn method(&self) -> HttpRequestMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 获取查询参数的值
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|v| v.as_str())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

// Copyright (c) 2026 shaneyale (shaneyale86@gmail.com)
// All rights reserved.

//! # 视图渲染演示程序
//!
//! 为命令行给出的请求路径构建请求上下文与动作调用上下文，渲染问候页面，
//! 再通过缓冲写出器异步复制到标准输出。
//!
//! ```text
//! viewrender "/greet?name=<World>"
//! ```

use std::{io, sync::Arc};

use log::{debug, error, info, warn};
use serde_json::json;
use tokio::io::AsyncWriteExt;

use viewrender::{
    param::RENDER_CONFIG, ActionContext, ActionDescriptor, BufferedHtmlContent,
    BufferedTextWriter, Config, HtmlBuilder, HtmlTextWriter, RouteValues, Router,
};

mod request;

use request::RequestContext;

/// 按 `/{controller}/{action}` 约定生成路径的路由器
struct ConventionalRouter;

impl Router for ConventionalRouter {
    fn virtual_path(&self, values: &RouteValues) -> Option<String> {
        let controller = values.get("controller")?.as_str()?;
        let action = values.get("action")?.as_str()?;
        Some(format!(
            "/{}/{}",
            controller.to_lowercase(),
            action.to_lowercase()
        ))
    }
}

#[tokio::main]
async fn main() {
    // 1. 先读取配置，日志配置文件的位置由它决定
    let loaded = Config::from_toml(RENDER_CONFIG);
    let config = loaded.clone().unwrap_or_default();

    // 2. 初始化日志系统
    if let Err(e) = log4rs::init_file(config.log_config(), Default::default()) {
        eprintln!("无法初始化日志系统（{}）：{}", config.log_config(), e);
    }
    match loaded {
        Ok(_) => info!("配置文件已载入"),
        Err(e) => warn!("{}：{}，使用默认配置", e, RENDER_CONFIG),
    }
    debug!("{:?}", config);

    // 3. 构造请求上下文
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/greet?name=World".to_string());
    let raw = format!(
        "GET {} HTTP/1.1\r\nUser-Agent: viewrender/{}\r\n\r\n",
        path,
        env!("CARGO_PKG_VERSION")
    );

    let page = match RequestContext::try_from(raw.as_bytes(), 0) {
        Ok(request) => {
            info!("[ID{}]{} {}", request.id(), request.method(), request.path());
            let router = ConventionalRouter;
            let context = build_context(&request, &router);
            greet_view(&context)
        }
        Err(e) => {
            warn!("[ID0]请求无法解析：{}", e);
            bad_request_page(&e.to_string())
        }
    };

    // 4. 写出页面
    if let Err(e) = write_page(page, &config).await {
        error!("页面写出失败：{}", e);
    }
}

fn build_context<'a>(
    request: &'a RequestContext,
    router: &'a dyn Router,
) -> ActionContext<'a, RequestContext> {
    let mut values = RouteValues::new();
    values.insert("controller".to_string(), json!("Home"));
    values.insert("action".to_string(), json!("Greet"));
    if let Some(name) = request.query("name") {
        values.insert("name".to_string(), json!(name));
    }
    let descriptor = ActionDescriptor::new("Home", "Greet").with_display_name("问候");
    ActionContext::new(request, router, values, Arc::new(descriptor))
}

fn greet_view(context: &ActionContext<'_, RequestContext>) -> BufferedHtmlContent {
    let name = context
        .route_values()
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("World");

    let mut builder = HtmlBuilder::new(&context.action_descriptor().display_name());
    let body = builder.body_mut();
    body.append_encoded("<h1>Hello, ");
    body.append(name);
    body.append_encoded("!</h1>\n<p>");
    body.append(context.http_context().user_agent());
    body.append_encoded("</p>\n");
    if let Some(href) = context.router().virtual_path(context.route_values()) {
        body.append_encoded("<a href=\"");
        body.append(href.as_str());
        body.append_encoded("\">");
        body.append(href.as_str());
        body.append_encoded("</a>\n");
    }
    builder.build()
}

fn bad_request_page(note: &str) -> BufferedHtmlContent {
    let mut builder = HtmlBuilder::new("400 Bad Request");
    let body = builder.body_mut();
    body.append_encoded("<h1>400</h1>\n<p>");
    body.append(note);
    body.append_encoded("</p>\n");
    builder.build()
}

async fn write_page(page: BufferedHtmlContent, config: &Config) -> io::Result<()> {
    let mut writer = HtmlTextWriter::from_config(io::stdout(), config);
    writer.write_content(Arc::new(page))?;

    if writer.is_buffering() {
        debug!("以缓冲模式写出 {} 个内容节点", writer.content().len());
        let mut stdout = tokio::io::stdout();
        writer.copy_to_async(&mut stdout, writer.encoder()).await?;
        stdout.flush().await
    } else {
        writer.flush()
    }
}

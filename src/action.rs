//! 动作调用上下文
//!
//! [`ActionContext`] 聚合了一次动作调用所需的请求上下文、路由器、路由参数与动作描述，
//! 构造后只提供只读访问。请求上下文与路由器由调用方持有，这里只保存借用。
//! 请求上下文的类型由宿主决定，这里不对其做任何约束。

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// 路由参数：键唯一，值的类型不限。
pub type RouteValues = HashMap<String, Value>;

/// 路由器。这里只关心根据路由参数生成 URL，不涉及请求分发。
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send + Sync {
    /// 根据路由参数生成虚拟路径，无法生成时返回 `None`。
    fn virtual_path(&self, values: &RouteValues) -> Option<String>;
}

/// 动作的元数据描述。
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    name: String,
    controller: String,
    display_name: Option<String>,
    properties: HashMap<String, Value>,
}

impl ActionDescriptor {
    pub fn new(controller: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            controller: controller.to_string(),
            display_name: None,
            properties: HashMap::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_property(mut self, key: &str, value: Value) -> Self {
        self.properties.insert(key.to_string(), value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// 未设置显示名时使用 `控制器.动作` 的形式
    pub fn display_name(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => format!("{}.{}", self.controller, self.name),
        }
    }

    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }
}

/// 一次动作调用的上下文，四个字段在构造时一次性设置。
pub struct ActionContext<'a, C> {
    http_context: &'a C,
    router: &'a dyn Router,
    route_values: RouteValues,
    action_descriptor: Arc<ActionDescriptor>,
}

impl<'a, C> ActionContext<'a, C> {
    pub fn new(
        http_context: &'a C,
        router: &'a dyn Router,
        route_values: RouteValues,
        action_descriptor: Arc<ActionDescriptor>,
    ) -> Self {
        Self {
            http_context,
            router,
            route_values,
            action_descriptor,
        }
    }

    pub fn http_context(&self) -> &'a C {
        self.http_context
    }

    pub fn router(&self) -> &'a dyn Router {
        self.router
    }

    pub fn route_values(&self) -> &RouteValues {
        &self.route_values
    }

    pub fn action_descriptor(&self) -> &Arc<ActionDescriptor> {
        &self.action_descriptor
    }
}

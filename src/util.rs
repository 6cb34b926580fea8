use chrono::{DateTime, Local};

use crate::buffer::BufferedHtmlContent;

/// 页面骨架构建器：标题和正文文本写出时编码，样式与页面结构原样写出。
pub struct HtmlBuilder {
    title: String,
    css: String,
    body: BufferedHtmlContent,
}

impl HtmlBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            css: default_css(),
            body: BufferedHtmlContent::new(),
        }
    }

    pub fn css(mut self, css: &str) -> Self {
        self.css = css.to_string();
        self
    }

    pub fn body_mut(&mut self) -> &mut BufferedHtmlContent {
        &mut self.body
    }

    /// 组装完整页面。正文节点被展开进页面缓冲区，之后修改构建器不影响返回的页面。
    pub fn build(&self) -> BufferedHtmlContent {
        let generated: DateTime<Local> = Local::now();
        let mut page = BufferedHtmlContent::new();
        page.append_encoded(
            r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>"#,
        );
        page.append(self.title.as_str());
        page.append_encoded("</title>\n        <style>");
        page.append_encoded(self.css.as_str());
        page.append_encoded("</style>\n    </head>\n    <body>\n");
        page.append_buffer(&self.body);
        page.append_encoded("\n        <!-- generated at ");
        page.append(generated.format("%Y-%m-%d %H:%M:%S %Z").to_string().as_str());
        page.append_encoded(" -->\n    </body>\n</html>");
        page
    }
}

fn default_css() -> String {
    r"
            body {
                width: 35em;
                margin: 0 auto;
                font-family: Tahoma, Verdana, Arial, sans-serif;
            }
            "
    .to_string()
}

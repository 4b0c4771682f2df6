const INDEX_TEMPLATE: &str = include_str!("../static/index.html");

pub struct PageContext<'a> {
    pub hostname: &'a str,
    pub local_ip: &'a str,
    pub port: u16,
    pub api_key: &'a str,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_index(ctx: &PageContext<'_>) -> String {
    INDEX_TEMPLATE
        .replace("{{hostname}}", &escape_html(ctx.hostname))
        .replace("{{local_ip}}", &escape_html(ctx.local_ip))
        .replace("{{port}}", &ctx.port.to_string())
        .replace("{{api_key}}", &escape_html(ctx.api_key))
}

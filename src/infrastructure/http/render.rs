//! HTML Rendering - 阅读页面生成
//!
//! 字符串拼接生成页面。所有动态文本先做 HTML 转义，
//! 链接中的路径段先百分号转义再按属性值转义。

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::application::queries::handlers::{
    ChapterDetailResponse, ChapterListResponse, NovelListItem,
};

/// 站点标题
const SITE_TITLE: &str = "小说阅读器";

/// 路径段转义集：控制字符之外再加在 URL 中有结构含义的字符
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// HTML 文本转义
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// 路径段百分号转义
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// 链接属性值：先做路径段转义，再做属性值转义
fn href_segment(segment: &str) -> String {
    escape_html(&encode_segment(segment))
}

/// 页面骨架：头部控制条 + 主内容区 + 页脚
fn page_shell(main: &str) -> String {
    let mut html = String::with_capacity(main.len() + 1024);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"zh-CN\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("<title>{}</title>\n", SITE_TITLE));
    html.push_str("<link rel=\"stylesheet\" href=\"/static/css/style.css\">\n");
    html.push_str("<script src=\"/static/js/app.js\" defer></script>\n");
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");
    html.push_str("<header class=\"header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", SITE_TITLE));
    html.push_str("<div class=\"header-controls\">\n");
    html.push_str("<button id=\"dark-mode-toggle\">深色模式</button>\n");
    html.push_str("<button id=\"font-decrease\">字体减小</button>\n");
    html.push_str("<button id=\"font-increase\">字体增大</button>\n");
    html.push_str("<button id=\"add-bookmark\">添加书签</button>\n");
    html.push_str("</div>\n</header>\n");
    html.push_str("<main class=\"main-content\">\n");
    html.push_str(main);
    html.push_str("</main>\n");
    html.push_str("<footer class=\"footer\"><p>© 2025 小说阅读器</p></footer>\n");
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// 首页：小说列表
pub fn index_page(novels: &[NovelListItem]) -> String {
    let mut main = String::new();
    main.push_str("<section class=\"novel-list\">\n<h2>小说列表</h2>\n<ul class=\"novel-list\">\n");

    if novels.is_empty() {
        main.push_str("<li>暂无小说，请将小说ZIP文件放入书库目录</li>\n");
    } else {
        for novel in novels {
            main.push_str(&format!(
                "<li><a href=\"/novel/{}\">{}</a></li>\n",
                href_segment(&novel.name),
                escape_html(&novel.name)
            ));
        }
    }

    main.push_str("</ul>\n</section>\n");
    page_shell(&main)
}

/// 目录页：章节列表
pub fn chapter_list_page(list: &ChapterListResponse) -> String {
    let mut main = String::new();
    main.push_str("<section class=\"chapter-list\">\n");
    main.push_str(&format!("<h2>{}</h2>\n", escape_html(&list.novel_name)));
    main.push_str("<ul class=\"chapter-list\">\n");

    if list.chapter_titles.is_empty() {
        main.push_str("<li>暂无章节内容</li>\n");
    } else {
        let novel_segment = href_segment(&list.novel_name);
        for title in &list.chapter_titles {
            main.push_str(&format!(
                "<li><a href=\"/novel/{}/{}\">{}</a></li>\n",
                novel_segment,
                href_segment(title),
                escape_html(title)
            ));
        }
    }

    main.push_str("</ul>\n</section>\n");
    page_shell(&main)
}

/// 阅读页：章节正文 + 上一章/返回目录/下一章导航
pub fn chapter_page(detail: &ChapterDetailResponse) -> String {
    let novel_segment = href_segment(&detail.novel_name);

    let mut main = String::new();
    main.push_str("<section class=\"chapter-content\">\n");
    main.push_str(&format!("<h2>{}</h2>\n", escape_html(&detail.title)));
    main.push_str(&format!(
        "<p class=\"chapter-position\">{} / {}</p>\n",
        detail.index + 1,
        detail.total
    ));

    main.push_str("<div class=\"content\">\n");
    for paragraph in &detail.paragraphs {
        main.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    main.push_str("</div>\n");

    main.push_str("<div class=\"chapter-navigation\">\n");
    main.push_str("<a href=\"/\" class=\"home-link\">返回首页</a>\n");
    if let Some(prev) = &detail.prev_title {
        main.push_str(&format!(
            "<a href=\"/novel/{}/{}\" class=\"prev-chapter\">上一章</a>\n",
            novel_segment,
            href_segment(prev)
        ));
    }
    main.push_str(&format!(
        "<a href=\"/novel/{}\" class=\"toc-link\">返回目录</a>\n",
        novel_segment
    ));
    if let Some(next) = &detail.next_title {
        main.push_str(&format!(
            "<a href=\"/novel/{}/{}\" class=\"next-chapter\">下一章</a>\n",
            novel_segment,
            href_segment(next)
        ));
    }
    main.push_str("</div>\n</section>\n");

    page_shell(&main)
}

/// 错误页
pub fn error_page(status: u16, message: &str) -> String {
    let mut main = String::new();
    main.push_str("<section class=\"error-page\">\n");
    main.push_str(&format!("<h2>错误 {}</h2>\n", status));
    main.push_str(&format!("<p>{}</p>\n", escape_html(message)));
    main.push_str("<a href=\"/\">返回首页</a>\n");
    main.push_str("</section>\n");
    page_shell(&main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_markup_chars() {
        assert_eq!(
            escape_html("a<b>&\"c'"),
            "a&lt;b&gt;&amp;&quot;c&#39;"
        );
        assert_eq!(escape_html("普通文本"), "普通文本");
    }

    #[test]
    fn test_encode_segment_escapes_space_and_slash() {
        let encoded = encode_segment("第1章 a/b");
        assert!(encoded.contains("%20"));
        assert!(encoded.contains("%2F"));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_index_page_links_and_escaping() {
        let novels = vec![NovelListItem {
            name: "斗破 <苍穹>".to_string(),
            file_name: "斗破 <苍穹>.zip".to_string(),
            modified: None,
        }];
        let html = index_page(&novels);

        // 显示名转义，链接段转义
        assert!(html.contains("斗破 &lt;苍穹&gt;"));
        assert!(html.contains("href=\"/novel/"));
        assert!(html.contains("%20"));
        assert!(!html.contains("<苍穹>"));
    }

    #[test]
    fn test_index_page_empty_hint() {
        let html = index_page(&[]);
        assert!(html.contains("暂无小说"));
    }

    #[test]
    fn test_chapter_list_page_empty_hint() {
        let list = ChapterListResponse {
            novel_name: "某书".to_string(),
            chapter_titles: Vec::new(),
            total: 0,
            resolved_at: "2025-01-01T00:00:00+00:00".to_string(),
        };
        let html = chapter_list_page(&list);
        assert!(html.contains("暂无章节内容"));
    }

    #[test]
    fn test_chapter_page_navigation_on_first_chapter() {
        let detail = ChapterDetailResponse {
            novel_name: "某书".to_string(),
            title: "第一章 开端".to_string(),
            paragraphs: vec!["正文第一段。".to_string()],
            index: 0,
            total: 2,
            prev_title: None,
            next_title: Some("第二章 再起".to_string()),
        };
        let html = chapter_page(&detail);

        assert!(!html.contains("上一章"));
        assert!(html.contains("下一章"));
        assert!(html.contains("返回目录"));
        assert!(html.contains("返回首页"));
        assert!(html.contains("<p>正文第一段。</p>"));
        assert!(html.contains("<p class=\"chapter-position\">1 / 2</p>"));
    }

    #[test]
    fn test_chapter_page_navigation_on_last_chapter() {
        let detail = ChapterDetailResponse {
            novel_name: "某书".to_string(),
            title: "第二章 再起".to_string(),
            paragraphs: vec!["结尾。".to_string()],
            index: 1,
            total: 2,
            prev_title: Some("第一章 开端".to_string()),
            next_title: None,
        };
        let html = chapter_page(&detail);

        assert!(html.contains("上一章"));
        assert!(!html.contains("下一章"));
        assert!(html.contains("<p class=\"chapter-position\">2 / 2</p>"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error_page(404, "Novel not found: <x>");
        assert!(html.contains("错误 404"));
        assert!(html.contains("Novel not found: &lt;x&gt;"));
    }
}

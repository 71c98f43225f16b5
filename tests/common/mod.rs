//! 脚本化的浏览器会话，用于在没有真实浏览器的情况下测试抓取流程

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use filmography_crawler::error::{AppError, AppResult};
use filmography_crawler::infrastructure::js_executor::{SCROLL_HEIGHT_JS, SCROLL_TO_BOTTOM_JS};
use filmography_crawler::{PageSession, SessionFactory};
use serde_json::{json, Value as JsonValue};

pub const HOST: &str = "http://letterboxd.com";

/// 一个模拟页面
#[derive(Debug, Clone)]
pub struct FakePage {
    pub html: String,
    /// 页面上"已经出现"的选择器
    pub ready: Vec<&'static str>,
    /// 依次返回的页面高度，读完后重复最后一个
    pub heights: Vec<u64>,
    /// 导航到该页面时 panic
    pub panics: bool,
}

impl FakePage {
    pub fn listing(paths: &[&str]) -> Self {
        let items: String = paths
            .iter()
            .map(|path| {
                format!(
                    r#"<li class="tooltip poster-container"><div class="react-component poster film-poster" data-film-link="{}"></div></li>"#,
                    path
                )
            })
            .collect();
        Self {
            html: format!(
                r#"<html><body><div class="really-lazy-load"></div><ul class="poster-list -p150 -grid -constrained clear">{}</ul></body></html>"#,
                items
            ),
            ready: vec![".really-lazy-load"],
            heights: vec![1000],
            panics: false,
        }
    }

    pub fn film(name: &str, year: &str, original: Option<&str>) -> Self {
        let em = original
            .map(|o| format!("<p><em>{}</em></p>", o))
            .unwrap_or_default();
        Self {
            html: format!(
                r#"<html><body><section id="featured-film-header"><h1 class="headline-1 js-widont prettify">{}</h1><p><small class="number"><a>{}</a></small></p>{}</section></body></html>"#,
                name, year, em
            ),
            ready: vec!["#featured-film-header"],
            heights: vec![1000],
            panics: false,
        }
    }

    /// 标记元素一直没有出现
    pub fn never_ready(mut self) -> Self {
        self.ready.clear();
        self
    }

    pub fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    pub fn with_heights(mut self, heights: &[u64]) -> Self {
        self.heights = heights.to_vec();
        self
    }
}

/// 模拟站点：URL → 页面
#[derive(Debug, Default)]
pub struct FakeSite {
    pages: HashMap<String, FakePage>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, page: FakePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }
}

/// 会话计数器，所有会话共享
#[derive(Debug, Default)]
pub struct Counters {
    pub opened: AtomicUsize,
    pub closed: AtomicUsize,
    pub scrolls: AtomicUsize,
    pub height_reads: AtomicUsize,
}

pub struct ScriptedSession {
    site: Arc<FakeSite>,
    counters: Arc<Counters>,
    current: Mutex<Option<FakePage>>,
    height_cursor: AtomicUsize,
}

impl ScriptedSession {
    pub fn new(site: Arc<FakeSite>, counters: Arc<Counters>) -> Self {
        Self {
            site,
            counters,
            current: Mutex::new(None),
            height_cursor: AtomicUsize::new(0),
        }
    }

    fn current(&self) -> Option<FakePage> {
        self.current.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSession for ScriptedSession {
    async fn goto(&self, url: &str) -> AppResult<()> {
        let page = self
            .site
            .pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::navigation_failed(url, "net::ERR_NAME_NOT_RESOLVED"))?;
        if page.panics {
            panic!("页面崩溃: {}", url);
        }
        *self.current.lock().unwrap() = Some(page);
        self.height_cursor.store(0, Ordering::SeqCst);
        Ok(())
    }

    async fn evaluate(&self, script: &str) -> AppResult<JsonValue> {
        if script == SCROLL_HEIGHT_JS {
            self.counters.height_reads.fetch_add(1, Ordering::SeqCst);
            let heights = self.current().map(|p| p.heights).unwrap_or_default();
            let cursor = self.height_cursor.fetch_add(1, Ordering::SeqCst);
            let height = heights
                .get(cursor)
                .or_else(|| heights.last())
                .copied()
                .unwrap_or(0);
            return Ok(json!(height));
        }
        if script == SCROLL_TO_BOTTOM_JS {
            self.counters.scrolls.fetch_add(1, Ordering::SeqCst);
            return Ok(JsonValue::Null);
        }
        Ok(JsonValue::Null)
    }

    async fn wait_for_element(&self, selector: &str, _timeout: Duration) -> AppResult<bool> {
        Ok(self
            .current()
            .map(|p| p.ready.iter().any(|ready| *ready == selector))
            .unwrap_or(false))
    }

    async fn content(&self) -> AppResult<String> {
        Ok(self.current().map(|p| p.html).unwrap_or_default())
    }

    async fn close(&self) -> AppResult<()> {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct ScriptedFactory {
    site: Arc<FakeSite>,
    pub counters: Arc<Counters>,
    /// 成功打开这么多个会话后，之后的打开都会 panic
    open_limit: Option<usize>,
    open_attempts: AtomicUsize,
}

impl ScriptedFactory {
    pub fn new(site: FakeSite) -> Self {
        Self {
            site: Arc::new(site),
            counters: Arc::new(Counters::default()),
            open_limit: None,
            open_attempts: AtomicUsize::new(0),
        }
    }

    pub fn panicking_after(mut self, opens: usize) -> Self {
        self.open_limit = Some(opens);
        self
    }

    pub fn session(&self) -> ScriptedSession {
        ScriptedSession::new(Arc::clone(&self.site), Arc::clone(&self.counters))
    }
}

#[async_trait]
impl SessionFactory for ScriptedFactory {
    async fn open_session(&self) -> AppResult<Box<dyn PageSession>> {
        let attempt = self.open_attempts.fetch_add(1, Ordering::SeqCst);
        if self.open_limit.is_some_and(|limit| attempt >= limit) {
            panic!("无法创建标签页");
        }
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(self.session()))
    }
}

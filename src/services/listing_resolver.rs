//! 作品列表解析服务 - 业务能力层
//!
//! 只负责"把一个导演列表页变成电影详情页链接"，不关心流程

use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppResult, ParseError};
use crate::infrastructure::{JsExecutor, PageSession};

/// 列表应用挂载完成的标记
pub const LISTING_READY_SELECTOR: &str = ".really-lazy-load";

const POSTER_LIST_SELECTOR: &str = "ul.poster-list.-p150.-grid.-constrained.clear";
const POSTER_ITEM_SELECTOR: &str = "li.tooltip.poster-container";
const POSTER_DIV_SELECTOR: &str = "div.react-component.poster.film-poster";
const FILM_LINK_ATTR: &str = "data-film-link";

/// 滚动加载的停止条件
#[derive(Debug, Clone)]
pub struct ScrollPolicy {
    /// 每次滚动后的等待时间
    pub pause: Duration,
    /// 高度连续多少次不变后停止
    pub stable_checks: usize,
    /// 最多滚动次数
    pub max_rounds: usize,
}

impl ScrollPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            pause: config.scroll_pause(),
            stable_checks: config.scroll_stable_checks.max(1),
            max_rounds: config.max_scroll_rounds,
        }
    }
}

/// 作品列表解析服务
///
/// 职责：
/// - 等待列表页挂载
/// - 滚动到底直到页面高度稳定
/// - 从渲染完成的 HTML 中提取电影链接
#[derive(Debug, Clone)]
pub struct ListingResolver {
    film_host: String,
    ready_timeout: Duration,
    scroll: ScrollPolicy,
}

impl ListingResolver {
    pub fn new(film_host: impl Into<String>, ready_timeout: Duration, scroll: ScrollPolicy) -> Self {
        Self {
            film_host: film_host.into(),
            ready_timeout,
            scroll,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.film_host.clone(),
            config.listing_timeout(),
            ScrollPolicy::from_config(config),
        )
    }

    /// 解析导演列表页
    ///
    /// # 返回
    /// 电影详情页的绝对链接；列表页超时未挂载时返回空列表
    pub async fn resolve(&self, session: &dyn PageSession, listing_url: &str) -> AppResult<Vec<String>> {
        session.goto(listing_url).await?;

        if !session
            .wait_for_element(LISTING_READY_SELECTOR, self.ready_timeout)
            .await?
        {
            warn!("⏱️ 等待列表页加载超时: {}", listing_url);
            return Ok(Vec::new());
        }

        let rounds = self.scroll_until_stable(&JsExecutor::new(session)).await?;
        debug!("列表页滚动 {} 次后高度稳定: {}", rounds, listing_url);

        let html = session.content().await?;
        let links = extract_film_links(&html, &self.film_host)?;
        info!("✓ 列表页解析完成，找到 {} 部电影: {}", links.len(), listing_url);

        Ok(links)
    }

    /// 反复滚动到底部，直到页面高度连续 `stable_checks` 次不变
    ///
    /// # 返回
    /// 实际滚动的次数
    pub async fn scroll_until_stable(&self, executor: &JsExecutor<'_>) -> AppResult<usize> {
        let mut last_height = executor.scroll_height().await?;
        let mut stable = 0;
        let mut rounds = 0;

        while rounds < self.scroll.max_rounds {
            executor.scroll_to_bottom().await?;
            rounds += 1;
            sleep(self.scroll.pause).await;

            let new_height = executor.scroll_height().await?;
            debug!("第 {} 次滚动: 高度 {} → {}", rounds, last_height, new_height);

            if new_height == last_height {
                stable += 1;
                if stable >= self.scroll.stable_checks {
                    return Ok(rounds);
                }
            } else {
                stable = 0;
                last_height = new_height;
            }
        }

        warn!("已达到最大滚动次数 {}，停止滚动", self.scroll.max_rounds);
        Ok(rounds)
    }
}

/// 从列表页 HTML 中提取电影详情页链接
///
/// 只读取第一个海报列表；缺少海报节点或链接属性的条目会被跳过
pub fn extract_film_links(html: &str, film_host: &str) -> Result<Vec<String>, ParseError> {
    let document = Html::parse_document(html);
    let list_selector = parse_selector(POSTER_LIST_SELECTOR)?;
    let item_selector = parse_selector(POSTER_ITEM_SELECTOR)?;
    let poster_selector = parse_selector(POSTER_DIV_SELECTOR)?;

    let Some(list) = document.select(&list_selector).next() else {
        debug!("页面中没有海报列表");
        return Ok(Vec::new());
    };

    let links = list
        .select(&item_selector)
        .filter_map(|item| film_link(item, &poster_selector))
        .map(|path| format!("{}{}", film_host, path))
        .collect();

    Ok(links)
}

fn film_link<'a>(item: ElementRef<'a>, poster_selector: &Selector) -> Option<&'a str> {
    let poster = item.select(poster_selector).next()?;
    let link = poster.value().attr(FILM_LINK_ATTR);
    if link.is_none() {
        debug!("海报缺少 {} 属性，跳过", FILM_LINK_ATTR);
    }
    link
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

//! 电影详情抓取服务 - 业务能力层
//!
//! 只负责"从一个详情页读出电影信息"

use std::time::Duration;

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppResult, ParseError};
use crate::infrastructure::PageSession;
use crate::models::Film;
use crate::services::listing_resolver::parse_selector;

/// 详情页头部渲染完成的标记
pub const DETAIL_READY_SELECTOR: &str = "#featured-film-header";

const HEADER_SELECTOR: &str = "section#featured-film-header";
const TITLE_SELECTOR: &str = "h1.headline-1.js-widont.prettify";
const RELEASE_DATE_SELECTOR: &str = "small.number";
const ORIGINAL_NAME_SELECTOR: &str = "em";

/// 电影详情抓取服务
#[derive(Debug, Clone)]
pub struct DetailScraper {
    ready_timeout: Duration,
}

impl DetailScraper {
    pub fn new(ready_timeout: Duration) -> Self {
        Self { ready_timeout }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.detail_timeout())
    }

    /// 抓取单部电影
    ///
    /// # 返回
    /// - `Ok(Some(film))`: 抓取成功
    /// - `Ok(None)`: 头部超时未出现，或页面没有头部（空记录）
    /// - `Err(_)`: 导航失败，或头部缺少标题 / 日期
    pub async fn scrape(&self, session: &dyn PageSession, film_url: &str) -> AppResult<Option<Film>> {
        session.goto(film_url).await?;

        if !session
            .wait_for_element(DETAIL_READY_SELECTOR, self.ready_timeout)
            .await?
        {
            warn!("⏱️ 等待电影详情加载超时: {}", film_url);
            return Ok(None);
        }

        let html = session.content().await?;
        let film = parse_film_detail(&html)?;
        if let Some(film) = &film {
            debug!("抓取到电影: {} ({})", film.name, film.release_date);
        }
        Ok(film)
    }
}

/// 从详情页 HTML 中解析电影信息
pub fn parse_film_detail(html: &str) -> Result<Option<Film>, ParseError> {
    let document = Html::parse_document(html);
    let header_selector = parse_selector(HEADER_SELECTOR)?;

    let Some(header) = document.select(&header_selector).next() else {
        return Ok(None);
    };

    let name = required_text(header, TITLE_SELECTOR)?;
    let release_date = required_text(header, RELEASE_DATE_SELECTOR)?;
    let original_name = optional_text(header, ORIGINAL_NAME_SELECTOR)?;

    Ok(Some(Film {
        name,
        release_date,
        original_name,
    }))
}

fn required_text(scope: ElementRef<'_>, selector: &str) -> Result<String, ParseError> {
    optional_text(scope, selector)?.ok_or_else(|| ParseError::MissingElement {
        selector: selector.to_string(),
    })
}

fn optional_text(scope: ElementRef<'_>, selector: &str) -> Result<Option<String>, ParseError> {
    let selector = parse_selector(selector)?;
    Ok(scope
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string()))
}

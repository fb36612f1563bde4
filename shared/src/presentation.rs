//! 展示层辅助函数
//!
//! 图片地址解析、图库、价格与日期格式化。与 DOM 无关，方便测试。

use chrono::{DateTime, Utc};

use crate::query::encode_component;
use crate::{Item, Rental};

/// 目前没有评分数据，详情页固定展示 4 星
pub const STATIC_RATING: u8 = 4;
pub const RATING_MAX: u8 = 5;

/// 图片尺寸（占位图使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

pub const CARD_IMAGE: ImageSize = ImageSize { width: 640, height: 480 };
pub const MODAL_IMAGE: ImageSize = ImageSize { width: 800, height: 600 };

/// 根据物品名生成占位图地址
pub fn placeholder_image(name: &str, size: ImageSize) -> String {
    format!(
        "https://source.unsplash.com/{}x{}/?{}",
        size.width,
        size.height,
        encode_component(name)
    )
}

/// 解析图片引用
///
/// - 绝对地址（http/https/blob/data）原样使用
/// - 以 `/` 开头的相对地址拼接到 API 基地址
/// - 其他情况（空、无法识别）返回 None
pub fn resolve_image(reference: Option<&str>, api_base: &str) -> Option<String> {
    let reference = reference.map(str::trim).filter(|r| !r.is_empty())?;
    const ABSOLUTE: [&str; 4] = ["http://", "https://", "blob:", "data:"];
    if ABSOLUTE.iter().any(|p| reference.starts_with(p)) {
        Some(reference.to_string())
    } else if reference.starts_with('/') {
        Some(format!("{}{}", api_base.trim_end_matches('/'), reference))
    } else {
        None
    }
}

/// 卡片 / 快速预览使用的封面
pub fn cover_image(item: &Item, api_base: &str, size: ImageSize) -> String {
    let cover = item.image_urls.first().map(String::as_str).or(item.image_url.as_deref());
    resolve_image(cover, api_base).unwrap_or_else(|| placeholder_image(&item.name, size))
}

/// 详情页图库：真实图片优先，否则退化为单张封面或占位图
pub fn gallery(item: &Item, api_base: &str, size: ImageSize) -> Vec<String> {
    let images: Vec<String> = item
        .image_urls
        .iter()
        .filter_map(|url| resolve_image(Some(url), api_base))
        .collect();
    if images.is_empty() {
        vec![cover_image(item, api_base, size)]
    } else {
        images
    }
}

pub fn format_price(price_per_h: f64) -> String {
    format!("{:.2} €/h", price_per_h)
}

pub fn format_deposit(amount: f64) -> String {
    format!("{:.2} €", amount)
}

/// 每颗星是否点亮
pub fn rating_stars(value: u8) -> [bool; RATING_MAX as usize] {
    std::array::from_fn(|i| (i as u8) < value)
}

pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M").to_string()
}

/// 租期描述，如 `01/01/2025 10:00 → 01/01/2025 12:00 (2 h)`
pub fn rental_period(rental: &Rental) -> String {
    format!(
        "{} → {} ({} h)",
        format_datetime(&rental.start_at),
        format_datetime(&rental.end_at),
        rental.hours()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(image_url: Option<&str>, image_urls: &[&str]) -> Item {
        Item {
            id: 1,
            name: "Taladro percutor".to_string(),
            description: None,
            price_per_h: 4.5,
            available: true,
            image_url: image_url.map(str::to_string),
            image_urls: image_urls.iter().map(|s| s.to_string()).collect(),
            categories: vec![],
            owner_id: None,
        }
    }

    #[test]
    fn test_gallery_falls_back_to_placeholder() {
        let g = gallery(&item(None, &[]), "", MODAL_IMAGE);
        assert_eq!(
            g,
            vec!["https://source.unsplash.com/800x600/?Taladro%20percutor".to_string()]
        );
    }

    #[test]
    fn test_gallery_uses_primary_image_when_no_list() {
        let g = gallery(&item(Some("http://cdn/a.jpg"), &[]), "", MODAL_IMAGE);
        assert_eq!(g, vec!["http://cdn/a.jpg".to_string()]);
    }

    #[test]
    fn test_gallery_prefers_image_list() {
        let g = gallery(
            &item(Some("http://cdn/a.jpg"), &["http://cdn/b.jpg", "/uploads/c.jpg"]),
            "http://localhost:8000/",
            MODAL_IMAGE,
        );
        assert_eq!(
            g,
            vec![
                "http://cdn/b.jpg".to_string(),
                "http://localhost:8000/uploads/c.jpg".to_string()
            ]
        );
    }

    #[test]
    fn test_resolve_image_rejects_unknown_references() {
        assert_eq!(resolve_image(Some(""), ""), None);
        assert_eq!(resolve_image(Some("foto.png"), ""), None);
        assert_eq!(resolve_image(None, ""), None);
        assert_eq!(
            resolve_image(Some("blob:http://x/1"), "").as_deref(),
            Some("blob:http://x/1")
        );
    }

    #[test]
    fn test_cover_prefers_first_of_list() {
        let it = item(Some("http://cdn/a.jpg"), &["http://cdn/b.jpg"]);
        assert_eq!(cover_image(&it, "", CARD_IMAGE), "http://cdn/b.jpg");
    }

    #[test]
    fn test_price_and_rating_formatting() {
        assert_eq!(format_price(4.5), "4.50 €/h");
        assert_eq!(format_deposit(20.0), "20.00 €");
        assert_eq!(rating_stars(STATIC_RATING), [true, true, true, true, false]);
    }
}

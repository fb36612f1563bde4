//! 发布表单校验
//!
//! 规则以表驱动的方式声明：每条规则 = 字段 + 检查函数，统一执行，
//! 收集到的错误按字段展示在表单中。全部通过后再做值转换（价格归一化等）。

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::NewItem;

// =========================================================
// 限制常量
// =========================================================

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 80;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
/// 图片大小上限（不含）
pub const IMAGE_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// 最多两位小数，允许逗号或点作为小数点
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+([.,]\d{1,2})?$").expect("price pattern is valid"));

// =========================================================
// 表单输入
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Categories,
    Image,
}

/// 用户选择的图片的元信息（不含内容本身）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMeta {
    pub size: u64,
    pub content_type: String,
}

/// 表单原始输入
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub categories: Vec<u32>,
    pub image: Option<ImageMeta>,
}

/// 校验通过、已归一化的物品数据
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub name: String,
    pub description: Option<String>,
    pub price_per_h: f64,
    pub categories: Vec<u32>,
}

impl ValidItem {
    /// 组合上传得到的图片地址，生成创建请求
    pub fn into_payload(self, image_url: Option<String>) -> NewItem {
        NewItem {
            name: self.name,
            description: self.description,
            price_per_h: self.price_per_h,
            categories: self.categories,
            image_url,
        }
    }
}

// =========================================================
// 错误集合
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 每个字段只保留第一条错误
    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, msg)| format!("{:?}: {}", field, msg))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

// =========================================================
// 规则表
// =========================================================

type Check = fn(&ItemDraft) -> Result<(), &'static str>;

const RULES: &[(Field, Check)] = &[
    (Field::Name, check_name_min),
    (Field::Name, check_name_max),
    (Field::Description, check_description),
    (Field::Price, check_price_format),
    (Field::Price, check_price_positive),
    (Field::Categories, check_categories),
    (Field::Image, check_image_type),
    (Field::Image, check_image_size),
];

fn check_name_min(d: &ItemDraft) -> Result<(), &'static str> {
    if d.name.trim().chars().count() < NAME_MIN_CHARS {
        return Err("Mínimo 3 caracteres");
    }
    Ok(())
}

fn check_name_max(d: &ItemDraft) -> Result<(), &'static str> {
    if d.name.trim().chars().count() > NAME_MAX_CHARS {
        return Err("Máximo 80 caracteres");
    }
    Ok(())
}

fn check_description(d: &ItemDraft) -> Result<(), &'static str> {
    if d.description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err("Máximo 500 caracteres");
    }
    Ok(())
}

fn check_price_format(d: &ItemDraft) -> Result<(), &'static str> {
    parse_price(&d.price).map(|_| ()).ok_or("Precio inválido")
}

fn check_price_positive(d: &ItemDraft) -> Result<(), &'static str> {
    // 格式错误由上一条规则报告
    match parse_price(&d.price) {
        Some(v) if v <= 0.0 => Err("El precio debe ser mayor que 0"),
        _ => Ok(()),
    }
}

fn check_categories(d: &ItemDraft) -> Result<(), &'static str> {
    if d.categories.is_empty() {
        return Err("Selecciona al menos una categoría");
    }
    Ok(())
}

fn check_image_type(d: &ItemDraft) -> Result<(), &'static str> {
    match &d.image {
        Some(img) if !img.content_type.starts_with("image/") => Err("Solo se permiten imágenes"),
        _ => Ok(()),
    }
}

fn check_image_size(d: &ItemDraft) -> Result<(), &'static str> {
    match &d.image {
        Some(img) if img.size >= IMAGE_MAX_BYTES => Err("Máx. 5 MB"),
        _ => Ok(()),
    }
}

// =========================================================
// 转换
// =========================================================

/// 解析价格输入：`"3,5"` → 3.5, `"3.50"` → 3.5
///
/// 输入按原样匹配，首尾空白视为格式错误。溢出为无穷大的数字同样无效。
pub fn parse_price(input: &str) -> Option<f64> {
    if !PRICE_PATTERN.is_match(input) {
        return None;
    }
    input
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// 执行全部规则；全部通过则返回归一化后的数据
pub fn validate(draft: &ItemDraft) -> Result<ValidItem, FieldErrors> {
    let mut errors = FieldErrors::default();
    for (field, check) in RULES {
        if let Err(message) = check(draft) {
            errors.insert(*field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let description = draft.description.trim();
    Ok(ValidItem {
        name: draft.name.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        price_per_h: parse_price(&draft.price).unwrap_or_default(),
        categories: draft.categories.clone(),
    })
}

#[cfg(test)]
mod tests;

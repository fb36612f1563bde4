//! 目录筛选条件与查询串构建
//!
//! `FilterState` 是纯客户端的值对象，每次用户交互都会整体重建，
//! 并且总是完整地序列化为查询串。序列化结果同时用作列表的刷新 key，
//! 所以必须是规范化的：语义相同的筛选条件得到完全相同的字符串。

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// 与 `application/x-www-form-urlencoded` 一致的保留字符集
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// =========================================================
// 排序
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    Name,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// 排序规格：一个字段 + 一个方向，不可能产生冲突的参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub const PRICE_ASC: SortOrder = SortOrder::new(SortField::Price, SortDirection::Asc);
    pub const PRICE_DESC: SortOrder = SortOrder::new(SortField::Price, SortDirection::Desc);
    pub const NAME_ASC: SortOrder = SortOrder::new(SortField::Name, SortDirection::Asc);
    pub const NAME_DESC: SortOrder = SortOrder::new(SortField::Name, SortDirection::Desc);

    /// 下拉框中提供的选项
    pub const OPTIONS: [(SortOrder, &'static str); 4] = [
        (SortOrder::PRICE_ASC, "Precio: menor a mayor"),
        (SortOrder::PRICE_DESC, "Precio: mayor a menor"),
        (SortOrder::NAME_ASC, "Nombre: A-Z"),
        (SortOrder::NAME_DESC, "Nombre: Z-A"),
    ];

    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// 解析 `"<field>_<direction>"` 形式的规格
    ///
    /// 只写字段（如 `"name"`）时按升序处理；无法识别的输入返回 None。
    pub fn parse(spec: &str) -> Option<Self> {
        let (field, direction) = match spec.trim().split_once('_') {
            Some((field, dir)) => (field, Some(dir)),
            None => (spec.trim(), None),
        };
        let field = match field {
            "price" => SortField::Price,
            "name" => SortField::Name,
            _ => return None,
        };
        let direction = match direction {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => return None,
        };
        Some(Self::new(field, direction))
    }

    /// 下拉框使用的 value
    pub fn key(&self) -> String {
        format!("{}_{}", self.field.as_str(), self.direction.as_str())
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// =========================================================
// 筛选条件
// =========================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub categories: Vec<u32>,
    pub available: Option<bool>,
    pub order: Option<SortOrder>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// 切换某个分类的选中状态，保持用户选择的先后顺序
    pub fn toggle_category(&mut self, id: u32) {
        if let Some(pos) = self.categories.iter().position(|c| *c == id) {
            self.categories.remove(pos);
        } else {
            self.categories.push(id);
        }
    }

    /// 生成规范化的有序参数列表
    ///
    /// 顺序固定为 name, min_price, max_price, available, categories*, order_by, order_dir。
    /// 缺省或为空的字段不会出现。
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(min) = self.min_price.and_then(price_value) {
            pairs.push(("min_price", min));
        }
        if let Some(max) = self.max_price.and_then(price_value) {
            pairs.push(("max_price", max));
        }
        if let Some(available) = self.available {
            pairs.push(("available", available.to_string()));
        }
        for id in &self.categories {
            pairs.push(("categories", id.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order_by", order.field.as_str().to_string()));
            pairs.push(("order_dir", order.direction.as_str().to_string()));
        }

        pairs
    }

    /// 生成查询串（不带前导 `?`）
    pub fn to_query_string(&self) -> String {
        form_urlencode(self.to_query_pairs())
    }
}

/// 价格的规范文本；非有限值不出现，`-0` 与 `0` 写法相同
fn price_value(v: f64) -> Option<String> {
    v.is_finite().then(|| (v + 0.0).to_string())
}

/// 将键值对编码为 `k=v&k=v`
pub fn form_urlencode<K, V, I>(pairs: I) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode_component(k.as_ref()),
                encode_component(v.as_ref())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// 编码单个 URL 组件
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

/// 拼接 path 与查询串
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests;

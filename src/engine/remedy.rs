// ==========================================
// 사주 운명 프로파일 엔진 - 补益选取引擎
// ==========================================
// 职责: 按首要缺失五行选取补益方案
// 红线: 缺失列表为空时固定回落到火方案
//       (文档化业务规则, 不是从证据缺失推断出来的)
// ==========================================

use crate::domain::remedy::RemedySchema;
use crate::domain::types::Element;

/// 缺失列表为空时的固定回落五行
pub const DEFAULT_REMEDY_ELEMENT: Element = Element::Fire;

// ==========================================
// RemedySelector - 补益选取引擎
// ==========================================
pub struct RemedySelector;

impl RemedySelector {
    /// 取首要缺失五行的方案; 列表为空 → 火方案
    ///
    /// 对封闭五行集全定义, 无错误路径
    pub fn select(missing: &[Element]) -> RemedySchema {
        let element = missing.first().copied().unwrap_or(DEFAULT_REMEDY_ELEMENT);
        RemedySchema::for_element(element)
    }
}

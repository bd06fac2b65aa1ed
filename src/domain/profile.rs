// ==========================================
// 사주 운명 프로파일 엔진 - 运命档案
// ==========================================
// 交给下游生成/持久化/展示协作方的最终聚合对象
// 每次请求新建, 组装后不可变
// ==========================================

use crate::domain::pillars::{DayMaster, FourPillars};
use crate::domain::remedy::RemedySchema;
use crate::domain::rhythm::LifeRhythm;
use crate::domain::types::Element;
use crate::engine::element_balance::ElementBalance;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

// ==========================================
// 运命档案 (Destiny Profile)
// ==========================================
// 序列化格式: camelCase (下游 JSON 契约)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinyProfile {
    // ===== 展示字段 (不参与计算) =====
    pub name: String,
    pub birth_city: String,

    // ===== 已应用默认值的出生时刻 =====
    pub birth_date: NaiveDate,
    pub birth_time: NaiveTime,
    pub birth_time_unknown: bool,

    // ===== 排盘结果 =====
    pub four_pillars: FourPillars,
    pub day_master: DayMaster,
    /// 年支生肖
    pub animal: &'static str,

    // ===== 五行与补益 =====
    pub element_balance: ElementBalance,
    /// 缺失五行, 按规范优先序排列 (可为空)
    pub missing_elements: Vec<Element>,
    pub remedy: RemedySchema,

    // ===== 人生节律 =====
    pub life_rhythm: LifeRhythm,
}

impl DestinyProfile {
    /// 首要缺失五行 (补益方案选取依据)
    pub fn primary_missing_element(&self) -> Option<Element> {
        self.missing_elements.first().copied()
    }
}

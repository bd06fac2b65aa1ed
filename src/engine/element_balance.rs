// ==========================================
// 사주 운명 프로파일 엔진 - 五行平衡引擎
// ==========================================
// 职责: 统计八字 (4干+4支) 的五行分布
// 不变量: 计数恒为非负且总和恰为 8 (按构造保证)
// 干/支→五行 两张封闭表由类型系统穷举, 不存在查不到的路径
// ==========================================

use crate::domain::pillars::FourPillars;
use crate::domain::types::Element;
use serde::Serialize;

// ==========================================
// 五行平衡 (Element Balance)
// ==========================================
// 序列化格式: {"Wood":1,"Fire":3,...} (下游 elements JSON 契约)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementBalance {
    #[serde(rename = "Wood")]
    wood: u8,
    #[serde(rename = "Fire")]
    fire: u8,
    #[serde(rename = "Earth")]
    earth: u8,
    #[serde(rename = "Metal")]
    metal: u8,
    #[serde(rename = "Water")]
    water: u8,
}

impl ElementBalance {
    /// 对四柱八字逐字归类计数
    pub fn analyze(pillars: &FourPillars) -> Self {
        let mut balance = Self {
            wood: 0,
            fire: 0,
            earth: 0,
            metal: 0,
            water: 0,
        };
        for element in pillars.elements() {
            *balance.slot_mut(element) += 1;
        }
        balance
    }

    fn slot_mut(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// 单一五行计数
    pub fn count(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// 总计数 (对合法四柱恒为 8)
    pub fn total(&self) -> u8 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// 缺失五行, 按规范优先序 (木火土金水) 排列
    ///
    /// 多个五行同时为零时, 规范序即平局裁决顺序
    pub fn missing(&self) -> Vec<Element> {
        Element::CANONICAL_ORDER
            .into_iter()
            .filter(|e| self.count(*e) == 0)
            .collect()
    }

    /// 五行俱全 (缺失列表为空当且仅当五行计数皆 ≥ 1)
    pub fn is_complete(&self) -> bool {
        Element::CANONICAL_ORDER.into_iter().all(|e| self.count(e) >= 1)
    }
}

// ==========================================
// 사주 운명 프로파일 엔진 - 领域类型定义
// ==========================================
// 五行 / 阴阳 / 十二长生 / 人生四季
// 红线: 全部为封闭枚举, 映射表用穷举 match 表达,
//       缺项是编译期错误而不是运行期意外
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 五行 (Five Elements)
// ==========================================
// 序列化格式: 英文名 (与下游生成/持久化协作方的 JSON 契约一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,  // 木
    Fire,  // 火
    Earth, // 土
    Metal, // 金
    Water, // 水
}

impl Element {
    /// 规范优先序 (木火土金水)
    ///
    /// 多个五行同时缺失时的唯一平局裁决顺序
    pub const CANONICAL_ORDER: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// 规范序下标 (0..5)
    pub fn index(&self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    /// 汉字表示
    pub fn hanzi(&self) -> char {
        match self {
            Element::Wood => '木',
            Element::Fire => '火',
            Element::Earth => '土',
            Element::Metal => '金',
            Element::Water => '水',
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Wood => write!(f, "Wood"),
            Element::Fire => write!(f, "Fire"),
            Element::Earth => write!(f, "Earth"),
            Element::Metal => write!(f, "Metal"),
            Element::Water => write!(f, "Water"),
        }
    }
}

// ==========================================
// 阴阳 (Polarity)
// ==========================================
// 十二长生轮盘的行走方向由日主阴阳决定: 阳顺行, 阴逆行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Polarity {
    Yang, // 阳
    Yin,  // 阴
}

impl Polarity {
    /// 轮盘行走方向的符号: 阳 +1, 阴 -1
    ///
    /// 方向规则参数化为单一符号, 禁止写成重复的正/反两套分支
    pub fn sign(&self) -> i32 {
        match self {
            Polarity::Yang => 1,
            Polarity::Yin => -1,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Yang => write!(f, "YANG"),
            Polarity::Yin => write!(f, "YIN"),
        }
    }
}

// ==========================================
// 十二长生 (Twelve Life Stages)
// ==========================================
// 轮盘顺序: 장생(0) → 목욕(1) → 관대(2) → 건록(3) → 제왕(4)
//          → 쇠(5) → 병(6) → 사(7) → 묘(8) → 절(9) → 태(10) → 양(11)
// 序列化格式: 韩文名 (下游展示层直接消费)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveStage {
    #[serde(rename = "장생")]
    Birth, // 长生
    #[serde(rename = "목욕")]
    Bath, // 沐浴
    #[serde(rename = "관대")]
    Dress, // 冠带
    #[serde(rename = "건록")]
    Peak, // 建禄
    #[serde(rename = "제왕")]
    Prosperity, // 帝旺
    #[serde(rename = "쇠")]
    Decline, // 衰
    #[serde(rename = "병")]
    Sickness, // 病
    #[serde(rename = "사")]
    Death, // 死
    #[serde(rename = "묘")]
    Grave, // 墓
    #[serde(rename = "절")]
    Cut, // 绝
    #[serde(rename = "태")]
    Embryo, // 胎
    #[serde(rename = "양")]
    Nourish, // 养
}

impl TwelveStage {
    /// 轮盘顺序 (下标 0..12)
    pub const WHEEL: [TwelveStage; 12] = [
        TwelveStage::Birth,
        TwelveStage::Bath,
        TwelveStage::Dress,
        TwelveStage::Peak,
        TwelveStage::Prosperity,
        TwelveStage::Decline,
        TwelveStage::Sickness,
        TwelveStage::Death,
        TwelveStage::Grave,
        TwelveStage::Cut,
        TwelveStage::Embryo,
        TwelveStage::Nourish,
    ];

    /// 轮盘下标 (0..12)
    pub fn index(&self) -> usize {
        match self {
            TwelveStage::Birth => 0,
            TwelveStage::Bath => 1,
            TwelveStage::Dress => 2,
            TwelveStage::Peak => 3,
            TwelveStage::Prosperity => 4,
            TwelveStage::Decline => 5,
            TwelveStage::Sickness => 6,
            TwelveStage::Death => 7,
            TwelveStage::Grave => 8,
            TwelveStage::Cut => 9,
            TwelveStage::Embryo => 10,
            TwelveStage::Nourish => 11,
        }
    }

    /// 由轮盘下标取阶段 (对 12 取模, 全定义)
    pub fn from_index(idx: i32) -> Self {
        Self::WHEEL[idx.rem_euclid(12) as usize]
    }

    /// 韩文阶段名
    pub fn hangul(&self) -> &'static str {
        match self {
            TwelveStage::Birth => "장생",
            TwelveStage::Bath => "목욕",
            TwelveStage::Dress => "관대",
            TwelveStage::Peak => "건록",
            TwelveStage::Prosperity => "제왕",
            TwelveStage::Decline => "쇠",
            TwelveStage::Sickness => "병",
            TwelveStage::Death => "사",
            TwelveStage::Grave => "묘",
            TwelveStage::Cut => "절",
            TwelveStage::Embryo => "태",
            TwelveStage::Nourish => "양",
        }
    }

    /// 固定能量分值表
    pub fn score(&self) -> u32 {
        match self {
            TwelveStage::Prosperity => 100,
            TwelveStage::Peak => 90,
            TwelveStage::Dress => 80,
            TwelveStage::Birth => 75,
            TwelveStage::Decline => 60,
            TwelveStage::Nourish => 50,
            TwelveStage::Embryo => 40,
            TwelveStage::Bath => 30,
            TwelveStage::Sickness => 20,
            TwelveStage::Death => 15,
            TwelveStage::Grave => 10,
            TwelveStage::Cut => 5,
        }
    }

    /// 绝/胎 两个终末阶段
    ///
    /// 无论分值如何一律归入겨울, 且使用专属描述文案 (显式特例, 不是可推导规则)
    pub fn is_dormant(&self) -> bool {
        matches!(self, TwelveStage::Cut | TwelveStage::Embryo)
    }
}

impl fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hangul())
    }
}

// ==========================================
// 人生四季 (Season Category)
// ==========================================
// 每个十年节点按能量归入四季之一
// 序列化格式: 韩文名 (下游展示层直接消费)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonCategory {
    #[serde(rename = "봄")]
    Spring,
    #[serde(rename = "여름")]
    Summer,
    #[serde(rename = "가을")]
    Autumn,
    #[serde(rename = "겨울")]
    Winter,
}

impl SeasonCategory {
    /// 韩文季节名
    pub fn hangul(&self) -> &'static str {
        match self {
            SeasonCategory::Spring => "봄",
            SeasonCategory::Summer => "여름",
            SeasonCategory::Autumn => "가을",
            SeasonCategory::Winter => "겨울",
        }
    }

    /// 季节标签 (固定文案)
    pub fn label(&self) -> &'static str {
        match self {
            SeasonCategory::Summer => "도약",
            SeasonCategory::Spring => "개화",
            SeasonCategory::Autumn => "갈무리",
            SeasonCategory::Winter => "심연",
        }
    }

    /// 季节级描述模板 (固定文案)
    pub fn description(&self) -> &'static str {
        match self {
            SeasonCategory::Summer => {
                "태양의 열기를 온몸으로 받아내는 시기입니다. 가장 뜨겁고 화려하게 당신의 세계를 확장하십시오."
            }
            SeasonCategory::Spring => {
                "움츠렸던 씨앗이 땅을 뚫고 나오는 시기입니다. 당신의 가능성이 처음으로 꽃을 피웁니다."
            }
            SeasonCategory::Autumn => {
                "결실을 맺고 소중한 것들을 분류하는 시기입니다. 당신의 삶이 한층 더 깊고 단단해집니다."
            }
            SeasonCategory::Winter => {
                "고요히 내면으로 침잠하여 다음 봄을 준비하는 시기입니다. 이 어둠은 당신을 삼키는 것이 아니라 품어주는 것입니다."
            }
        }
    }
}

impl fmt::Display for SeasonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hangul())
    }
}

/// 绝/胎 专属描述文案
///
/// 覆盖季节级模板, 逐字固定
pub const DORMANT_STAGE_DESCRIPTION: &str =
    "고요히 내면으로 침잠하여 다음 봄을 준비하는 시기입니다. 이 어둠은 당신을 삼키는 것이 아니라 새로운 시작을 품어주는 심연입니다.";

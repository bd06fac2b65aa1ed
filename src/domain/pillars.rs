// ==========================================
// 사주 운명 프로파일 엔진 - 干支与四柱
// ==========================================
// 天干 10 × 地支 12, 合法组合仅限六十甲子 (阴阳同性配对)
// 天干→五行 / 地支→五行 / 天干→长生锚支 均为封闭穷举表
// ==========================================

use crate::domain::types::{Element, Polarity};
use crate::error::EngineError;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 天干 (Heavenly Stem)
// ==========================================
// 序列化格式: 汉字单字 (与下游 JSON 契约一致, 如 dayMaster: "戊")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl HeavenlyStem {
    pub const ALL: [HeavenlyStem; 10] = [
        HeavenlyStem::Jia,
        HeavenlyStem::Yi,
        HeavenlyStem::Bing,
        HeavenlyStem::Ding,
        HeavenlyStem::Wu,
        HeavenlyStem::Ji,
        HeavenlyStem::Geng,
        HeavenlyStem::Xin,
        HeavenlyStem::Ren,
        HeavenlyStem::Gui,
    ];

    /// 天干序 (甲=0 .. 癸=9)
    pub fn index(&self) -> usize {
        match self {
            HeavenlyStem::Jia => 0,
            HeavenlyStem::Yi => 1,
            HeavenlyStem::Bing => 2,
            HeavenlyStem::Ding => 3,
            HeavenlyStem::Wu => 4,
            HeavenlyStem::Ji => 5,
            HeavenlyStem::Geng => 6,
            HeavenlyStem::Xin => 7,
            HeavenlyStem::Ren => 8,
            HeavenlyStem::Gui => 9,
        }
    }

    /// 由序号取天干 (对 10 取模, 全定义)
    pub fn from_index(idx: i64) -> Self {
        Self::ALL[idx.rem_euclid(10) as usize]
    }

    /// 汉字表示
    pub fn hanzi(&self) -> char {
        match self {
            HeavenlyStem::Jia => '甲',
            HeavenlyStem::Yi => '乙',
            HeavenlyStem::Bing => '丙',
            HeavenlyStem::Ding => '丁',
            HeavenlyStem::Wu => '戊',
            HeavenlyStem::Ji => '己',
            HeavenlyStem::Geng => '庚',
            HeavenlyStem::Xin => '辛',
            HeavenlyStem::Ren => '壬',
            HeavenlyStem::Gui => '癸',
        }
    }

    /// 天干→五行 封闭表
    pub fn element(&self) -> Element {
        match self {
            HeavenlyStem::Jia | HeavenlyStem::Yi => Element::Wood,
            HeavenlyStem::Bing | HeavenlyStem::Ding => Element::Fire,
            HeavenlyStem::Wu | HeavenlyStem::Ji => Element::Earth,
            HeavenlyStem::Geng | HeavenlyStem::Xin => Element::Metal,
            HeavenlyStem::Ren | HeavenlyStem::Gui => Element::Water,
        }
    }

    /// 阴阳: 偶数序为阳, 奇数序为阴
    pub fn polarity(&self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// 天干→长生锚支 封闭表
    ///
    /// 각 천간의 장생이 시작되는 지지. 阳干自锚支顺行, 阴干逆行
    pub fn anchor_branch(&self) -> EarthlyBranch {
        match self {
            HeavenlyStem::Jia => EarthlyBranch::Hai,  // 甲 → 亥
            HeavenlyStem::Bing => EarthlyBranch::Yin, // 丙 → 寅
            HeavenlyStem::Wu => EarthlyBranch::Yin,   // 戊 → 寅
            HeavenlyStem::Geng => EarthlyBranch::Si,  // 庚 → 巳
            HeavenlyStem::Ren => EarthlyBranch::Shen, // 壬 → 申
            HeavenlyStem::Yi => EarthlyBranch::WuMa,  // 乙 → 午 (逆行)
            HeavenlyStem::Ding => EarthlyBranch::You, // 丁 → 酉 (逆行)
            HeavenlyStem::Ji => EarthlyBranch::You,   // 己 → 酉 (逆行)
            HeavenlyStem::Xin => EarthlyBranch::Zi,   // 辛 → 子 (逆行)
            HeavenlyStem::Gui => EarthlyBranch::Mao,  // 癸 → 卯 (逆行)
        }
    }
}

impl fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

// ==========================================
// 地支 (Earthly Branch)
// ==========================================
// 序列化格式: 汉字单字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    WuMa, // 午 (马), 避免与天干戊(Wu)混淆
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl EarthlyBranch {
    pub const ALL: [EarthlyBranch; 12] = [
        EarthlyBranch::Zi,
        EarthlyBranch::Chou,
        EarthlyBranch::Yin,
        EarthlyBranch::Mao,
        EarthlyBranch::Chen,
        EarthlyBranch::Si,
        EarthlyBranch::WuMa,
        EarthlyBranch::Wei,
        EarthlyBranch::Shen,
        EarthlyBranch::You,
        EarthlyBranch::Xu,
        EarthlyBranch::Hai,
    ];

    /// 地支序 (子=0 .. 亥=11)
    pub fn index(&self) -> usize {
        match self {
            EarthlyBranch::Zi => 0,
            EarthlyBranch::Chou => 1,
            EarthlyBranch::Yin => 2,
            EarthlyBranch::Mao => 3,
            EarthlyBranch::Chen => 4,
            EarthlyBranch::Si => 5,
            EarthlyBranch::WuMa => 6,
            EarthlyBranch::Wei => 7,
            EarthlyBranch::Shen => 8,
            EarthlyBranch::You => 9,
            EarthlyBranch::Xu => 10,
            EarthlyBranch::Hai => 11,
        }
    }

    /// 由序号取地支 (对 12 取模, 全定义)
    pub fn from_index(idx: i64) -> Self {
        Self::ALL[idx.rem_euclid(12) as usize]
    }

    /// 汉字表示
    pub fn hanzi(&self) -> char {
        match self {
            EarthlyBranch::Zi => '子',
            EarthlyBranch::Chou => '丑',
            EarthlyBranch::Yin => '寅',
            EarthlyBranch::Mao => '卯',
            EarthlyBranch::Chen => '辰',
            EarthlyBranch::Si => '巳',
            EarthlyBranch::WuMa => '午',
            EarthlyBranch::Wei => '未',
            EarthlyBranch::Shen => '申',
            EarthlyBranch::You => '酉',
            EarthlyBranch::Xu => '戌',
            EarthlyBranch::Hai => '亥',
        }
    }

    /// 地支→五行 封闭表
    pub fn element(&self) -> Element {
        match self {
            EarthlyBranch::Yin | EarthlyBranch::Mao => Element::Wood,
            EarthlyBranch::Si | EarthlyBranch::WuMa => Element::Fire,
            EarthlyBranch::Chen
            | EarthlyBranch::Xu
            | EarthlyBranch::Chou
            | EarthlyBranch::Wei => Element::Earth,
            EarthlyBranch::Shen | EarthlyBranch::You => Element::Metal,
            EarthlyBranch::Hai | EarthlyBranch::Zi => Element::Water,
        }
    }

    /// 生肖 (年支展示用)
    pub fn animal(&self) -> &'static str {
        match self {
            EarthlyBranch::Zi => "Rat",
            EarthlyBranch::Chou => "Ox",
            EarthlyBranch::Yin => "Tiger",
            EarthlyBranch::Mao => "Rabbit",
            EarthlyBranch::Chen => "Dragon",
            EarthlyBranch::Si => "Snake",
            EarthlyBranch::WuMa => "Horse",
            EarthlyBranch::Wei => "Goat",
            EarthlyBranch::Shen => "Monkey",
            EarthlyBranch::You => "Rooster",
            EarthlyBranch::Xu => "Dog",
            EarthlyBranch::Hai => "Pig",
        }
    }
}

impl fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hanzi())
    }
}

// ==========================================
// 干支柱 (Sexagenary Pillar)
// ==========================================
// 红线: 干支阴阳必须同性 (序号同奇偶), 否则不在六十甲子内
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SexagenaryPillar {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl SexagenaryPillar {
    /// 按干支组合构造, 校验六十甲子合法性
    ///
    /// 合法性校验失败表示历法神谕契约被违反, 必须作为致命错误上抛
    pub fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, EngineError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(EngineError::InvalidPillarPair {
                stem: stem.hanzi(),
                branch: branch.hanzi(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// 按六十甲子周期序构造 (甲子=0, 对 60 取模, 全定义)
    ///
    /// 周期序构造保持奇偶一致, 恒为合法组合
    pub fn from_cycle_index(idx: i64) -> Self {
        let idx = idx.rem_euclid(60);
        Self {
            stem: HeavenlyStem::from_index(idx),
            branch: EarthlyBranch::from_index(idx),
        }
    }

    pub fn stem(&self) -> HeavenlyStem {
        self.stem
    }

    pub fn branch(&self) -> EarthlyBranch {
        self.branch
    }
}

impl fmt::Display for SexagenaryPillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem.hanzi(), self.branch.hanzi())
    }
}

// 序列化格式: 两字汉字串 (如 "己卯"), 与下游 fourPillars JSON 契约一致
impl Serialize for SexagenaryPillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SexagenaryPillar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PillarVisitor;

        impl<'de> Visitor<'de> for PillarVisitor {
            type Value = SexagenaryPillar;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("两字干支串, 如 \"甲子\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                let mut chars = v.chars();
                let (stem_ch, branch_ch) = match (chars.next(), chars.next(), chars.next()) {
                    (Some(s), Some(b), None) => (s, b),
                    _ => return Err(E::custom(format!("非法干支串: {v}"))),
                };
                let stem = HeavenlyStem::ALL
                    .into_iter()
                    .find(|s| s.hanzi() == stem_ch)
                    .ok_or_else(|| E::custom(format!("未知天干: {stem_ch}")))?;
                let branch = EarthlyBranch::ALL
                    .into_iter()
                    .find(|b| b.hanzi() == branch_ch)
                    .ok_or_else(|| E::custom(format!("未知地支: {branch_ch}")))?;
                SexagenaryPillar::new(stem, branch).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PillarVisitor)
    }
}

// ==========================================
// 四柱 (Four Pillars)
// ==========================================
// 年/月/日/时 各一柱, 每次排盘生成一次, 之后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: SexagenaryPillar,
    pub month: SexagenaryPillar,
    pub day: SexagenaryPillar,
    #[serde(rename = "time")]
    pub hour: SexagenaryPillar,
}

impl FourPillars {
    /// 八字的五行展开 (4 干 + 4 支, 恒为 8 个)
    pub fn elements(&self) -> [Element; 8] {
        [
            self.year.stem().element(),
            self.year.branch().element(),
            self.month.stem().element(),
            self.month.branch().element(),
            self.day.stem().element(),
            self.day.branch().element(),
            self.hour.stem().element(),
            self.hour.branch().element(),
        ]
    }

    /// 日主 (일간): 日柱天干
    pub fn day_master(&self) -> DayMaster {
        DayMaster(self.day.stem())
    }

    /// 年支生肖
    pub fn year_animal(&self) -> &'static str {
        self.year.branch().animal()
    }
}

// ==========================================
// 日主 (Day Master / 일간)
// ==========================================
// 主体的核心五行身份, 其阴阳决定长生轮盘行走方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayMaster(pub HeavenlyStem);

impl DayMaster {
    pub fn stem(&self) -> HeavenlyStem {
        self.0
    }

    pub fn element(&self) -> Element {
        self.0.element()
    }

    pub fn polarity(&self) -> Polarity {
        self.0.polarity()
    }

    pub fn anchor_branch(&self) -> EarthlyBranch {
        self.0.anchor_branch()
    }
}

impl fmt::Display for DayMaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hanzi())
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_cycle_all_valid() {
        // 六十甲子周期序逐一构造, 全部合法且互不相同
        let mut seen = std::collections::HashSet::new();
        for i in 0..60 {
            let p = SexagenaryPillar::from_cycle_index(i);
            assert_eq!(
                p.stem().index() % 2,
                p.branch().index() % 2,
                "干支奇偶必须一致: {p}"
            );
            assert!(seen.insert(p), "六十甲子不得重复: {p}");
        }
        assert_eq!(seen.len(), 60);
        // 周期 60
        assert_eq!(
            SexagenaryPillar::from_cycle_index(0),
            SexagenaryPillar::from_cycle_index(60)
        );
    }

    #[test]
    fn test_invalid_pair_rejected() {
        // 甲(阳) + 丑(阴) 不在六十甲子内
        let err = SexagenaryPillar::new(HeavenlyStem::Jia, EarthlyBranch::Chou);
        assert!(err.is_err(), "阴阳不匹配的配对必须被拒绝");
        // 甲子 合法
        assert!(SexagenaryPillar::new(HeavenlyStem::Jia, EarthlyBranch::Zi).is_ok());
    }

    #[test]
    fn test_stem_element_table() {
        assert_eq!(HeavenlyStem::Jia.element(), Element::Wood);
        assert_eq!(HeavenlyStem::Yi.element(), Element::Wood);
        assert_eq!(HeavenlyStem::Bing.element(), Element::Fire);
        assert_eq!(HeavenlyStem::Wu.element(), Element::Earth);
        assert_eq!(HeavenlyStem::Xin.element(), Element::Metal);
        assert_eq!(HeavenlyStem::Gui.element(), Element::Water);
    }

    #[test]
    fn test_branch_element_table() {
        // 土支有四个: 辰戌丑未
        let earth: Vec<_> = EarthlyBranch::ALL
            .into_iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earth.len(), 4, "土支应为辰戌丑未四个");
        assert_eq!(EarthlyBranch::Yin.element(), Element::Wood);
        assert_eq!(EarthlyBranch::WuMa.element(), Element::Fire);
        assert_eq!(EarthlyBranch::Shen.element(), Element::Metal);
        assert_eq!(EarthlyBranch::Zi.element(), Element::Water);
    }

    #[test]
    fn test_anchor_branch_table() {
        // 阳干锚支
        assert_eq!(HeavenlyStem::Jia.anchor_branch(), EarthlyBranch::Hai);
        assert_eq!(HeavenlyStem::Bing.anchor_branch(), EarthlyBranch::Yin);
        assert_eq!(HeavenlyStem::Wu.anchor_branch(), EarthlyBranch::Yin);
        assert_eq!(HeavenlyStem::Geng.anchor_branch(), EarthlyBranch::Si);
        assert_eq!(HeavenlyStem::Ren.anchor_branch(), EarthlyBranch::Shen);
        // 阴干锚支
        assert_eq!(HeavenlyStem::Yi.anchor_branch(), EarthlyBranch::WuMa);
        assert_eq!(HeavenlyStem::Ding.anchor_branch(), EarthlyBranch::You);
        assert_eq!(HeavenlyStem::Ji.anchor_branch(), EarthlyBranch::You);
        assert_eq!(HeavenlyStem::Xin.anchor_branch(), EarthlyBranch::Zi);
        assert_eq!(HeavenlyStem::Gui.anchor_branch(), EarthlyBranch::Mao);
    }

    #[test]
    fn test_stem_polarity_alternates() {
        for stem in HeavenlyStem::ALL {
            let expected = if stem.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(stem.polarity(), expected, "{stem} 阴阳应随序号交替");
        }
    }

    #[test]
    fn test_pillar_serde_hanzi_string() {
        let p = SexagenaryPillar::new(HeavenlyStem::Ji, EarthlyBranch::Mao).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"己卯\"");
        let back: SexagenaryPillar = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_day_master_from_pillars() {
        let pillars = FourPillars {
            year: SexagenaryPillar::from_cycle_index(15), // 己卯
            month: SexagenaryPillar::from_cycle_index(12), // 丙子
            day: SexagenaryPillar::from_cycle_index(54),  // 戊午
            hour: SexagenaryPillar::from_cycle_index(54), // 戊午
        };
        assert_eq!(pillars.day_master().stem(), HeavenlyStem::Wu);
        assert_eq!(pillars.day_master().element(), Element::Earth);
        assert_eq!(pillars.day_master().polarity(), Polarity::Yang);
        assert_eq!(pillars.year_animal(), "Rabbit");
    }
}

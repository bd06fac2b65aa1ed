// ==========================================
// 사주 운명 프로파일 엔진 - 人生节律引擎
// ==========================================
// 职责: 按日主在十二长生轮盘上的位置, 生成 0~90 岁十年节点曲线
// 红线: 行走方向由日主阴阳决定 (阳顺行, 阴逆行), 必须严格复现,
//       方向错误会产生看似合理实则错误的阶段
// ==========================================

use crate::domain::pillars::{DayMaster, EarthlyBranch};
use crate::domain::rhythm::{LifeRhythm, LifeStagePoint};
use crate::domain::types::{SeasonCategory, TwelveStage, DORMANT_STAGE_DESCRIPTION};
use crate::oracle::CalendricalOracle;
use tracing::instrument;

/// 十年节点目标年龄: 0, 10, ..., 90
pub const TARGET_AGES: [u32; 10] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90];

// ==========================================
// LifeStageAnalyzer - 人生节律引擎
// ==========================================
pub struct LifeStageAnalyzer<'a> {
    oracle: &'a dyn CalendricalOracle,
}

impl<'a> LifeStageAnalyzer<'a> {
    pub fn new(oracle: &'a dyn CalendricalOracle) -> Self {
        Self { oracle }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成人生节律曲线 (恒为 10 个节点, 按年龄升序)
    #[instrument(skip(self), fields(day_master = %day_master, birth_year))]
    pub fn analyze(&self, day_master: DayMaster, birth_year: i32) -> LifeRhythm {
        let points = TARGET_AGES
            .into_iter()
            .map(|age| {
                let target_year = birth_year + age as i32;
                let branch = self.oracle.year_branch(target_year);
                let stage = Self::stage_for_branch(day_master, branch);
                Self::point(age, target_year, stage)
            })
            .collect();
        LifeRhythm::new(points)
    }

    /// 日主在给定地支处的长生阶段
    ///
    /// 阶段下标 = 符号化的模 12 偏移: sign * (支序 - 锚支序),
    /// 符号由日主阴阳给出, 正反两个方向共用同一条公式
    pub fn stage_for_branch(day_master: DayMaster, branch: EarthlyBranch) -> TwelveStage {
        let anchor = day_master.anchor_branch().index() as i32;
        let offset = branch.index() as i32 - anchor;
        TwelveStage::from_index(day_master.polarity().sign() * offset)
    }

    /// 阶段→四季 分层规则:
    /// 1) 分值 ≥ 80 → 여름
    /// 2) 否则 分值 ≤ 20 或 절/태 终末阶段 → 겨울 (覆盖分值判定)
    /// 3) 否则 轮盘下标 < 4 (成长段) 或 = 11 (양) → 봄
    /// 4) 其余 → 가을
    pub fn categorize(stage: TwelveStage) -> SeasonCategory {
        let score = stage.score();
        if score >= 80 {
            SeasonCategory::Summer
        } else if score <= 20 || stage.is_dormant() {
            SeasonCategory::Winter
        } else if stage.index() < 4 || stage.index() == 11 {
            SeasonCategory::Spring
        } else {
            SeasonCategory::Autumn
        }
    }

    /// 组装单个节点, 절/태 使用专属文案覆盖季节级模板
    fn point(age: u32, year: i32, stage: TwelveStage) -> LifeStagePoint {
        let category = Self::categorize(stage);
        let description = if stage.is_dormant() {
            DORMANT_STAGE_DESCRIPTION
        } else {
            category.description()
        };
        LifeStagePoint {
            age,
            year,
            score: stage.score(),
            stage,
            category,
            label: category.label(),
            description,
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pillars::HeavenlyStem;
    use crate::oracle::SexagenaryCalendar;

    #[test]
    fn test_anchor_branch_is_birth_stage() {
        // 任意日主在其锚支处必为장생
        for stem in HeavenlyStem::ALL {
            let dm = DayMaster(stem);
            assert_eq!(
                LifeStageAnalyzer::stage_for_branch(dm, dm.anchor_branch()),
                TwelveStage::Birth,
                "{stem} 在锚支处应为장생"
            );
        }
    }

    #[test]
    fn test_yang_walks_forward() {
        // 甲(阳) 锚支亥: 子(亥+1) → 목욕
        let dm = DayMaster(HeavenlyStem::Jia);
        assert_eq!(
            LifeStageAnalyzer::stage_for_branch(dm, EarthlyBranch::Zi),
            TwelveStage::Bath
        );
        // 亥+2 = 丑 → 관대
        assert_eq!(
            LifeStageAnalyzer::stage_for_branch(dm, EarthlyBranch::Chou),
            TwelveStage::Dress
        );
    }

    #[test]
    fn test_yin_walks_backward() {
        // 乙(阴) 锚支午: 巳(午-1) → 목욕
        let dm = DayMaster(HeavenlyStem::Yi);
        assert_eq!(
            LifeStageAnalyzer::stage_for_branch(dm, EarthlyBranch::Si),
            TwelveStage::Bath
        );
        // 午-2 = 辰 → 관대
        assert_eq!(
            LifeStageAnalyzer::stage_for_branch(dm, EarthlyBranch::Chen),
            TwelveStage::Dress
        );
    }

    #[test]
    fn test_opposite_polarity_walks_are_mirrored() {
        // 阳顺阴逆: 沿地支正向推进时, 阳干阶段下标 +1, 阴干阶段下标 -1
        let yang = DayMaster(HeavenlyStem::Jia);
        let yin = DayMaster(HeavenlyStem::Yi);
        for i in 0..12i64 {
            let b0 = EarthlyBranch::from_index(i);
            let b1 = EarthlyBranch::from_index(i + 1);
            let yang_step = (LifeStageAnalyzer::stage_for_branch(yang, b1).index() as i32
                - LifeStageAnalyzer::stage_for_branch(yang, b0).index() as i32)
                .rem_euclid(12);
            let yin_step = (LifeStageAnalyzer::stage_for_branch(yin, b1).index() as i32
                - LifeStageAnalyzer::stage_for_branch(yin, b0).index() as i32)
                .rem_euclid(12);
            assert_eq!(yang_step, 1, "阳干沿支正向每步阶段 +1");
            assert_eq!(yin_step, 11, "阴干沿支正向每步阶段 -1 (mod 12)");
        }
    }

    #[test]
    fn test_category_layered_rule_full_table() {
        use SeasonCategory::*;
        // 十二阶段逐一核对分层归类
        let expected = [
            (TwelveStage::Birth, Spring),      // 75, 下标0
            (TwelveStage::Bath, Spring),       // 30, 下标1
            (TwelveStage::Dress, Summer),      // 80
            (TwelveStage::Peak, Summer),       // 90
            (TwelveStage::Prosperity, Summer), // 100
            (TwelveStage::Decline, Autumn),    // 60, 下标5
            (TwelveStage::Sickness, Winter),   // 20
            (TwelveStage::Death, Winter),      // 15
            (TwelveStage::Grave, Winter),      // 10
            (TwelveStage::Cut, Winter),        // 5, 终末特例
            (TwelveStage::Embryo, Winter),     // 40, 终末特例覆盖分值
            (TwelveStage::Nourish, Spring),    // 50, 下标11
        ];
        for (stage, category) in expected {
            assert_eq!(
                LifeStageAnalyzer::categorize(stage),
                category,
                "{stage} 归类错误"
            );
        }
    }

    #[test]
    fn test_dormant_stage_overrides_description() {
        // 태 (40分) 不满足分值≤20, 仍强制겨울 + 专属文案
        let point = LifeStageAnalyzer::point(20, 2020, TwelveStage::Embryo);
        assert_eq!(point.category, SeasonCategory::Winter);
        assert_eq!(point.description, DORMANT_STAGE_DESCRIPTION);
        assert_eq!(point.label, "심연");
        // 对照: 병 (20分) 归겨울但用季节级模板
        let point = LifeStageAnalyzer::point(30, 2030, TwelveStage::Sickness);
        assert_eq!(point.category, SeasonCategory::Winter);
        assert_eq!(point.description, SeasonCategory::Winter.description());
    }

    #[test]
    fn test_rhythm_has_ten_ascending_points() {
        let oracle = SexagenaryCalendar::new();
        let analyzer = LifeStageAnalyzer::new(&oracle);
        let rhythm = analyzer.analyze(DayMaster(HeavenlyStem::Wu), 2000);
        assert_eq!(rhythm.len(), 10, "节律恒为10个节点");
        let points = rhythm.points();
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.age, i as u32 * 10, "年龄按 0,10,...,90 升序");
            assert_eq!(p.year, 2000 + p.age as i32);
        }
    }

    #[test]
    fn test_stage_periodic_in_branch_offset() {
        // 相隔 12 年 (支序同余) 的节点阶段一致
        let oracle = SexagenaryCalendar::new();
        let dm = DayMaster(HeavenlyStem::Geng);
        for year in [1900, 1977, 2024] {
            assert_eq!(
                LifeStageAnalyzer::stage_for_branch(dm, oracle.year_branch(year)),
                LifeStageAnalyzer::stage_for_branch(dm, oracle.year_branch(year + 12)),
                "{year} 与 {} 支序同余, 阶段应一致",
                year + 12
            );
        }
    }

    #[test]
    fn test_reference_rhythm_2000_wu_day_master() {
        // 戊(阳土) 锚支寅: 2000 辰年 → 관대(여름), 2010 寅年 → 장생(봄),
        // 2020 子年 → 태(겨울, 专属文案)
        let oracle = SexagenaryCalendar::new();
        let analyzer = LifeStageAnalyzer::new(&oracle);
        let rhythm = analyzer.analyze(DayMaster(HeavenlyStem::Wu), 2000);
        let points = rhythm.points();

        assert_eq!(points[0].stage, TwelveStage::Dress);
        assert_eq!(points[0].score, 80);
        assert_eq!(points[0].category, SeasonCategory::Summer);

        assert_eq!(points[1].stage, TwelveStage::Birth);
        assert_eq!(points[1].category, SeasonCategory::Spring);

        assert_eq!(points[2].stage, TwelveStage::Embryo);
        assert_eq!(points[2].category, SeasonCategory::Winter);
        assert_eq!(points[2].description, DORMANT_STAGE_DESCRIPTION);
    }
}

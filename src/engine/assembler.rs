// ==========================================
// 사주 운명 프로파일 엔진 - 档案组装引擎
// ==========================================
// 职责: 应用输入默认值, 调用神谕与各引擎, 组装不可变运命档案
// 核心为同步纯函数: 相同输入恒产出相同档案, 无共享可变状态
// ==========================================

use crate::config::ProfileDefaults;
use crate::domain::birth::BirthInput;
use crate::domain::profile::DestinyProfile;
use crate::engine::element_balance::ElementBalance;
use crate::engine::life_stage::LifeStageAnalyzer;
use crate::engine::remedy::RemedySelector;
use crate::oracle::CalendricalOracle;
use chrono::Datelike;
use tracing::instrument;

// ==========================================
// ProfileAssembler - 档案组装引擎
// ==========================================
pub struct ProfileAssembler<'a> {
    oracle: &'a dyn CalendricalOracle,
    defaults: ProfileDefaults,
}

impl<'a> ProfileAssembler<'a> {
    pub fn new(oracle: &'a dyn CalendricalOracle) -> Self {
        Self {
            oracle,
            defaults: ProfileDefaults::default(),
        }
    }

    /// 注入自定义默认值策略
    pub fn with_defaults(oracle: &'a dyn CalendricalOracle, defaults: ProfileDefaults) -> Self {
        Self { oracle, defaults }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 组装运命档案
    ///
    /// 到达此处的畸形输入已全部回退到默认值, 组装本身不会失败
    #[instrument(skip(self, input), fields(time_unknown = input.birth_time_unknown))]
    pub fn assemble(&self, input: &BirthInput) -> DestinyProfile {
        // 1. 应用默认值 (未知时辰 → 正午, 畸形日期 → 回退日期)
        let moment = input.resolve(&self.defaults);

        // 2. 排盘 (历法神谕边界)
        let pillars = self.oracle.four_pillars(&moment);
        let day_master = pillars.day_master();

        // 3. 五行平衡 → 缺失列表 → 补益方案
        let balance = ElementBalance::analyze(&pillars);
        let missing = balance.missing();
        let remedy = RemedySelector::select(&missing);

        // 4. 人生节律
        let rhythm = LifeStageAnalyzer::new(self.oracle).analyze(day_master, moment.date.year());

        // 5. 展示字段占位
        let name = input
            .name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.defaults.default_name.clone());
        let birth_city = input
            .birth_city
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.defaults.default_city.clone());

        DestinyProfile {
            name,
            birth_city,
            birth_date: moment.date,
            birth_time: moment.effective_time(),
            birth_time_unknown: moment.time_unknown,
            animal: pillars.year_animal(),
            four_pillars: pillars,
            day_master,
            element_balance: balance,
            missing_elements: missing,
            remedy,
            life_rhythm: rhythm,
        }
    }
}

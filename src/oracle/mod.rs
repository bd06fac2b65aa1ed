// ==========================================
// 사주 운명 프로파일 엔진 - 历法神谕边界
// ==========================================
// 阳历↔干支换算 (含节气边界) 是独立的难题子系统,
// 核心只依赖这条不透明边界: 输入民用时刻, 输出干支柱
// ==========================================

mod sexagenary;

pub use sexagenary::SexagenaryCalendar;

use crate::domain::birth::BirthMoment;
use crate::domain::pillars::{EarthlyBranch, FourPillars};

// ==========================================
// 历法神谕 (Calendrical Oracle)
// ==========================================
// 契约: 输出恒为六十甲子内的合法干支; 违反即内部致命故障,
//       不是用户可见错误
pub trait CalendricalOracle {
    /// 民用出生时刻 → 四柱
    fn four_pillars(&self, moment: &BirthMoment) -> FourPillars;

    /// 公历年号 → 该干支年的地支
    fn year_branch(&self, year: i32) -> EarthlyBranch;
}

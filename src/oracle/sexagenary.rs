// ==========================================
// 사주 운명 프로파일 엔진 - 干支历参考实现
// ==========================================
// 纯算术干支历:
// - 年柱: 六十甲子年序 (y-4) mod 60, 年界取立春 (平均日 2月4日)
// - 月柱: 十二节月界 (平均日期表) + 五虎遁月
// - 日柱: 儒略日序 60 周期 (锚点 1900-01-01 = 甲戌日)
// - 时柱: 时支 ((h+1)/2) mod 12 + 五鼠遁时, 23时起算次日子时
// 节气取平均日期 (实际逐年浮动约一日); 需要天文级精度时
// 通过 CalendricalOracle 接缝替换完整历法实现
// ==========================================

use super::CalendricalOracle;
use crate::domain::birth::BirthMoment;
use crate::domain::pillars::{EarthlyBranch, FourPillars, SexagenaryPillar};
use chrono::{Datelike, NaiveDate, Timelike};

// 日柱锚点校准: (JDN + 49) mod 60, 已对 1900-01-01 = 甲戌 验证
const DAY_CYCLE_OFFSET: i64 = 49;

// 干支年序基准: 公元 4 年为甲子年
const YEAR_CYCLE_BASE: i32 = 4;

// 十二节月界平均日期 (月, 日), 自立春起:
// 寅:立春 卯:惊蛰 辰:清明 巳:立夏 午:芒种 未:小暑
// 申:立秋 酉:白露 戌:寒露 亥:立冬 子:大雪 丑:小寒(次年)
const JIE_BOUNDARIES: [(u32, u32); 12] = [
    (2, 4),
    (3, 6),
    (4, 5),
    (5, 6),
    (6, 6),
    (7, 7),
    (8, 8),
    (9, 8),
    (10, 8),
    (11, 7),
    (12, 7),
    (1, 6),
];

// ==========================================
// SexagenaryCalendar - 干支历神谕
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct SexagenaryCalendar;

impl SexagenaryCalendar {
    pub fn new() -> Self {
        Self
    }

    /// 儒略日序 (民用日期, 格里历外推)
    fn julian_day_number(date: NaiveDate) -> i64 {
        i64::from(date.num_days_from_ce()) + 1_721_425
    }

    /// 干支同余合并: 干序 a (mod 10) 与支序 b (mod 12) → 六十甲子序
    ///
    /// 奇偶一致时恒有唯一解 (6a - 5b) mod 60
    fn pillar(stem_idx: i64, branch_idx: i64) -> SexagenaryPillar {
        SexagenaryPillar::from_cycle_index((6 * stem_idx - 5 * branch_idx).rem_euclid(60))
    }

    fn boundary_date(adjusted_year: i32, k: usize) -> NaiveDate {
        let (year, (month, day)) = if k < 11 {
            (adjusted_year, JIE_BOUNDARIES[k])
        } else {
            (adjusted_year + 1, JIE_BOUNDARIES[11])
        };
        NaiveDate::from_ymd_opt(year, month, day).expect("固定节气日期表恒为合法日期")
    }

    /// 日期所属的干支年号 (立春前归前一年)
    fn sexagenary_year_number(date: NaiveDate) -> i32 {
        if date < Self::boundary_date(date.year(), 0) {
            date.year() - 1
        } else {
            date.year()
        }
    }

    /// 节月序 (寅月=0 .. 丑月=11)
    fn month_index(date: NaiveDate, adjusted_year: i32) -> usize {
        let mut idx = 0;
        for k in 0..12 {
            if date >= Self::boundary_date(adjusted_year, k) {
                idx = k;
            }
        }
        idx
    }

    /// 年柱
    fn year_pillar(adjusted_year: i32) -> SexagenaryPillar {
        SexagenaryPillar::from_cycle_index(i64::from(adjusted_year - YEAR_CYCLE_BASE))
    }

    /// 月柱: 五虎遁月 (甲己→丙寅起, 乙庚→戊寅起, ...)
    fn month_pillar(adjusted_year: i32, month_index: usize) -> SexagenaryPillar {
        let year_stem = Self::year_pillar(adjusted_year).stem().index() as i64;
        let first_month_stem = (year_stem % 5) * 2 + 2;
        let stem_idx = first_month_stem + month_index as i64;
        let branch_idx = (month_index as i64 + 2) % 12;
        Self::pillar(stem_idx, branch_idx)
    }

    /// 日柱 (23 时起已切换到次日)
    fn day_pillar(civil_day: NaiveDate) -> SexagenaryPillar {
        SexagenaryPillar::from_cycle_index(Self::julian_day_number(civil_day) + DAY_CYCLE_OFFSET)
    }

    /// 时柱: 五鼠遁时 (甲己→甲子起, 乙庚→丙子起, ...)
    fn hour_pillar(day_pillar: SexagenaryPillar, hour: u32) -> SexagenaryPillar {
        let branch_idx = i64::from((hour + 1) / 2) % 12;
        let day_stem = day_pillar.stem().index() as i64;
        let stem_idx = (day_stem % 5) * 2 + branch_idx;
        Self::pillar(stem_idx, branch_idx)
    }
}

impl CalendricalOracle for SexagenaryCalendar {
    fn four_pillars(&self, moment: &BirthMoment) -> FourPillars {
        let date = moment.date;
        let hour = moment.effective_time().hour();

        // 夜子时 (23:00 起) 日柱切换到次日
        let civil_day = if hour >= 23 {
            date.succ_opt().unwrap_or(date)
        } else {
            date
        };

        let adjusted_year = Self::sexagenary_year_number(date);
        let month_index = Self::month_index(date, adjusted_year);
        let day = Self::day_pillar(civil_day);

        FourPillars {
            year: Self::year_pillar(adjusted_year),
            month: Self::month_pillar(adjusted_year, month_index),
            day,
            hour: Self::hour_pillar(day, hour),
        }
    }

    fn year_branch(&self, year: i32) -> EarthlyBranch {
        EarthlyBranch::from_index(i64::from(year - YEAR_CYCLE_BASE))
    }
}

// ==========================================
// 사주 운명 프로파일 엔진 - 配置层
// ==========================================
// 默认值策略: 观测自权威参考输出的固定业务规则,
//            集中在一处, 待校准时只改这一张表
// ==========================================

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

// ==========================================
// 档案默认值策略 (Profile Defaults)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// 出生日期缺失或不可解析时的回退日期
    #[serde(default = "default_fallback_birth_date")]
    pub fallback_birth_date: NaiveDate,

    /// 姓名缺失时的占位串
    #[serde(default = "default_name")]
    pub default_name: String,

    /// 出生城市缺失时的占位串
    #[serde(default = "default_city")]
    pub default_city: String,
}

impl ProfileDefaults {
    /// 时辰未知时的固定有效时间 (午时)
    pub const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
        Some(t) => t,
        None => unreachable!(),
    };
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            fallback_birth_date: default_fallback_birth_date(),
            default_name: default_name(),
            default_city: default_city(),
        }
    }
}

fn default_fallback_birth_date() -> NaiveDate {
    match NaiveDate::from_ymd_opt(2000, 1, 1) {
        Some(d) => d,
        None => unreachable!(),
    }
}

fn default_name() -> String {
    "Traveler".to_string()
}

fn default_city() -> String {
    "Seoul".to_string()
}

// ==========================================
// 사주 운명 프로파일 엔진 - 出生时刻
// ==========================================
// 红线: 畸形的出生日期/时间输入从不向外抛错,
//       在任何排盘计算发生之前静默替换为文档化默认值
// ==========================================

use crate::config::ProfileDefaults;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ==========================================
// 出生时刻 (Birth Moment)
// ==========================================
// 不变量: time_unknown=true 或时间缺失时, 有效时间固定为 12:00 (午时)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub time_unknown: bool,
}

impl BirthMoment {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, time_unknown: bool) -> Self {
        Self {
            date,
            time,
            time_unknown,
        }
    }

    /// 有效时间: 未知或缺失 → 正午 (时辰未知时的标准处理)
    pub fn effective_time(&self) -> NaiveTime {
        if self.time_unknown {
            return ProfileDefaults::NOON;
        }
        self.time.unwrap_or(ProfileDefaults::NOON)
    }

    pub fn effective_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.effective_time())
    }
}

// ==========================================
// 出生信息输入契约 (Birth Input)
// ==========================================
// 请求层原始载荷: ISO 日期串 + 可选 24 小时制时间串 + 时辰未知标记
// + 仅用于展示的姓名/城市 (不参与任何计算)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    #[serde(default)]
    pub birth_date: Option<String>,

    /// "HH:MM" 格式
    #[serde(default)]
    pub birth_time: Option<String>,

    #[serde(default)]
    pub birth_time_unknown: bool,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub birth_city: Option<String>,
}

impl BirthInput {
    /// 解析为出生时刻, 畸形输入回退到默认值
    ///
    /// 回退规则:
    /// - 日期缺失或不可解析 → defaults.fallback_birth_date
    /// - 时间缺失或不可解析 → 正午 (通过 effective_time 统一兜底)
    pub fn resolve(&self, defaults: &ProfileDefaults) -> BirthMoment {
        let date = match self.birth_date.as_deref() {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(d) => d,
                Err(_) => {
                    warn!(raw, "出生日期不可解析, 回退到默认日期");
                    defaults.fallback_birth_date
                }
            },
            None => defaults.fallback_birth_date,
        };

        let time = match self.birth_time.as_deref() {
            Some(raw) => match NaiveTime::parse_from_str(raw, "%H:%M") {
                Ok(t) => Some(t),
                Err(_) => {
                    warn!(raw, "出生时间不可解析, 回退到正午");
                    None
                }
            },
            None => None,
        };

        BirthMoment::new(date, time, self.birth_time_unknown)
    }
}

// ==========================================
// 사주 운명 프로파일 엔진 - 核心库
// ==========================================
// 系统定位: 出生时刻 → 运命档案 的纯转换核心
// 数据流: 出生时刻 → (历法神谕) → 四柱 → 五行平衡 → 缺失五行
//        → 补益方案; 日主 + 目标年龄 → 人生节律; 由组装引擎合流
// 核心内无 I/O, 无共享可变状态, 无网络调用
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与封闭枚举
pub mod domain;

// 历法神谕边界 - 阳历↔干支换算接缝
pub mod oracle;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 默认值策略
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BirthInput, BirthMoment, DayMaster, DestinyProfile, EarthlyBranch, Element, FourPillars,
    HeavenlyStem, LifeRhythm, LifeStagePoint, Polarity, RemedySchema, SeasonCategory,
    SexagenaryPillar, TwelveStage,
};

// 引擎
pub use engine::{ElementBalance, LifeStageAnalyzer, ProfileAssembler, RemedySelector};

// 历法神谕
pub use oracle::{CalendricalOracle, SexagenaryCalendar};

// 配置
pub use config::ProfileDefaults;

// 错误
pub use error::{EngineError, EngineResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "사주 운명 프로파일 엔진";

// ==========================================
// 预编译检查
// ==========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

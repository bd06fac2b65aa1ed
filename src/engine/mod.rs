// ==========================================
// 사주 운명 프로파일 엔진 - 引擎层
// ==========================================
// 业务规则: 五行平衡 / 人生节律 / 补益选取 / 档案组装
// ==========================================

pub mod assembler;
pub mod element_balance;
pub mod life_stage;
pub mod remedy;

pub use assembler::ProfileAssembler;
pub use element_balance::ElementBalance;
pub use life_stage::{LifeStageAnalyzer, TARGET_AGES};
pub use remedy::{RemedySelector, DEFAULT_REMEDY_ELEMENT};

// ==========================================
// 사주 운명 프로파일 엔진 - 领域模型层
// ==========================================
// 全部为值对象: 每次请求新建, 请求之间不保留任何状态
// ==========================================

pub mod birth;
pub mod pillars;
pub mod profile;
pub mod remedy;
pub mod rhythm;
pub mod types;

pub use birth::{BirthInput, BirthMoment};
pub use pillars::{DayMaster, EarthlyBranch, FourPillars, HeavenlyStem, SexagenaryPillar};
pub use profile::DestinyProfile;
pub use remedy::RemedySchema;
pub use rhythm::{LifeRhythm, LifeStagePoint};
pub use types::{Element, Polarity, SeasonCategory, TwelveStage, DORMANT_STAGE_DESCRIPTION};

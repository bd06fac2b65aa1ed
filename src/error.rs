// ==========================================
// 사주 운명 프로파일 엔진 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 用户输入畸形不是错误 (静默回退到文档化默认值);
//       封闭表查不到 / 干支配对非法属于内部契约违规, 必须致命上抛
// ==========================================

use thiserror::Error;

/// 核心引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 历法契约违规 =====
    #[error("干支配对非法: {stem}{branch} 不在六十甲子内 (阴阳不匹配)")]
    InvalidPillarPair { stem: char, branch: char },

    #[error("历法神谕契约违规: {0}")]
    OracleContractViolation(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

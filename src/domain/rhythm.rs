// ==========================================
// 사주 운명 프로파일 엔진 - 人生节律
// ==========================================
// 0,10,...,90 岁共 10 个十年节点, 按年龄升序排列
// ==========================================

use crate::domain::types::{SeasonCategory, TwelveStage};
use serde::Serialize;

// ==========================================
// 人生节律节点 (Life Stage Point)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifeStagePoint {
    pub age: u32,
    pub year: i32,
    pub score: u32,
    pub stage: TwelveStage,
    pub category: SeasonCategory,
    pub label: &'static str,
    pub description: &'static str,
}

// ==========================================
// 人生节律曲线 (Life Rhythm)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LifeRhythm {
    points: Vec<LifeStagePoint>,
}

impl LifeRhythm {
    /// 由引擎生成的节点序列构造
    ///
    /// 不变量: 按年龄严格升序
    pub fn new(points: Vec<LifeStagePoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[0].age < w[1].age),
            "节律节点必须按年龄严格升序"
        );
        Self { points }
    }

    pub fn points(&self) -> &[LifeStagePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 拐点: 首尾节点 + 局部极值 (展示层高亮用)
    pub fn inflection_points(&self) -> Vec<&LifeStagePoint> {
        self.points
            .iter()
            .enumerate()
            .filter(|(i, p)| {
                if *i == 0 || *i == self.points.len() - 1 {
                    return true;
                }
                let prev = self.points[i - 1].score;
                let next = self.points[i + 1].score;
                (p.score > prev && p.score >= next) || (p.score < prev && p.score <= next)
            })
            .map(|(_, p)| p)
            .collect()
    }

    /// 曲线峰值节点 (同分取更早的年龄)
    pub fn peak(&self) -> Option<&LifeStagePoint> {
        self.points.iter().max_by(|a, b| {
            a.score.cmp(&b.score).then(b.age.cmp(&a.age))
        })
    }

    /// 曲线谷值节点 (同分取更早的年龄)
    pub fn trough(&self) -> Option<&LifeStagePoint> {
        self.points.iter().min_by(|a, b| {
            a.score.cmp(&b.score).then(a.age.cmp(&b.age))
        })
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn point(age: u32, score: u32) -> LifeStagePoint {
        LifeStagePoint {
            age,
            year: 2000 + age as i32,
            score,
            stage: TwelveStage::Birth,
            category: SeasonCategory::Spring,
            label: SeasonCategory::Spring.label(),
            description: SeasonCategory::Spring.description(),
        }
    }

    #[test]
    fn test_inflection_includes_endpoints() {
        let rhythm = LifeRhythm::new(vec![point(0, 50), point(10, 60), point(20, 70)]);
        let inflections = rhythm.inflection_points();
        // 单调序列只保留首尾
        assert_eq!(inflections.len(), 2);
        assert_eq!(inflections[0].age, 0);
        assert_eq!(inflections[1].age, 20);
    }

    #[test]
    fn test_inflection_detects_peak_and_trough() {
        let rhythm = LifeRhythm::new(vec![
            point(0, 50),
            point(10, 90), // 峰
            point(20, 30), // 谷
            point(30, 60),
        ]);
        let ages: Vec<u32> = rhythm.inflection_points().iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![0, 10, 20, 30]);
    }

    #[test]
    fn test_peak_and_trough() {
        let rhythm = LifeRhythm::new(vec![point(0, 50), point(10, 90), point(20, 5)]);
        assert_eq!(rhythm.peak().unwrap().age, 10);
        assert_eq!(rhythm.trough().unwrap().age, 20);
    }

    #[test]
    fn test_peak_tie_prefers_earlier_age() {
        let rhythm = LifeRhythm::new(vec![point(0, 90), point(10, 90), point(20, 10)]);
        assert_eq!(rhythm.peak().unwrap().age, 0, "同分峰值取更早年龄");
    }
}

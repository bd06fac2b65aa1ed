// ==========================================
// 사주 운명 프로파일 엔진 - 补益方案
// ==========================================
// 按五行键控的固定处方记录 (艺术风格/音乐速度/色彩/关键词)
// 静态不可变, 进程启动后无任何生命周期
// ==========================================

use crate::domain::types::Element;
use serde::Serialize;

// ==========================================
// 补益方案 (Remedy Schema)
// ==========================================
// 序列化格式: camelCase (与下游 art_curation JSON 契约一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedySchema {
    pub missing_element: Element,
    pub art_style: &'static str,
    pub music_tempo: &'static str,
    /// 低饱和色调 Hex 色值
    pub color_code: &'static str,
    pub keyword: &'static str,
}

impl RemedySchema {
    /// 五行→补益方案 封闭表
    ///
    /// 对封闭五行集全定义, 不存在错误路径
    pub fn for_element(element: Element) -> RemedySchema {
        match element {
            Element::Wood => RemedySchema {
                missing_element: Element::Wood,
                art_style: "Forest, Growth, Vertical Lines",
                music_tempo: "Andante (Walking Pace, nature sounds)",
                color_code: "#81B29A", // Sage Green
                keyword: "Growth (성장)",
            },
            Element::Fire => RemedySchema {
                missing_element: Element::Fire,
                art_style: "Impressionism, Light, Warmth",
                music_tempo: "Allegro (Upbeat, Passionate)",
                color_code: "#E07A5F", // Terracotta
                keyword: "Passion (열정)",
            },
            Element::Earth => RemedySchema {
                missing_element: Element::Earth,
                art_style: "Landscape, Horizon, Texture",
                music_tempo: "Adagio (Slow, Grounded)",
                color_code: "#F2CC8F", // Mustard Yellow
                keyword: "Stability (안정)",
            },
            Element::Metal => RemedySchema {
                missing_element: Element::Metal,
                art_style: "Minimalism, Geometry, Clarity",
                music_tempo: "Moderato (Clean, structured)",
                color_code: "#A8DADC", // Pale Cyan
                keyword: "Clarity (명료)",
            },
            Element::Water => RemedySchema {
                missing_element: Element::Water,
                art_style: "Abstract, Fluidity, Depth",
                music_tempo: "Largo (Flowing, Deep)",
                color_code: "#3D5A80", // Slate Blue
                keyword: "Wisdom (지혜)",
            },
        }
    }
}

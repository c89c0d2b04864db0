//! Prompt templates for insight and narration generation
//!
//! Each insight mode has a fixed instruction that is followed directly by the
//! note content.

use crate::domain::models::InsightMode;

/// Fixed prompt templates
pub struct PromptTemplates;

impl PromptTemplates {
    /// Instruction prefix for an insight mode
    pub fn instruction(mode: InsightMode) -> &'static str {
        match mode {
            InsightMode::Summary => "다음 노트 내용을 요약해 주세요: ",
            InsightMode::KeyPoints => "다음 노트 내용에서 주요 포인트를 추출해 주세요: ",
            InsightMode::Questions => "다음 노트 내용을 바탕으로 관련 질문을 생성해 주세요: ",
            InsightMode::ActionItems => {
                "다음 노트 내용에서 실행 가능한 액션 아이템을 추출해 주세요: "
            }
            InsightMode::General => "다음 노트 내용을 바탕으로 인사이트를 생성해 주세요: ",
        }
    }

    /// Full insight prompt for a note
    pub fn insight(mode: InsightMode, content: &str) -> String {
        format!("{}{}", Self::instruction(mode), content)
    }

    fn narration_template() -> &'static str {
        r#"
당신은 프로페셔널한 팟캐스트 진행자입니다. 다음 노트의 내용을 바탕으로 청중에게 설명하는 듯한 자연스러운 1인 내레이션 스크립트를 작성해주세요.
- 노트 내용: {content}
- 어조: 친근하면서도 지적인, "이 부분은 꼭 기억하세요" 같은 추임새 포함.
- 형식: 오직 스크립트 내용만 출력하세요. (제목이나 지시문 제외)
"#
    }

    /// Prompt asking for a single-narrator podcast script
    pub fn narration_script(content: &str) -> String {
        Self::narration_template().replace("{content}", content)
    }
}

use std::collections::HashSet;

use crate::DialogueError;

/// One scripted line, synthesized to `<id>.mp3`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueItem {
    /// Unique, filename-safe identifier
    pub id: &'static str,
    pub text: &'static str,
}

impl DialogueItem {
    pub const fn new(id: &'static str, text: &'static str) -> Self {
        Self { id, text }
    }

    /// Leading characters of the text, for progress logs
    pub fn preview(&self) -> String {
        self.text.chars().take(20).collect()
    }
}

/// Assistant lines of the health-assistant onboarding conversation
pub const SCRIPT: [DialogueItem; 5] = [
    DialogueItem::new("ai_intro", "下午好，我是您的专属医疗健康助理依依。请问您怎么称呼？"),
    DialogueItem::new(
        "ai_age",
        "张阿姨您好。为了给您建立更准确的健康档案，我想先了解一下，您今年多大年纪了？",
    ),
    DialogueItem::new(
        "ai_check_risk",
        "65岁，看着一点都不像呢。不过张阿姨，咱们女性到了这个年纪，钙流失会快一些，容易出现骨质疏松。您平时有没有觉得腰酸背痛，或者腿脚抽筋的情况呀？",
    ),
    DialogueItem::new(
        "ai_living_status",
        "那是得注意了，这可能是骨关节发出的信号。平时您去医院做检查或者理疗，是孩子们陪着您去吗？",
    ),
    DialogueItem::new(
        "ai_safety_log",
        "一个人跑医院确实辛苦，也不太安全。我已经在您的档案里特别备注了“独居看护”重点关注。张阿姨，以后哪怕只是感觉身体有一点点不舒服，或者仅仅是想找人说说话，随时点开我，依依会一直陪在您身边的。",
    ),
];

/// Check that ids are unique and filename-safe and that no text is empty
pub fn validate(items: &[DialogueItem]) -> Result<(), DialogueError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        let filename_safe = !item.id.is_empty()
            && item
                .id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !filename_safe {
            return Err(DialogueError::InvalidId(item.id));
        }

        if item.text.trim().is_empty() {
            return Err(DialogueError::EmptyText(item.id));
        }

        if !seen.insert(item.id) {
            return Err(DialogueError::DuplicateId(item.id));
        }
    }

    Ok(())
}

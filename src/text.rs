//! Localized strings
//!
//! Hint logic lives in [`crate::sim::hint`]; this module only turns it into words.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sim::{ArrowKey, CardinalDirection, ControlNote, FailReason, Hint};

/// Display language. Serialized as its tag (`"zh-TW"`, `"en"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Traditional Chinese
    #[default]
    ZhTw,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::ZhTw => "zh-TW",
            Language::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "zh" | "zh-tw" | "zh_tw" | "zhtw" => Some(Language::ZhTw),
            "en" | "en-us" | "english" => Some(Language::En),
            _ => None,
        }
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Language::from_str(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language `{}`", tag)))
    }
}

/// Where the gem is, e.g. "above"
pub fn direction_name(direction: CardinalDirection, lang: Language) -> &'static str {
    match (lang, direction) {
        (Language::ZhTw, CardinalDirection::Up) => "上方",
        (Language::ZhTw, CardinalDirection::Down) => "下方",
        (Language::ZhTw, CardinalDirection::Left) => "左方",
        (Language::ZhTw, CardinalDirection::Right) => "右方",
        (Language::En, CardinalDirection::Up) => "above",
        (Language::En, CardinalDirection::Down) => "below",
        (Language::En, CardinalDirection::Left) => "to the left",
        (Language::En, CardinalDirection::Right) => "to the right",
    }
}

/// Key label with its arrow glyph
pub fn key_label(key: ArrowKey, lang: Language) -> &'static str {
    match (lang, key) {
        (Language::ZhTw, ArrowKey::Up) => "↑上鍵",
        (Language::ZhTw, ArrowKey::Down) => "↓下鍵",
        (Language::ZhTw, ArrowKey::Left) => "←左鍵",
        (Language::ZhTw, ArrowKey::Right) => "→右鍵",
        (Language::En, ArrowKey::Up) => "↑ Up",
        (Language::En, ArrowKey::Down) => "↓ Down",
        (Language::En, ArrowKey::Left) => "← Left",
        (Language::En, ArrowKey::Right) => "→ Right",
    }
}

/// Parenthetical control note; empty when controls match the screen
pub fn note_text(note: ControlNote, lang: Language) -> &'static str {
    match (lang, note) {
        (_, ControlNote::Aligned) => "",
        (Language::ZhTw, ControlNote::Inverted) => "相機朝向你，控制相反",
        (Language::ZhTw, ControlNote::NoseRight) => "鼻朝右",
        (Language::ZhTw, ControlNote::NoseLeft) => "鼻朝左",
        (Language::En, ControlNote::Inverted) => "facing the camera, controls reversed",
        (Language::En, ControlNote::NoseRight) => "nose pointing right",
        (Language::En, ControlNote::NoseLeft) => "nose pointing left",
    }
}

/// Render a hint. Without a suggested key only the gem's direction is shown.
pub fn render_hint(hint: &Hint, lang: Language) -> String {
    let direction = direction_name(hint.target_direction, lang);

    let Some(key) = hint.suggested_key else {
        return match lang {
            Language::ZhTw => format!("寶石在{}", direction),
            Language::En => format!("The gem is {}", direction),
        };
    };

    let key = key_label(key, lang);
    let note = note_text(hint.note, lang);
    let note = if note.is_empty() {
        String::new()
    } else {
        format!(" ({})", note)
    };

    match lang {
        Language::ZhTw => format!("提示: 寶石在{}，試試按 {}{}", direction, key, note),
        Language::En => format!("Hint: the gem is {}, try {}{}", direction, key, note),
    }
}

/// Game-over headline
pub fn failure_text(reason: FailReason, lang: Language) -> &'static str {
    match (lang, reason) {
        (Language::ZhTw, FailReason::Boundary) => "你撞到了邊界!",
        (Language::ZhTw, FailReason::WrongDirection) => "你移動到了錯誤的方向!",
        (Language::En, FailReason::Boundary) => "You hit the boundary!",
        (Language::En, FailReason::WrongDirection) => "You moved the wrong way!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Facing;

    #[test]
    fn test_short_hint_hides_key() {
        let hint = Hint::new(Facing::Left, CardinalDirection::Up, false);
        assert_eq!(render_hint(&hint, Language::ZhTw), "寶石在上方");
        assert_eq!(render_hint(&hint, Language::En), "The gem is above");
    }

    #[test]
    fn test_full_hint_names_key_and_note() {
        let hint = Hint::new(Facing::Left, CardinalDirection::Up, true);
        assert_eq!(
            render_hint(&hint, Language::ZhTw),
            "提示: 寶石在上方，試試按 ←左鍵 (鼻朝右)"
        );

        let hint = Hint::new(Facing::Back, CardinalDirection::Right, true);
        assert_eq!(
            render_hint(&hint, Language::En),
            "Hint: the gem is to the right, try → Right"
        );
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!(Language::from_str("EN"), Some(Language::En));
        assert_eq!(Language::from_str("zh-TW"), Some(Language::ZhTw));
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn test_language_tag_round_trips_through_json() {
        for lang in [Language::ZhTw, Language::En] {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.as_str()));
            assert_eq!(serde_json::from_str::<Language>(&json).unwrap(), lang);
        }
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(failure_text(FailReason::Boundary, Language::ZhTw), "你撞到了邊界!");
        assert_eq!(
            failure_text(FailReason::WrongDirection, Language::En),
            "You moved the wrong way!"
        );
    }
}

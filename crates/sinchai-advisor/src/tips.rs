//! Organic farming tips and their rotation.

use serde::Serialize;
use sinchai_core::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub content: &'static str,
}

const fn tip(title: &'static str, content: &'static str) -> Tip {
    Tip { title, content }
}

pub static TIPS_EN: [Tip; 8] = [
    tip(
        "💧 Mulching Benefits",
        "Add 5-10 cm of organic mulch (straw, leaves) around plants. Retains soil moisture, reduces watering by 30-50%, and improves soil fertility.",
    ),
    tip(
        "🌧️ Pre-Rain Strategy",
        "Before forecast rain, reduce irrigation. Avoid waterlogging by stopping 2-3 days before rainfall. Your crops need oxygen too!",
    ),
    tip(
        "🕐 Best Watering Time",
        "Water early morning (4-6 AM) or evening (6-8 PM) to reduce evaporation and save 20-40% water. Avoid midday watering.",
    ),
    tip(
        "♻️ Organic Compost",
        "Mix 1-2 kg compost per square meter. Improves water-holding capacity naturally and reduces synthetic irrigation needs.",
    ),
    tip(
        "🍃 Crop Residue Use",
        "Don't burn stubble! Use as mulch or compost. Builds soil structure and water retention over time.",
    ),
    tip(
        "🌱 Green Manuring",
        "Plant legumes like clover between seasons. Fixes nitrogen naturally and improves soil water-holding capacity.",
    ),
    tip(
        "💨 Wind Damage Prevention",
        "High wind speeds (>25 km/h) increase evaporation. Plant windbreaks or use organic mulch protection during windy seasons.",
    ),
    tip(
        "🐛 Organic Pest Control",
        "Healthy, well-watered plants resist pests better. Balanced irrigation reduces stress-related infestations naturally.",
    ),
];

pub static TIPS_PA: [Tip; 4] = [
    tip(
        "💧 ਪਾਲਕ ਦੇ ਫਾਇਦੇ",
        "ਪੌਦਿਆਂ ਦੁਆਲੇ 5-10 ਸੈਂਟੀਮੀਟਰ ਜੈਵਿਕ ਪਾਲਕ (ਤੂੜ, ਪੱਤੇ) ਪਾਓ। ਭੂਮੀ ਦੀ ਨਮੀ ਬਰਕਰਾਰ ਰੱਖਦਾ ਹੈ ਅਤੇ ਸਿੰਚਾਈ 30-50% ਘਟਾਓ।",
    ),
    tip(
        "🌧️ ਮੀਂਹ ਤੋਂ ਪਹਿਲੇ ਤਰੀਕਾ",
        "ਮੀਂਹ ਆਉਣ ਤੋਂ ਪਹਿਲੇ ਸਿੰਚਾਈ ਘਟਾਓ। 2-3 ਦਿਨ ਪਹਿਲੇ ਸਿੰਚਾਈ ਬੰਦ ਕਰ ਦਿਓ ਤਾਂ ਕਿ ਪੌਦਿਆਂ ਨੂੰ ਹਵਾ ਮਿਲੇ।",
    ),
    tip(
        "🕐 ਸਲਾਹ ਭਿੰਨ ਸਮਾ",
        "ਸਵੇਰੇ (4-6 ਵਜੇ) ਜਾਂ ਸ਼ਾਮ (6-8 ਵਜੇ) ਨੂੰ ਸਿੰਚਾਈ ਕਰੋ। ਭਾਫ਼ ਜਾਣ ਵਾਲਾ ਪਾਣੀ ਘਟਾਓ ਅਤੇ 20-40% ਬਚਾਓ।",
    ),
    tip(
        "♻️ ਜੈਵਿਕ ਖਾਦ",
        "ਪ੍ਰਤੀ ਵਰਗ ਮੀਟਰ 1-2 ਕਿਲੋ ਖਾਦ ਮਿਲਾਓ। ਭੂਮੀ ਦੀ ਨਮੀ ਸਮਰੱਥਾ ਕੁਦਰਤੀ ਤਰੀਕੇ ਨਾਲ ਵਧਾਉਂਦਾ ਹੈ।",
    ),
];

pub fn tips_for(language: Language) -> &'static [Tip] {
    match language {
        Language::English => &TIPS_EN,
        Language::Punjabi => &TIPS_PA,
    }
}

/// Cyclic position in the tip list.
///
/// The index is shared between languages and wrapped against whichever list
/// is asked for, so switching language keeps rotating instead of resetting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipCycle {
    index: usize,
}

impl TipCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current tip and advance
    pub fn next_tip(&mut self, language: Language) -> Option<&'static Tip> {
        self.next_from(tips_for(language))
    }

    fn next_from(&mut self, tips: &'static [Tip]) -> Option<&'static Tip> {
        if tips.is_empty() {
            return None;
        }

        let tip = &tips[self.index % tips.len()];
        self.index = (self.index + 1) % tips.len();
        Some(tip)
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut cycle = TipCycle::new();
        let titles: Vec<_> = (0..10)
            .filter_map(|_| cycle.next_tip(Language::English))
            .map(|t| t.title)
            .collect();

        assert_eq!(titles[0], "💧 Mulching Benefits");
        assert_eq!(titles[7], "🐛 Organic Pest Control");
        assert_eq!(titles[8], titles[0]);
        assert_eq!(titles[9], titles[1]);
    }

    #[test]
    fn test_restart() {
        let mut cycle = TipCycle::new();
        cycle.next_tip(Language::English);
        cycle.next_tip(Language::English);
        cycle.restart();
        assert_eq!(cycle.position(), 0);
        assert_eq!(cycle.next_tip(Language::English), Some(&TIPS_EN[0]));
    }

    #[test]
    fn test_language_switch_wraps_against_shorter_list() {
        let mut cycle = TipCycle::new();
        for _ in 0..7 {
            cycle.next_tip(Language::English);
        }
        assert_eq!(cycle.position(), 7);

        // 7 % 4 == 3, then the index wraps to 8 % 4 == 0
        assert_eq!(cycle.next_tip(Language::Punjabi), Some(&TIPS_PA[3]));
        assert_eq!(cycle.position(), 0);
    }

    #[test]
    fn test_empty_list_yields_none() {
        let mut cycle = TipCycle::new();
        assert_eq!(cycle.next_from(&[]), None);
        assert_eq!(cycle.position(), 0);
    }
}

//! Static shadowing catalog
//!
//! The catalog is fixed at compile time and materialized once on first
//! access. Sentences are grouped per practice language; ids are unique
//! across the whole catalog.

use std::sync::LazyLock;

use crate::entities::{DifficultyTier, ReferenceSentence};
use crate::value_objects::{PracticeLanguage, SentenceId};

struct CatalogEntry {
    id: &'static str,
    text: &'static str,
    translation: &'static str,
    hint: &'static str,
    tier: DifficultyTier,
}

const ENGLISH_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "A1-001",
        text: "Could you tell me how to get to the nearest station?",
        translation: "最寄り駅への行き方を教えていただけますか？",
        hint: "Keep the polite tone; don't rush the cluster in 'station'.",
        tier: DifficultyTier::Easy,
    },
    CatalogEntry {
        id: "A1-002",
        text: "I started learning English to improve my work communication.",
        translation: "仕事でのコミュニケーションを上達させるために英語の勉強を始めました。",
        hint: "Take 'started' and 'communication' slowly.",
        tier: DifficultyTier::Easy,
    },
    CatalogEntry {
        id: "A1-006",
        text: "Could you repeat that?",
        translation: "もう一度言っていただけますか？",
        hint: "Link 'repeat that'; keep 'could you' weak and short.",
        tier: DifficultyTier::Easy,
    },
    CatalogEntry {
        id: "A2-003",
        text: "Let me check my schedule and get back to you this afternoon.",
        translation: "予定を確認して、今日の午後に折り返し連絡します。",
        hint: "Blend 'get back to you'; stress the second syllable of 'afternoon'.",
        tier: DifficultyTier::Normal,
    },
    CatalogEntry {
        id: "B1-004",
        text: "If we streamline the process, we can reduce errors and save time.",
        translation: "プロセスを合理化すれば、ミスを減らして時間を節約できます。",
        hint: "Don't over-lengthen the first vowel of 'streamline'.",
        tier: DifficultyTier::Normal,
    },
    CatalogEntry {
        id: "B2-005",
        text: "With clearer goals and regular feedback, our team can maintain high \
               motivation and keep improving.",
        translation: "目標を明確にし定期的なフィードバックを行えば、チームは高いモチベーションを維持し続けられます。",
        hint: "Watch the rhythm of 'clearer' and 'regular'.",
        tier: DifficultyTier::Hard,
    },
    CatalogEntry {
        id: "B2-007",
        text: "We need to evaluate cost-effectiveness from a long-term perspective.",
        translation: "長期的な観点から費用対効果を評価する必要があります。",
        hint: "Group 'cost-effectiveness' as one unit; keep 'from a' weak.",
        tier: DifficultyTier::Hard,
    },
];

const KOREAN_ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "K1-001",
        text: "안녕하세요. 처음 뵙겠습니다.",
        translation: "こんにちは。はじめまして。",
        hint: "Keep the final syllables light; don't stress '-니다'.",
        tier: DifficultyTier::Easy,
    },
    CatalogEntry {
        id: "K1-002",
        text: "천천히 말씀해 주세요.",
        translation: "ゆっくり話してください。",
        hint: "Hold the doubled syllables of '천천히' evenly.",
        tier: DifficultyTier::Easy,
    },
    CatalogEntry {
        id: "K2-003",
        text: "근처에 맛있는 식당을 추천해 주실 수 있나요?",
        translation: "近くの美味しい食堂を推薦してもらえますか？",
        hint: "Run '추천해' into '주실' without a pause.",
        tier: DifficultyTier::Normal,
    },
    CatalogEntry {
        id: "K2-004",
        text: "자료를 검토한 뒤에 다시 연락드릴게요.",
        translation: "資料を確認した後で、改めてご連絡します。",
        hint: "Keep '-드릴게요' soft with a falling tone.",
        tier: DifficultyTier::Normal,
    },
    CatalogEntry {
        id: "K3-005",
        text: "장기적인 관점에서 비용 대비 효율을 평가해야 합니다.",
        translation: "長期的な観点から費用対効果を評価しなければなりません。",
        hint: "Group '비용 대비 효율' as a single phrase.",
        tier: DifficultyTier::Hard,
    },
    CatalogEntry {
        id: "K3-006",
        text: "위험 요소를 조기에 식별하고 완화 전략을 준비합시다.",
        translation: "リスク要因を早期に特定し、緩和策を準備しましょう。",
        hint: "Don't let '식별하고' swallow its final syllable.",
        tier: DifficultyTier::Hard,
    },
];

fn materialize(entries: &'static [CatalogEntry]) -> Vec<ReferenceSentence> {
    entries
        .iter()
        .map(|e| {
            #[allow(clippy::expect_used)] // Infallible with valid static ids
            let id = SentenceId::new(e.id).expect("catalog ids are non-empty");
            ReferenceSentence::new(id, e.text, e.translation, e.hint, e.tier)
        })
        .collect()
}

static ENGLISH_CATALOG: LazyLock<Vec<ReferenceSentence>> =
    LazyLock::new(|| materialize(ENGLISH_ENTRIES));

static KOREAN_CATALOG: LazyLock<Vec<ReferenceSentence>> =
    LazyLock::new(|| materialize(KOREAN_ENTRIES));

/// The shadowing sentences for a practice language
#[must_use]
pub fn shadowing_catalog(language: PracticeLanguage) -> &'static [ReferenceSentence] {
    match language {
        PracticeLanguage::English => &ENGLISH_CATALOG,
        PracticeLanguage::Korean => &KOREAN_CATALOG,
    }
}

/// Look up a sentence by id across all languages
#[must_use]
pub fn sentence_by_id(id: &str) -> Option<&'static ReferenceSentence> {
    ENGLISH_CATALOG
        .iter()
        .chain(KOREAN_CATALOG.iter())
        .find(|s| s.id.as_str() == id)
}

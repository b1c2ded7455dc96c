//! 翻訳パッチの定数テーブル
//!
//! 各ロケールに適用する `parent` セクションと `common` の上書き値を定義する。

use std::collections::HashSet;

use super::types::{
    Locale,
    PARENT_SECTION,
    PatchSet,
    SectionOverride,
};
use crate::config::ValidationError;

/// English patch.
const EN: PatchSet = PatchSet {
    locale: Locale::En,
    parent: &[
        ("hello", "Hello,"),
        ("track_children_progress", "Track your children's progress"),
        ("current_level", "Current Level"),
        ("child_progress", "Child's learning progress"),
        ("progress_to_next", "Progress to next level"),
        ("lesson_curriculum", "Lesson Curriculum"),
        ("selected_child", "Selected Child"),
        ("my_children", "My Children"),
        ("groups", "Groups"),
        ("exams_title", "Exams & Performance"),
        ("exams_subtitle", "Track your child's exam performance"),
        ("score", "Score"),
        ("rank", "Rank"),
        ("average", "Class Avg"),
        ("pending", "Pending"),
        ("subject", "Subject"),
        ("report_problem", "Report Bot Problem"),
        ("report_problem_message", "Please describe the issue you're experiencing"),
        ("logout_confirm", "Logout"),
        ("logout_message", "Are you sure you want to log out?"),
        ("logout", "Log Out"),
        ("app", "App"),
        ("version", "Version"),
        ("log_out", "Log Out"),
    ],
    overrides: &[
        SectionOverride { section: "common", key: "cancel", value: "Cancel" },
        SectionOverride { section: "common", key: "send", value: "Send" },
    ],
    confirmation: "✓ Updated en.json with parent translations",
};

/// Russian patch.
const RU: PatchSet = PatchSet {
    locale: Locale::Ru,
    parent: &[
        ("hello", "Привет,"),
        ("track_children_progress", "Отслеживайте прогресс ваших детей"),
        ("current_level", "Текущий уровень"),
        ("child_progress", "Прогресс обучения ребёнка"),
        ("progress_to_next", "Прогресс до следующего уровня"),
        ("lesson_curriculum", "Программа уроков"),
        ("selected_child", "Выбранный ребёнок"),
        ("my_children", "Мои дети"),
        ("groups", "Группы"),
        ("exams_title", "Экзамены и успеваемость"),
        ("exams_subtitle", "Отслеживайте успеваемость вашего ребёнка"),
        ("score", "Балл"),
        ("rank", "Ранг"),
        ("average", "Средний балл"),
        ("pending", "Ожидается"),
        ("subject", "Предмет"),
        ("report_problem", "Сообщить о проблеме"),
        ("report_problem_message", "Пожалуйста, опишите проблему"),
        ("logout_confirm", "Выход"),
        ("logout_message", "Вы уверены, что хотите выйти?"),
        ("logout", "Выйти"),
        ("app", "Приложение"),
        ("version", "Версия"),
        ("log_out", "Выйти"),
    ],
    overrides: &[
        SectionOverride { section: "common", key: "cancel", value: "Отмена" },
        SectionOverride { section: "common", key: "send", value: "Отправить" },
    ],
    confirmation: "✓ Updated ru.json",
};

/// Uzbek patch.
const UZ: PatchSet = PatchSet {
    locale: Locale::Uz,
    parent: &[
        ("hello", "Salom,"),
        ("track_children_progress", "Farzandlaringiz muvaffaqiyatini kuzatib boring"),
        ("current_level", "Joriy daraja"),
        ("child_progress", "Bolaning o'qish jarayoni"),
        ("progress_to_next", "Keyingi darajaga o'tish"),
        ("lesson_curriculum", "Dars dasturi"),
        ("selected_child", "Tanlangan farzand"),
        ("my_children", "Mening farzandlarim"),
        ("groups", "Guruhlar"),
        ("exams_title", "Imtihonlar va natijalar"),
        ("exams_subtitle", "Farzandingiz imtihon natijalarini kuzating"),
        ("score", "Ball"),
        ("rank", "Daraja"),
        ("average", "O'rtacha ball"),
        ("pending", "Kutilmoqda"),
        ("subject", "Fan"),
        ("report_problem", "Muammo haqida xabar berish"),
        ("report_problem_message", "Iltimos, muammoni tasvirlab bering"),
        ("logout_confirm", "Chiqish"),
        ("logout_message", "Haqiqatan ham chiqmoqchimisiz?"),
        ("logout", "Chiqish"),
        ("app", "Ilova"),
        ("version", "Versiya"),
        ("log_out", "Chiqish"),
    ],
    overrides: &[
        SectionOverride { section: "common", key: "cancel", value: "Bekor qilish" },
        SectionOverride { section: "common", key: "send", value: "Yuborish" },
    ],
    confirmation: "✓ Updated uz.json",
};

/// The built-in table, one patch set per [`Locale`].
pub static PATCH_TABLE: PatchTable = PatchTable::new(&[EN, RU, UZ]);

/// Look up the built-in patch set for a locale.
#[must_use]
pub const fn patch_set(locale: Locale) -> &'static PatchSet {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
        Locale::Uz => &UZ,
    }
}

/// An ordered collection of patch sets sharing one key shape.
#[derive(Debug, Clone, Copy)]
pub struct PatchTable {
    /// Patch sets in table order
    sets: &'static [PatchSet],
}

impl PatchTable {
    #[must_use]
    pub const fn new(sets: &'static [PatchSet]) -> Self {
        Self { sets }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> Option<&'static PatchSet> {
        self.sets.iter().find(|set| set.locale == locale)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static PatchSet> {
        self.sets.iter()
    }

    /// Check that every patch set has the same shape and no empty values.
    ///
    /// The first patch set is the reference: every other set must list the
    /// same `parent` keys in the same order and override the same
    /// `(section, key)` pairs.
    ///
    /// # Errors
    /// - Empty table or duplicate locale
    /// - Duplicate or empty-valued key within a patch set
    /// - Key shape differing from the reference patch set
    /// - Override targeting the replaced `parent` section
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let Some(reference) = self.sets.first() else {
            return Err(vec![ValidationError::new(
                "table",
                "At least one patch set is required",
            )]);
        };

        let mut seen_locales = HashSet::new();
        for set in self.sets {
            let code = set.locale.code();

            if !seen_locales.insert(set.locale) {
                errors.push(ValidationError::new(code, "Locale appears more than once in the table"));
            }

            validate_values(set, &mut errors);

            let expected: Vec<_> = reference.parent_keys().collect();
            let actual: Vec<_> = set.parent_keys().collect();
            if let Some(message) = describe_shape_mismatch(&expected, &actual) {
                errors.push(ValidationError::new(
                    format!("{code}.{PARENT_SECTION}"),
                    format!("{message} (compared with '{}')", reference.locale),
                ));
            }

            let expected: Vec<_> =
                reference.override_targets().map(|(s, k)| format!("{s}.{k}")).collect();
            let actual: Vec<_> = set.override_targets().map(|(s, k)| format!("{s}.{k}")).collect();
            let expected: Vec<&str> = expected.iter().map(String::as_str).collect();
            let actual: Vec<&str> = actual.iter().map(String::as_str).collect();
            if let Some(message) = describe_shape_mismatch(&expected, &actual) {
                errors.push(ValidationError::new(
                    format!("{code}.overrides"),
                    format!("{message} (compared with '{}')", reference.locale),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Per-set checks: empty values, duplicate keys, overrides into `parent`.
fn validate_values(set: &PatchSet, errors: &mut Vec<ValidationError>) {
    let code = set.locale.code();

    let mut seen_keys = HashSet::new();
    for (key, value) in set.parent {
        let field_path = format!("{code}.{PARENT_SECTION}.{key}");
        if !seen_keys.insert(*key) {
            errors.push(ValidationError::new(&field_path, "Key is declared more than once"));
        }
        if value.trim().is_empty() {
            errors.push(ValidationError::new(field_path, "The translation cannot be empty"));
        }
    }

    let mut seen_targets = HashSet::new();
    for o in set.overrides {
        let field_path = format!("{code}.{}.{}", o.section, o.key);
        if o.section == PARENT_SECTION {
            errors.push(ValidationError::new(
                &field_path,
                "Overrides cannot target the replaced 'parent' section; add the key to the parent list instead",
            ));
        }
        if !seen_targets.insert((o.section, o.key)) {
            errors.push(ValidationError::new(&field_path, "Key is overridden more than once"));
        }
        if o.value.trim().is_empty() {
            errors.push(ValidationError::new(field_path, "The translation cannot be empty"));
        }
    }
}

/// Describe how `actual` differs from `expected`, or `None` when identical.
fn describe_shape_mismatch(expected: &[&str], actual: &[&str]) -> Option<String> {
    if expected == actual {
        return None;
    }

    let missing: Vec<_> = expected.iter().filter(|k| !actual.contains(*k)).copied().collect();
    let extra: Vec<_> = actual.iter().filter(|k| !expected.contains(*k)).copied().collect();

    let message = if missing.is_empty() && extra.is_empty() {
        "Keys are declared in a different order".to_string()
    } else {
        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing [{}]", missing.join(", ")));
        }
        if !extra.is_empty() {
            parts.push(format!("unexpected [{}]", extra.join(", ")));
        }
        format!("Key shape differs: {}", parts.join("; "))
    };
    Some(message)
}

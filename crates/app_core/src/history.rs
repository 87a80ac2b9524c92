use chrono::{DateTime, Duration, Utc};
use shared::domain::{HistoryItem, HistoryItemId, Identity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    items: Vec<HistoryItem>,
}

impl HistoryStore {
    pub fn for_session(identity: &Identity, now: DateTime<Utc>) -> Self {
        Self {
            items: seed(identity, now),
        }
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sample requests for a signed-in user; guests start with nothing.
pub fn seed(identity: &Identity, now: DateTime<Utc>) -> Vec<HistoryItem> {
    if identity.is_guest() {
        return Vec::new();
    }

    vec![
        HistoryItem {
            id: HistoryItemId(1),
            question: "Как настроить чувствительность маски ELEMENT HD COLOR?".to_string(),
            answer: "Поверните регулятор чувствительности по часовой стрелке, пока \
                     светофильтр не начнёт срабатывать от дуги без ложных затемнений."
                .to_string(),
            created_at: now,
        },
        HistoryItem {
            id: HistoryItemId(2),
            question: "Какой номер затемнения выбрать для аргона?".to_string(),
            answer: "Для TIG-сварки в аргоне на токах 50–150 А обычно подходит DIN 10–11."
                .to_string(),
            created_at: now - Duration::hours(24),
        },
    ]
}

#[cfg(test)]
#[path = "tests/history_tests.rs"]
mod tests;
